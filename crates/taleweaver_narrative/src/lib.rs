//! Story generation orchestration for Taleweaver.
//!
//! Composes the rate limiter, response cache, prompt builder, and a
//! [`taleweaver_interface::StoryDriver`] backend into the generation
//! service consumed by callers.

mod normalize;
mod service;

pub use normalize::normalize_story;
pub use service::StoryGenerator;
