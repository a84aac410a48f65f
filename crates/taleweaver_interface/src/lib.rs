//! Backend trait definitions for the Taleweaver story generation library.

mod driver;

pub use driver::{GenerationResult, StoryDriver};
