//! Prompt construction for the Taleweaver story generation library.

mod builder;
pub mod inspiration;

pub use builder::StoryPrompt;
