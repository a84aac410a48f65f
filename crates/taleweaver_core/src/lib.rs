//! Core data types for the Taleweaver story generation library.
//!
//! This crate provides the foundation data types used across all Taleweaver
//! interfaces: the story parameter record, the prompt payload, and the
//! response types returned by generation.

mod image;
mod observability;
mod params;
mod payload;
mod response;

pub use image::StoryImage;
pub use observability::init_tracing;
pub use params::{
    Atmosphere, Genre, Mood, Period, Perspective, StoryFormat, StoryLength, StoryParams,
    StoryParamsBuilder,
};
pub use payload::PromptPayload;
pub use response::{RawGeneration, StoryMeta, StoryResponse, StorySource};
