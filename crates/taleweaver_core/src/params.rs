//! Story request parameters.

use crate::StoryImage;
use serde::{Deserialize, Serialize};

/// Story genre.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Genre {
    #[default]
    Fantasy,
    SciFi,
    Mystery,
    Horror,
    Adventure,
    Romance,
}

/// Narrative voice for the story.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Perspective {
    FirstPerson,
    SecondPerson,
    #[default]
    ThirdPerson,
}

/// Output shape of the story.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StoryFormat {
    /// Prose with a paragraph and dialogue mix
    #[default]
    Narrative,
    /// Speech-only lines of the form `Speaker: line`
    Dialogue,
}

/// Target story length.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StoryLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl StoryLength {
    /// Approximate word count for this length.
    pub fn words(&self) -> u32 {
        match self {
            StoryLength::Short => 1000,
            StoryLength::Medium => 2500,
            StoryLength::Long => 5000,
        }
    }
}

/// Overall emotional mood of the story.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mood {
    Happy,
    Mysterious,
    Humorous,
    Sad,
}

impl Mood {
    /// Descriptor phrase used in prompt instructions.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Mood::Happy => "happy and uplifting",
            Mood::Mysterious => "mysterious",
            Mood::Humorous => "humorous",
            Mood::Sad => "melancholic",
        }
    }
}

/// Historical period the story takes place in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Period {
    Ancient,
    Medieval,
    Renaissance,
    Victorian,
    Modern,
    NearFuture,
    FarFuture,
    PostApocalyptic,
}

impl Period {
    /// Descriptor phrase used in prompt instructions.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Period::Ancient => "the ancient world (before 500 AD)",
            Period::Medieval => "the medieval era (500-1500 AD)",
            Period::Renaissance => "the Renaissance (1300-1600)",
            Period::Victorian => "the Victorian era (1837-1901)",
            Period::Modern => "the present day",
            Period::NearFuture => "the near future (the next 50 years)",
            Period::FarFuture => "the far future (100+ years from now)",
            Period::PostApocalyptic => "a post-apocalyptic world",
        }
    }
}

/// Weather and season backdrop.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Atmosphere {
    Summer,
    Winter,
    Rainy,
    Sunny,
}

impl Atmosphere {
    /// Descriptor phrase used in prompt instructions.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Atmosphere::Summer => "high summer",
            Atmosphere::Winter => "deep winter",
            Atmosphere::Rainy => "rainy and overcast",
            Atmosphere::Sunny => "bright and sunny",
        }
    }
}

/// Parameters describing one story generation request.
///
/// Constructed once per submission and immutable thereafter. Either `plot`
/// carries a non-trivial premise (text mode) or `image` carries a data-URL
/// encoded picture (multimodal mode); `is_well_formed` checks the invariant,
/// but the core never panics on a record that violates it.
///
/// # Examples
///
/// ```
/// use taleweaver_core::{Genre, StoryParams};
///
/// let params = StoryParams::builder()
///     .genre(Genre::Horror)
///     .plot("A diary writes itself")
///     .build()
///     .unwrap();
///
/// assert_eq!(*params.genre(), Genre::Horror);
/// assert!(params.is_well_formed());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StoryParams {
    /// Story genre
    #[builder(default)]
    genre: Genre,
    /// Core narrative premise; required for text-mode requests
    #[builder(default)]
    plot: String,
    /// Narrative voice
    #[builder(default)]
    perspective: Perspective,
    /// Comma-separated character descriptors; may be empty
    #[builder(default)]
    characters: String,
    /// Setting description; may be empty
    #[builder(default)]
    setting: String,
    /// Output shape
    #[builder(default)]
    format: StoryFormat,
    /// Optional target length
    #[builder(default)]
    length: Option<StoryLength>,
    /// Optional mood modifier
    #[builder(default)]
    mood: Option<Mood>,
    /// Optional time-period modifier
    #[builder(default)]
    period: Option<Period>,
    /// Optional weather/season modifier
    #[builder(default)]
    atmosphere: Option<Atmosphere>,
    /// Optional data-URL encoded image; switches the request to multimodal
    #[builder(default)]
    image: Option<String>,
}

impl StoryParams {
    /// Returns a builder for constructing StoryParams.
    pub fn builder() -> StoryParamsBuilder {
        StoryParamsBuilder::default()
    }

    /// Whether this record satisfies the request validity invariant.
    ///
    /// Image mode requires a decodable base64 payload; text mode requires a
    /// plot of more than 10 trimmed characters.
    pub fn is_well_formed(&self) -> bool {
        match &self.image {
            Some(data_url) => StoryImage::from_data_url(data_url).is_valid_base64(),
            None => self.plot.trim().chars().count() > 10,
        }
    }
}
