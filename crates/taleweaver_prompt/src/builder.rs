//! Story prompt builder.

use taleweaver_core::{PromptPayload, StoryFormat, StoryImage, StoryParams};

/// Substituted when the character list is empty.
const FALLBACK_CHARACTERS: &str = "An original protagonist";

/// Substituted when the setting is blank.
const FALLBACK_SETTING: &str = "A vivid fictional world";

/// Builds natural-language instructions from a story parameter record.
///
/// Selects one of four templates from the {text, image} x {narrative,
/// dialogue} cross product. Pure and total: a malformed record still yields
/// a payload, it just leans on the fallback phrases.
///
/// # Examples
///
/// ```
/// use taleweaver_core::{Genre, StoryParams};
/// use taleweaver_prompt::StoryPrompt;
///
/// let params = StoryParams::builder()
///     .genre(Genre::Horror)
///     .plot("A diary writes itself")
///     .build()
///     .unwrap();
///
/// let payload = StoryPrompt::build(&params);
/// assert!(payload.text().contains("horror"));
/// assert!(payload.text().contains("A diary writes itself"));
/// ```
pub struct StoryPrompt;

impl StoryPrompt {
    /// Build the prompt payload for a request.
    ///
    /// A present image switches to multimodal mode: the instruction derives
    /// everything from the picture and the payload carries the stripped
    /// base64 data with its MIME type.
    pub fn build(params: &StoryParams) -> PromptPayload {
        match params.image() {
            Some(data_url) => PromptPayload::TextWithImage {
                text: Self::image_instruction(params),
                image: StoryImage::from_data_url(data_url),
            },
            None => PromptPayload::Text(Self::text_instruction(params)),
        }
    }

    fn text_instruction(params: &StoryParams) -> String {
        let characters = Self::clean_characters(params.characters());
        let setting = Self::clean_setting(params.setting());
        let length = Self::length_phrase(params);
        let modifiers = Self::modifier_lines(params);

        match params.format() {
            StoryFormat::Dialogue => format!(
                "Write a {length} {genre} story in dialogue-only format with these elements:\n\
                 \n\
                 Core Plot: {plot}\n\
                 Characters: {characters}\n\
                 Setting: {setting}\n\
                 Perspective: {perspective}\n\
                 \n\
                 Requirements:\n\
                 - Use only dialogue, formatted as \"Character: Dialogue text\" (e.g., \"Sarah: Hello\")\n\
                 - Each line must be spoken by a character (no narration)\n\
                 - Include at least 5-7 dialogue exchanges\n\
                 - Maintain {perspective} perspective through the dialogue\n\
                 - Convey the plot and setting entirely through character speech\n\
                 - End with a clear resolution{modifiers}",
                length = length,
                genre = params.genre(),
                plot = params.plot(),
                characters = characters,
                setting = setting,
                perspective = params.perspective(),
                modifiers = modifiers,
            ),
            StoryFormat::Narrative => format!(
                "Write a {length} {genre} story with these elements:\n\
                 \n\
                 Core Plot: {plot}\n\
                 Characters: {characters}\n\
                 Setting: {setting}\n\
                 Perspective: {perspective}\n\
                 \n\
                 Requirements:\n\
                 - Three-act structure (setup, confrontation, resolution)\n\
                 - Minimum 3 natural dialogues\n\
                 - Strict {perspective} perspective\n\
                 - Paragraph breaks every 3-5 sentences\n\
                 - Don't include any markdown formatting in your response{modifiers}",
                length = length,
                genre = params.genre(),
                plot = params.plot(),
                characters = characters,
                setting = setting,
                perspective = params.perspective(),
                modifiers = modifiers,
            ),
        }
    }

    fn image_instruction(params: &StoryParams) -> String {
        let length = Self::length_phrase(params);
        let modifiers = Self::modifier_lines(params);

        match params.format() {
            StoryFormat::Dialogue => format!(
                "Look closely at the attached image and write a {length} {genre} story \
                 in dialogue-only format based on what you see.\n\
                 \n\
                 Requirements:\n\
                 - Invent a name for every character visible in the image\n\
                 - Derive the setting and plot purely from the visual content\n\
                 - Use only dialogue, formatted as \"Character: Dialogue text\" (e.g., \"Sarah: Hello\")\n\
                 - Each line must be spoken by a character (no narration)\n\
                 - Include at least 5-7 dialogue exchanges\n\
                 - Maintain {perspective} perspective through the dialogue\n\
                 - End with a clear resolution{modifiers}",
                length = length,
                genre = params.genre(),
                perspective = params.perspective(),
                modifiers = modifiers,
            ),
            StoryFormat::Narrative => format!(
                "Look closely at the attached image and write a {length} {genre} story \
                 based on what you see.\n\
                 \n\
                 Requirements:\n\
                 - Invent a name for every character visible in the image\n\
                 - Derive the setting and plot purely from the visual content\n\
                 - Three-act structure (setup, confrontation, resolution)\n\
                 - Minimum 3 natural dialogues\n\
                 - Strict {perspective} perspective\n\
                 - Paragraph breaks every 3-5 sentences\n\
                 - Don't include any markdown formatting in your response{modifiers}",
                length = length,
                genre = params.genre(),
                perspective = params.perspective(),
                modifiers = modifiers,
            ),
        }
    }

    /// Trim entries, drop empties, re-join; fall back when nothing remains.
    fn clean_characters(characters: &str) -> String {
        let cleaned = characters
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        if cleaned.is_empty() {
            FALLBACK_CHARACTERS.to_string()
        } else {
            cleaned
        }
    }

    fn clean_setting(setting: &str) -> String {
        let trimmed = setting.trim();
        if trimmed.is_empty() {
            FALLBACK_SETTING.to_string()
        } else {
            trimmed.to_string()
        }
    }

    fn length_phrase(params: &StoryParams) -> String {
        match params.length() {
            Some(length) => format!("roughly {}-word", length.words()),
            None => "300-word".to_string(),
        }
    }

    /// Requirement lines for the optional tone modifiers.
    fn modifier_lines(params: &StoryParams) -> String {
        let mut lines = String::new();

        if let Some(mood) = params.mood() {
            lines.push_str(&format!("\n- Keep the overall mood {}", mood.descriptor()));
        }
        if let Some(period) = params.period() {
            lines.push_str(&format!("\n- Set the story in {}", period.descriptor()));
        }
        if let Some(atmosphere) = params.atmosphere() {
            lines.push_str(&format!(
                "\n- Weather and season throughout: {}",
                atmosphere.descriptor()
            ));
        }

        lines
    }
}
