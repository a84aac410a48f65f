//! Inline image payloads for multimodal requests.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Fallback MIME type when a data URL carries no usable header.
const DEFAULT_MIME: &str = "image/png";

/// An image ready for transmission: MIME type plus raw base64 payload.
///
/// Browsers hand images over as data URLs (`data:image/jpeg;base64,...`);
/// the generation endpoint wants the bare payload paired with an explicit
/// MIME type, so the header is stripped here.
///
/// # Examples
///
/// ```
/// use taleweaver_core::StoryImage;
///
/// let image = StoryImage::from_data_url("data:image/jpeg;base64,aGVsbG8=");
/// assert_eq!(image.mime_type(), "image/jpeg");
/// assert_eq!(image.data(), "aGVsbG8=");
/// assert!(image.is_valid_base64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryImage {
    /// MIME type, e.g. "image/png" or "image/jpeg"
    mime_type: String,
    /// Base64-encoded payload with the data-URL header stripped
    data: String,
}

impl StoryImage {
    /// Creates an image from a MIME type and a bare base64 payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Parses a data URL, stripping the `data:<mime>;base64,` header.
    ///
    /// Parsing is lenient and total: input without a recognizable header is
    /// treated as a bare base64 payload with a default MIME type, so prompt
    /// building stays infallible on malformed records.
    pub fn from_data_url(data_url: &str) -> Self {
        if let Some(rest) = data_url.strip_prefix("data:") {
            if let Some((mime, payload)) = rest.split_once(";base64,") {
                let mime_type = if mime.is_empty() { DEFAULT_MIME } else { mime };
                return Self::new(mime_type, payload);
            }
        }
        Self::new(DEFAULT_MIME, data_url)
    }

    /// Whether the payload decodes as standard base64.
    pub fn is_valid_base64(&self) -> bool {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_url_header() {
        let image = StoryImage::from_data_url("data:image/webp;base64,Zm9v");
        assert_eq!(image.mime_type(), "image/webp");
        assert_eq!(image.data(), "Zm9v");
    }

    #[test]
    fn bare_payload_gets_default_mime() {
        let image = StoryImage::from_data_url("Zm9v");
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.data(), "Zm9v");
    }

    #[test]
    fn empty_mime_falls_back() {
        let image = StoryImage::from_data_url("data:;base64,Zm9v");
        assert_eq!(image.mime_type(), "image/png");
    }

    #[test]
    fn invalid_base64_detected() {
        let image = StoryImage::new("image/png", "not base64!!!");
        assert!(!image.is_valid_base64());
    }
}
