//! Cleanup of raw generated text.

use regex::Regex;
use std::sync::OnceLock;

/// Double-asterisk emphasis pairs, non-greedy so each pair closes at the
/// first matching delimiter.
fn emphasis_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("hardcoded pattern compiles"))
}

/// Runs of three or more newlines.
fn blank_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\n{3,}").expect("hardcoded pattern compiles"))
}

/// Normalize raw generated text for display and caching.
///
/// Joins unintended mid-sentence line wraps, strips double-asterisk
/// emphasis markers (keeping the emphasized text), collapses runs of blank
/// lines down to one, and trims the result. Pure, total, and idempotent:
/// normalizing already-normalized text is a no-op.
///
/// The wrap join runs before the emphasis strip so that markers spanning a
/// wrapped line are reunited and removed in the same pass; the blank-line
/// collapse runs after the strip because removing an empty emphasis pair
/// can lengthen a newline run.
///
/// # Examples
///
/// ```
/// use taleweaver_narrative::normalize_story;
///
/// let raw = "**Mara** walked in.\nShe paused.";
/// assert_eq!(normalize_story(raw), "Mara walked in. She paused.");
/// ```
pub fn normalize_story(raw: &str) -> String {
    let joined = join_wrapped_lines(raw);
    let stripped = emphasis_pattern().replace_all(&joined, "$1");
    let collapsed = blank_run_pattern().replace_all(&stripped, "\n\n");
    collapsed.trim().to_string()
}

/// Replace every newline whose neighbors are both non-whitespace with a
/// single space.
///
/// A single character scan instead of a sequential regex replace: the regex
/// consumes the character after the break, so alternating wrapped lines
/// would survive one pass and break idempotence.
fn join_wrapped_lines(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut joined = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' {
            let prev_solid = i > 0 && !chars[i - 1].is_whitespace();
            let next_solid = chars.get(i + 1).is_some_and(|next| !next.is_whitespace());
            if prev_solid && next_solid {
                joined.push(' ');
                continue;
            }
        }
        joined.push(c);
    }

    joined
}
