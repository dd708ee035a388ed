//! `:shortcode:` emoji substitution.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Known shortcodes and their glyphs.
const EMOJI_TABLE: &[(&str, &str)] = &[
    ("smile", "🙂"),
    ("laughing", "😄"),
    ("heart", "❤"),
    ("thumbsup", "👍"),
    ("thumbsdown", "👎"),
    ("star", "⭐"),
    ("fire", "🔥"),
    ("warning", "⚠"),
    ("check", "✓"),
    ("x", "✗"),
    ("rocket", "🚀"),
    ("eyes", "👀"),
    ("thinking", "🤔"),
    ("100", "💯"),
];

fn shortcode_regex() -> &'static Regex {
    static SHORTCODE_REGEX: OnceLock<Regex> = OnceLock::new();
    SHORTCODE_REGEX
        .get_or_init(|| Regex::new(r":([a-z0-9_+-]+):").expect("Invalid shortcode regex"))
}

/// Looks up the glyph for a shortcode name (without the surrounding colons).
pub fn lookup(code: &str) -> Option<&'static str> {
    EMOJI_TABLE
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, glyph)| *glyph)
}

/// Replaces every known `:code:` in `text` with its glyph.
///
/// Only the matched occurrences are replaced. Unknown codes are left as they
/// are, colons included. Returns the input unchanged (borrowed) when nothing
/// was substituted.
pub fn substitute(text: &str) -> Cow<'_, str> {
    shortcode_regex().replace_all(text, |caps: &regex::Captures<'_>| {
        match lookup(&caps[1]) {
            Some(glyph) => glyph.to_string(),
            None => caps[0].to_string(),
        }
    })
}
