use serde::Serialize;

/// The style applied to a run of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormatKind {
    Plain,
    Bold,
    Italic,
    InlineCode,
    Strikethrough,
    Subscript,
    Superscript,
    Highlight,
    /// Link text. The destination URL is not kept.
    Link,
}

impl FormatKind {
    /// Lower-case identifier used by the FFI layer and the outline printer.
    pub fn as_str(self) -> &'static str {
        match self {
            FormatKind::Plain => "plain",
            FormatKind::Bold => "bold",
            FormatKind::Italic => "italic",
            FormatKind::InlineCode => "inline_code",
            FormatKind::Strikethrough => "strikethrough",
            FormatKind::Subscript => "subscript",
            FormatKind::Superscript => "superscript",
            FormatKind::Highlight => "highlight",
            FormatKind::Link => "link",
        }
    }
}

/// A contiguous run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSpan {
    pub text: String,
    pub style: FormatKind,
}

impl FormattedSpan {
    pub fn new(text: impl Into<String>, style: FormatKind) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, FormatKind::Plain)
    }
}

/// Concatenates the text of `spans`, dropping the styles.
pub fn spans_text(spans: &[FormattedSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
