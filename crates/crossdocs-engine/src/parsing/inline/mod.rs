//! # Inline Formatting
//!
//! Regex-driven inline tokenizer for the extended emphasis syntax.
//!
//! ## Architecture
//!
//! Inline formatting runs over plain text runs that the block walker hands
//! over (paragraph segments, headings, list item text). Emoji shortcodes are
//! substituted before tokenizing.
//!
//! The tokenizer keeps an ordered list of `(regex, style)` rules. On every
//! pass each rule is tried against the remaining text and the match with the
//! smallest start offset wins; rule order only breaks ties at the same offset.
//!
//! ## Modules
//!
//! - **`types`**: `FormatKind` and `FormattedSpan`
//! - **`rules`**: the ordered `FormatRule` table
//! - **`tokenizer`**: `tokenize()` main entry point

pub mod rules;
pub mod tokenizer;
pub mod types;

pub use tokenizer::tokenize;
pub use types::{FormatKind, FormattedSpan, spans_text};
