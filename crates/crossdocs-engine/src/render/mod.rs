//! # Rendering
//!
//! Turns markdown source into a [`Document`] of [`Block`]s for a UI layer.
//!
//! The block tree comes from [`crate::parsing::ast`]; every paragraph is then
//! offered to the leaf parsers in a fixed order:
//!
//! 1. task list ([`crate::parsing::task_list`])
//! 2. definition list ([`crate::parsing::definition`])
//! 3. prose and table segments, with inline styles on the prose
//!
//! ## Modules
//!
//! - **`walker`**: `render_document` / `render_tree`
//! - **`types`**: the render tree
//! - **`options`**: `RenderOptions`
//! - **`outline`**: plain-text formatting of a render tree
//!
//! Rendering never fails. Syntax that does not parse falls back to plain text.

pub mod options;
pub mod outline;
pub mod types;
pub mod walker;

pub use options::RenderOptions;
pub use outline::to_outline;
pub use types::{Block, Document, ListEntry, heading_font_size};
pub use walker::{render_document, render_tree};
