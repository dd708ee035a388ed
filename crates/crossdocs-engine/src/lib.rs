//! Markdown rendering core for crossdocs.
//!
//! [`render_document`] turns markdown source into a [`Document`]: headings,
//! paragraphs of styled spans, tables, task lists, definition lists, lists,
//! quotes, code blocks and footnotes. UI crates draw that tree.

pub mod io;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    Alignment, DefinitionItem, FormatKind, FormattedSpan, TableData, TaskItem, TaskListMode,
};
pub use render::{
    Block, Document, ListEntry, RenderOptions, heading_font_size, render_document, render_tree,
    to_outline,
};
