//! # Parsing
//!
//! Leaf parsers used by the renderer, plus the adapter around the external
//! block parser.
//!
//! ## Modules
//!
//! - **`ast`**: block tree over pulldown-cmark offset events
//! - **`emoji`**: `:shortcode:` substitution
//! - **`inline`**: regex rule tokenizer producing `FormattedSpan`s
//! - **`table`**: pipe table parsing with alignment detection
//! - **`task_list`**: `- [ ]` / `- [x]` detection in two modes
//! - **`definition`**: term / `: definition` pairs
//! - **`segments`**: splitting paragraph text into prose and table runs
//!
//! None of these parsers fail: a block that does not match a syntax yields
//! `None` or an empty result and the renderer tries the next interpretation.

pub mod ast;
pub mod definition;
pub mod emoji;
pub mod inline;
pub mod segments;
pub mod table;
pub mod task_list;

pub use ast::{AstNode, NodeKind, parse_tree, parser_options};
pub use definition::{DefinitionItem, parse_definitions};
pub use inline::{FormatKind, FormattedSpan, spans_text, tokenize};
pub use segments::{TextSegment, split_text_and_tables};
pub use table::{Alignment, TableData, parse_table};
pub use task_list::{TaskItem, TaskListMode, parse_task_list};
