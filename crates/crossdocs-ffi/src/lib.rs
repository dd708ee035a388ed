//! UniFFI bindings for crossdocs mobile apps
//!
//! Exposes the rendering pipeline to the Kotlin and Swift apps. The render
//! tree is flattened into records: every block is a [`BlockDto`] with a
//! `kind` string, and only the fields for that kind are filled in.

use crossdocs_engine::{
    Alignment, Block, Document, FormattedSpan, RenderOptions, TaskListMode, heading_font_size,
    io, render_document,
};
use std::path::Path;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("IO error: {reason}")]
    Io { reason: String },
}

impl From<io::IoError> for FfiError {
    fn from(e: io::IoError) -> Self {
        FfiError::Io {
            reason: e.to_string(),
        }
    }
}

// ============ Options ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum TaskListModeDto {
    /// Only blocks opened by a `Task List` line
    Marker,
    /// Any `- [ ]` / `- [x]` lines
    Pattern,
}

impl From<TaskListModeDto> for TaskListMode {
    fn from(mode: TaskListModeDto) -> Self {
        match mode {
            TaskListModeDto::Marker => TaskListMode::Marker,
            TaskListModeDto::Pattern => TaskListMode::Pattern,
        }
    }
}

// ============ DTOs ============

/// A rendered markdown document.
#[derive(uniffi::Record)]
pub struct DocumentDto {
    pub blocks: Vec<BlockDto>,
}

impl DocumentDto {
    fn from_engine(document: Document) -> Self {
        Self {
            blocks: document
                .blocks
                .into_iter()
                .map(BlockDto::from_engine)
                .collect(),
        }
    }
}

/// A single rendered block.
#[derive(uniffi::Record)]
pub struct BlockDto {
    /// Block type (e.g., "heading", "paragraph", "table", "list_item")
    pub kind: String,
    /// Heading level (1-6) if this is a heading, 0 otherwise
    pub heading_level: u8,
    /// Font size in points for headings and text blocks
    pub font_size: f32,
    /// Styled text for headings and paragraphs
    pub spans: Vec<SpanDto>,
    pub table: Option<TableDto>,
    pub tasks: Vec<TaskItemDto>,
    pub definitions: Vec<DefinitionDto>,
    /// Whether a "list" block is numbered
    pub ordered: bool,
    /// Marker of a "list_item" block ("• ", "1. ")
    pub list_marker: Option<String>,
    pub language: Option<String>,
    pub code: Option<String>,
    pub footnote_id: Option<String>,
    /// Nested blocks of lists, list items, quotes and footnotes
    pub children: Vec<BlockDto>,
}

impl BlockDto {
    fn empty(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            heading_level: 0,
            font_size: heading_font_size(0),
            spans: Vec::new(),
            table: None,
            tasks: Vec::new(),
            definitions: Vec::new(),
            ordered: false,
            list_marker: None,
            language: None,
            code: None,
            footnote_id: None,
            children: Vec::new(),
        }
    }

    fn with_children(kind: &str, blocks: Vec<Block>) -> Self {
        Self {
            children: blocks.into_iter().map(Self::from_engine).collect(),
            ..Self::empty(kind)
        }
    }

    fn from_engine(block: Block) -> Self {
        let kind = block.kind_name();
        match block {
            Block::Heading { level, spans } => Self {
                heading_level: level,
                font_size: heading_font_size(level),
                spans: SpanDto::from_spans(spans),
                ..Self::empty(kind)
            },
            Block::Paragraph { spans } => Self {
                spans: SpanDto::from_spans(spans),
                ..Self::empty(kind)
            },
            Block::Table(table) => Self {
                table: Some(TableDto {
                    headers: table.headers,
                    rows: table.rows,
                    alignments: table
                        .alignments
                        .into_iter()
                        .map(|a| alignment_name(a).to_string())
                        .collect(),
                }),
                ..Self::empty(kind)
            },
            Block::TaskList(items) => Self {
                tasks: items
                    .into_iter()
                    .map(|item| TaskItemDto {
                        text: item.text,
                        is_checked: item.is_checked,
                    })
                    .collect(),
                ..Self::empty(kind)
            },
            Block::Definitions(items) => Self {
                definitions: items
                    .into_iter()
                    .map(|item| DefinitionDto {
                        term: item.term,
                        definition: item.definition,
                    })
                    .collect(),
                ..Self::empty(kind)
            },
            Block::List { ordered, items } => Self {
                ordered,
                children: items
                    .into_iter()
                    .map(|entry| Self {
                        list_marker: Some(entry.marker),
                        ..Self::with_children("list_item", entry.blocks)
                    })
                    .collect(),
                ..Self::empty(kind)
            },
            Block::BlockQuote(blocks) => Self::with_children(kind, blocks),
            Block::CodeBlock { language, code } => Self {
                language,
                code: Some(code),
                ..Self::empty(kind)
            },
            Block::Footnote { id, blocks } => Self {
                footnote_id: Some(id),
                ..Self::with_children(kind, blocks)
            },
            Block::Rule => Self::empty(kind),
        }
    }
}

fn alignment_name(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Start => "start",
        Alignment::Center => "center",
        Alignment::End => "end",
    }
}

/// A run of text with one style.
#[derive(uniffi::Record)]
pub struct SpanDto {
    pub text: String,
    /// Style name: "plain", "bold", "italic", "inline_code", "strikethrough",
    /// "subscript", "superscript", "highlight" or "link"
    pub style: String,
}

impl SpanDto {
    fn from_spans(spans: Vec<FormattedSpan>) -> Vec<Self> {
        spans
            .into_iter()
            .map(|span| Self {
                style: span.style.as_str().to_string(),
                text: span.text,
            })
            .collect()
    }
}

#[derive(uniffi::Record)]
pub struct TableDto {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// "start", "center" or "end" per header column
    pub alignments: Vec<String>,
}

#[derive(uniffi::Record)]
pub struct TaskItemDto {
    pub text: String,
    pub is_checked: bool,
}

#[derive(uniffi::Record)]
pub struct DefinitionDto {
    pub term: String,
    pub definition: String,
}

// ============ Standalone Functions ============

/// Render markdown with the default options.
#[uniffi::export]
pub fn render_markdown(content: String) -> DocumentDto {
    DocumentDto::from_engine(render_document(&content, &RenderOptions::default()))
}

/// Render markdown with an explicit task list mode.
#[uniffi::export]
pub fn render_markdown_with(content: String, mode: TaskListModeDto) -> DocumentDto {
    let options = RenderOptions::default().with_task_list_mode(mode.into());
    DocumentDto::from_engine(render_document(&content, &options))
}

/// Read a markdown file and render it with the default options.
#[uniffi::export]
pub fn render_file(path: String) -> Result<DocumentDto, FfiError> {
    let content = io::read_markdown(Path::new(&path))?;
    Ok(render_markdown(content))
}

/// Markdown files below a notes folder, as relative paths.
#[uniffi::export]
pub fn list_notes(notes_root: String) -> Result<Vec<String>, FfiError> {
    let files = io::list_markdown_files(Path::new(&notes_root))?;
    Ok(files.into_iter().map(|path| path.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(blocks: &[BlockDto]) -> Vec<&str> {
        blocks.iter().map(|b| b.kind.as_str()).collect()
    }

    #[test]
    fn test_heading_dto() {
        let doc = render_markdown("# Heading\n\nParagraph text".to_string());

        assert_eq!(kinds(&doc.blocks), vec!["heading", "paragraph"]);
        let heading = &doc.blocks[0];
        assert_eq!(heading.heading_level, 1);
        assert_eq!(heading.font_size, 26.0);
        assert_eq!(heading.spans[0].text, "Heading");
        assert_eq!(heading.spans[0].style, "plain");
    }

    #[test]
    fn test_span_styles() {
        let doc = render_markdown("**b** ==h== [l](https://x.y)".to_string());
        let styles: Vec<&str> = doc.blocks[0]
            .spans
            .iter()
            .map(|s| s.style.as_str())
            .collect();
        assert_eq!(
            styles,
            vec!["bold", "plain", "highlight", "plain", "link"]
        );
    }

    #[test]
    fn test_block_dto_kinds() {
        let content = "# H1\n\n- a\n- b\n\n1. one\n\n---\n\n> Quote\n\n```rust\ncode\n```\n\nTerm\n: meaning\n\n| A |\n|:-:|\n| 1 |";
        let doc = render_markdown(content.to_string());

        assert_eq!(
            kinds(&doc.blocks),
            vec![
                "heading",
                "list",
                "list",
                "rule",
                "block_quote",
                "code_block",
                "definitions",
                "table"
            ]
        );

        let bullets = &doc.blocks[1];
        assert!(!bullets.ordered);
        assert_eq!(kinds(&bullets.children), vec!["list_item", "list_item"]);
        assert_eq!(bullets.children[0].list_marker.as_deref(), Some("• "));
        assert_eq!(kinds(&bullets.children[0].children), vec!["paragraph"]);

        let numbered = &doc.blocks[2];
        assert!(numbered.ordered);
        assert_eq!(numbered.children[0].list_marker.as_deref(), Some("1. "));

        assert_eq!(kinds(&doc.blocks[4].children), vec!["paragraph"]);

        let code = &doc.blocks[5];
        assert_eq!(code.language.as_deref(), Some("rust"));
        assert_eq!(code.code.as_deref(), Some("code"));

        assert_eq!(doc.blocks[6].definitions[0].term, "Term");

        let table = doc.blocks[7].table.as_ref().unwrap();
        assert_eq!(table.headers, vec!["A"]);
        assert_eq!(table.alignments, vec!["center"]);
        assert_eq!(table.rows, vec![vec!["1".to_string()]]);
    }

    #[test]
    fn test_task_list_modes() {
        let content = "Task List\n- [ ] wash dishes\n- [x] pay bills".to_string();

        let marker = render_markdown_with(content.clone(), TaskListModeDto::Marker);
        assert_eq!(kinds(&marker.blocks), vec!["task_list"]);
        assert_eq!(marker.blocks[0].tasks.len(), 2);
        assert!(marker.blocks[0].tasks[1].is_checked);

        let pattern = render_markdown_with(content, TaskListModeDto::Pattern);
        assert_eq!(kinds(&pattern.blocks), vec!["paragraph", "task_list"]);
        assert_eq!(pattern.blocks[1].tasks[0].text, "wash dishes");
    }

    #[test]
    fn test_footnote_dto() {
        let doc = render_markdown("Text[^a]\n\n[^a]: Note".to_string());
        let footnote = doc.blocks.last().unwrap();
        assert_eq!(footnote.kind, "footnote");
        assert_eq!(footnote.footnote_id.as_deref(), Some("a"));
        assert_eq!(kinds(&footnote.children), vec!["paragraph"]);
    }

    #[test]
    fn test_render_file_and_list_notes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("note.md"), "# From disk").unwrap();
        let root = dir.path().to_string_lossy().to_string();

        assert_eq!(list_notes(root).unwrap(), vec!["note.md".to_string()]);

        let path = dir.path().join("note.md").to_string_lossy().to_string();
        let doc = render_file(path).unwrap();
        assert_eq!(doc.blocks[0].spans[0].text, "From disk");
    }

    #[test]
    fn test_render_missing_file_is_an_error() {
        let result = render_file("/nonexistent/file.md".to_string());
        assert!(matches!(result, Err(FfiError::Io { .. })));
    }
}
