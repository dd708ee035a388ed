use serde::Serialize;

use crate::parsing::{DefinitionItem, FormattedSpan, TableData, TaskItem};

/// Point sizes for heading levels 1 to 6.
pub const HEADING_FONT_SIZES: [f32; 6] = [26.0, 24.0, 22.0, 20.0, 18.0, 16.0];

/// Point size of body text.
pub const BODY_FONT_SIZE: f32 = 14.0;

/// Font size for a heading level; larger for lower levels.
pub fn heading_font_size(level: u8) -> f32 {
    match level {
        1..=6 => HEADING_FONT_SIZES[usize::from(level) - 1],
        _ => BODY_FONT_SIZE,
    }
}

/// One rendered item of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// `"• "` for bullets, `"3. "` for numbered items.
    pub marker: String,
    pub blocks: Vec<Block>,
}

/// A rendered block, ready for a UI layer to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading {
        level: u8,
        spans: Vec<FormattedSpan>,
    },
    Paragraph {
        spans: Vec<FormattedSpan>,
    },
    Table(TableData),
    TaskList(Vec<TaskItem>),
    Definitions(Vec<DefinitionItem>),
    List {
        ordered: bool,
        items: Vec<ListEntry>,
    },
    BlockQuote(Vec<Block>),
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    Footnote {
        id: String,
        blocks: Vec<Block>,
    },
    Rule,
}

impl Block {
    /// Short lower-case name of the block kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::Table(_) => "table",
            Block::TaskList(_) => "task_list",
            Block::Definitions(_) => "definitions",
            Block::List { .. } => "list",
            Block::BlockQuote(_) => "block_quote",
            Block::CodeBlock { .. } => "code_block",
            Block::Footnote { .. } => "footnote",
            Block::Rule => "rule",
        }
    }
}

/// The render tree for one markdown source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
