//! Block tree built from pulldown-cmark's offset events.
//!
//! pulldown-cmark is a streaming parser: it emits `Start`/`End` pairs with byte
//! ranges rather than a tree. [`parse_tree`] folds the block-level events into
//! [`AstNode`]s that keep only a kind, a span into the source, and children.
//! Inline events are dropped; the renderer re-reads inline text from the span.
//!
//! # Tight list items
//!
//! For a tight list pulldown-cmark emits the item's inline events directly
//! inside `Item`, without a `Paragraph`:
//!
//! ```markdown
//! - one
//! - two
//! ```
//! Events: `Start(List)`, `Start(Item)`, `Text("one")`, `End(Item)`, ...
//!
//! The builder wraps such loose inline runs in a synthetic `Paragraph` node
//! so that every item with text has a paragraph child, as in loose lists.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use std::ops::Range;

/// The kind of a block node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Paragraph,
    /// ATX or setext heading, level 1 to 6.
    Heading(u8),
    OrderedList,
    UnorderedList,
    ListItem,
    BlockQuote,
    FencedCode,
    IndentedCode,
    FootnoteDefinition(String),
    ThematicBreak,
    /// Anything without dedicated handling (HTML blocks, tables when enabled, ...).
    Other,
}

/// A block node with a byte span into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    pub kind: NodeKind,
    pub span: Range<usize>,
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn new(kind: NodeKind, span: Range<usize>) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    /// The slice of `source` this node covers.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.clone()).unwrap_or("")
    }
}

/// Parser options for the block parser.
///
/// Tables, task lists, strikethrough and definition lists stay disabled: those
/// syntaxes reach the renderer as plain paragraph text.
pub fn parser_options(footnotes: bool) -> Options {
    let mut options = Options::empty();
    if footnotes {
        options.insert(Options::ENABLE_FOOTNOTES);
    }
    options
}

fn is_inline_tag(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn node_kind(tag: &Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading(*level as u8),
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(CodeBlockKind::Fenced(_)) => NodeKind::FencedCode,
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::IndentedCode,
        Tag::List(Some(_)) => NodeKind::OrderedList,
        Tag::List(None) => NodeKind::UnorderedList,
        Tag::Item => NodeKind::ListItem,
        Tag::FootnoteDefinition(label) => NodeKind::FootnoteDefinition(label.to_string()),
        _ => NodeKind::Other,
    }
}

/// Folds offset events into a tree.
struct TreeBuilder {
    root: AstNode,
    /// Open block nodes, innermost last.
    stack: Vec<AstNode>,
    /// For every open `Start` event, whether it opened a block node.
    open_tags: Vec<bool>,
    /// Inline content seen directly inside the current list item.
    loose_inline: Option<Range<usize>>,
}

impl TreeBuilder {
    fn new(len: usize) -> Self {
        Self {
            root: AstNode::new(NodeKind::Document, 0..len),
            stack: Vec::new(),
            open_tags: Vec::new(),
            loose_inline: None,
        }
    }

    fn parent_mut(&mut self) -> &mut AstNode {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    fn in_list_item(&self) -> bool {
        self.stack
            .last()
            .is_some_and(|node| node.kind == NodeKind::ListItem)
    }

    fn process_event(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => {
                let is_block = !is_inline_tag(&tag);
                self.open_tags.push(is_block);
                if is_block {
                    self.open_block(node_kind(&tag), range);
                } else {
                    self.extend_loose_inline(range);
                }
            }
            Event::End(_) => match self.open_tags.pop() {
                Some(true) => self.close_block(),
                Some(false) => self.extend_loose_inline(range),
                None => log::warn!("End event without matching Start at {range:?}"),
            },
            Event::Rule => {
                self.flush_loose_inline();
                self.parent_mut()
                    .children
                    .push(AstNode::new(NodeKind::ThematicBreak, range));
            }
            _ => self.extend_loose_inline(range),
        }
    }

    fn open_block(&mut self, kind: NodeKind, span: Range<usize>) {
        self.flush_loose_inline();
        self.stack.push(AstNode::new(kind, span));
    }

    fn close_block(&mut self) {
        self.flush_loose_inline();
        if let Some(node) = self.stack.pop() {
            self.parent_mut().children.push(node);
        }
    }

    fn extend_loose_inline(&mut self, range: Range<usize>) {
        if !self.in_list_item() {
            return;
        }
        self.loose_inline = Some(match self.loose_inline.take() {
            Some(current) => current.start.min(range.start)..current.end.max(range.end),
            None => range,
        });
    }

    fn flush_loose_inline(&mut self) {
        if let Some(span) = self.loose_inline.take() {
            self.parent_mut()
                .children
                .push(AstNode::new(NodeKind::Paragraph, span));
        }
    }

    fn finish(mut self) -> AstNode {
        while !self.stack.is_empty() {
            self.close_block();
        }
        self.root
    }
}

/// Parses `source` into a block tree rooted at a [`NodeKind::Document`] node.
pub fn parse_tree(source: &str, options: Options) -> AstNode {
    let mut builder = TreeBuilder::new(source.len());
    for (event, range) in Parser::new_ext(source, options).into_offset_iter() {
        builder.process_event(event, range);
    }
    builder.finish()
}
