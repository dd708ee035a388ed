use std::borrow::Cow;

use crate::parsing::{
    AstNode, FormattedSpan, NodeKind, TaskItem, TaskListMode, TextSegment, emoji,
    parse_definitions, parse_table, parse_task_list, parse_tree, parser_options,
    split_text_and_tables, task_list, tokenize,
};

use super::options::RenderOptions;
use super::types::{Block, Document, ListEntry};

const BULLET: &str = "• ";

/// Parses `source` and renders it.
pub fn render_document(source: &str, options: &RenderOptions) -> Document {
    let tree = parse_tree(source, parser_options(options.footnotes));
    render_tree(source, &tree, options)
}

/// Renders a tree previously parsed from `source`.
pub fn render_tree(source: &str, root: &AstNode, options: &RenderOptions) -> Document {
    let renderer = Renderer { source, options };
    let blocks = match root.kind {
        NodeKind::Document => renderer.render_nodes(&root.children, 0),
        _ => renderer.render_nodes([root], 0),
    };
    Document { blocks }
}

struct Renderer<'a> {
    source: &'a str,
    options: &'a RenderOptions,
}

impl Renderer<'_> {
    /// Renders sibling nodes. `depth` is the number of enclosing blockquotes.
    fn render_nodes<'n, I>(&self, nodes: I, depth: usize) -> Vec<Block>
    where
        I: IntoIterator<Item = &'n AstNode>,
    {
        let mut blocks = Vec::new();
        let mut nodes = nodes.into_iter().peekable();

        while let Some(node) = nodes.next() {
            if let Some(next) = nodes.peek()
                && let Some(items) = self.marker_task_list(node, next, depth)
            {
                log::debug!("Marker task list with {} items", items.len());
                blocks.push(Block::TaskList(items));
                nodes.next();
                continue;
            }
            self.render_node(node, depth, &mut blocks);
        }

        blocks
    }

    fn render_node(&self, node: &AstNode, depth: usize, out: &mut Vec<Block>) {
        log::trace!("Rendering {:?} at {:?}", node.kind, node.span);

        match &node.kind {
            NodeKind::Heading(level) => {
                let text = self.node_text(node, depth);
                out.push(Block::Heading {
                    level: *level,
                    spans: self.inline(heading_text(&text)),
                });
            }
            NodeKind::Paragraph => {
                let text = self.node_text(node, depth);
                self.render_paragraph(&text, out);
            }
            NodeKind::UnorderedList => out.push(self.render_unordered(node, depth)),
            NodeKind::OrderedList => out.push(self.render_ordered(node, depth)),
            NodeKind::BlockQuote => {
                out.push(Block::BlockQuote(
                    self.render_nodes(&node.children, depth + 1),
                ));
            }
            NodeKind::FencedCode => {
                let text = self.node_text(node, depth);
                out.push(fenced_code(&text, self.fence_indent(node, depth)));
            }
            NodeKind::IndentedCode => {
                let start = self.line_start(node.span.start);
                let raw = self.source.get(start..node.span.end).unwrap_or("");
                out.push(Block::CodeBlock {
                    language: None,
                    code: indented_code(&strip_quote_prefixes(raw, depth)),
                });
            }
            NodeKind::FootnoteDefinition(id) => {
                out.push(Block::Footnote {
                    id: id.clone(),
                    blocks: self.render_nodes(&node.children, depth),
                });
            }
            NodeKind::ThematicBreak => out.push(Block::Rule),
            NodeKind::Document | NodeKind::ListItem | NodeKind::Other => {
                if node.kind == NodeKind::Other {
                    log::debug!("No dedicated rendering for block at {:?}", node.span);
                }
                out.extend(self.render_nodes(&node.children, depth));
            }
        }
    }

    /// Task list, then definitions, then prose and tables.
    fn render_paragraph(&self, text: &str, out: &mut Vec<Block>) {
        if let Some(items) = parse_task_list(text, self.options.task_list_mode) {
            log::debug!("Paragraph is a task list with {} items", items.len());
            out.push(Block::TaskList(items));
            return;
        }

        let definitions = parse_definitions(text);
        if !definitions.is_empty() {
            let definitions = definitions
                .into_iter()
                .map(|mut item| {
                    item.term = self.emoji(&item.term).into_owned();
                    item.definition = self.emoji(&item.definition).into_owned();
                    item
                })
                .collect();
            out.push(Block::Definitions(definitions));
            return;
        }

        for segment in split_text_and_tables(text) {
            match segment {
                TextSegment::Regular(content) => {
                    if !content.is_empty() {
                        out.push(Block::Paragraph {
                            spans: self.inline(&content),
                        });
                    }
                }
                TextSegment::Table(content) => match parse_table(&content) {
                    Some(table) => out.push(Block::Table(table)),
                    None => {
                        log::debug!("Malformed table rendered as plain text");
                        out.push(Block::Paragraph {
                            spans: vec![FormattedSpan::plain(content)],
                        });
                    }
                },
            }
        }
    }

    fn render_unordered(&self, node: &AstNode, depth: usize) -> Block {
        if self.options.task_list_mode == TaskListMode::Pattern
            && let Some(items) = self.list_as_tasks(node, depth)
        {
            log::debug!("List is a task list with {} items", items.len());
            return Block::TaskList(items);
        }

        let items = node
            .children
            .iter()
            .filter(|item| !item.children.is_empty())
            .map(|item| ListEntry {
                marker: BULLET.to_string(),
                blocks: self.render_item(item, depth),
            })
            .collect();

        Block::List {
            ordered: false,
            items,
        }
    }

    fn render_ordered(&self, node: &AstNode, depth: usize) -> Block {
        let mut number = 1;
        let mut items = Vec::new();

        for item in &node.children {
            let filled: Vec<&AstNode> = item
                .children
                .iter()
                .filter(|child| !self.node_text(child, depth).trim().is_empty())
                .collect();
            if filled.is_empty() {
                continue;
            }
            items.push(ListEntry {
                marker: format!("{number}. "),
                blocks: self.render_nodes(filled, depth),
            });
            number += 1;
        }

        Block::List {
            ordered: true,
            items,
        }
    }

    /// Blocks of one bullet item. In pattern mode a leading task line becomes
    /// a one-item task list ahead of the rest of the item.
    fn render_item(&self, item: &AstNode, depth: usize) -> Vec<Block> {
        if self.options.task_list_mode == TaskListMode::Pattern
            && let Some((first, rest)) = item.children.split_first()
            && first.kind == NodeKind::Paragraph
            && let Some(task) = task_list::parse_task_line(&format!(
                "- {}",
                single_line(&self.node_text(first, depth))
            ))
        {
            let mut blocks = vec![Block::TaskList(vec![task])];
            blocks.extend(self.render_nodes(rest, depth));
            return blocks;
        }
        self.render_nodes(&item.children, depth)
    }

    /// Every item of the list is a single task line.
    fn list_as_tasks(&self, list: &AstNode, depth: usize) -> Option<Vec<TaskItem>> {
        if list.children.is_empty() {
            return None;
        }
        list.children
            .iter()
            .map(|item| {
                if !item.children.iter().all(|c| c.kind == NodeKind::Paragraph) {
                    return None;
                }
                task_list::parse_task_line(&single_line(&self.node_text(item, depth)))
            })
            .collect()
    }

    /// A `Task List` paragraph directly followed by the list it introduces.
    fn marker_task_list(
        &self,
        paragraph: &AstNode,
        next: &AstNode,
        depth: usize,
    ) -> Option<Vec<TaskItem>> {
        if self.options.task_list_mode != TaskListMode::Marker
            || paragraph.kind != NodeKind::Paragraph
            || !matches!(next.kind, NodeKind::UnorderedList | NodeKind::OrderedList)
        {
            return None;
        }
        if !self
            .node_text(paragraph, depth)
            .trim_start()
            .starts_with(task_list::TASK_LIST_MARKER)
        {
            return None;
        }

        let combined = self.source.get(paragraph.span.start..next.span.end)?;
        let items = task_list::parse_marker_task_list(&strip_quote_prefixes(combined, depth))?;
        (!items.is_empty()).then_some(items)
    }

    fn inline(&self, text: &str) -> Vec<FormattedSpan> {
        tokenize(&self.emoji(text))
    }

    fn emoji<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.options.emoji {
            emoji::substitute(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    fn node_text(&self, node: &AstNode, depth: usize) -> Cow<'_, str> {
        strip_quote_prefixes(node.text(self.source), depth)
    }

    fn line_start(&self, offset: usize) -> usize {
        self.source
            .get(..offset)
            .and_then(|before| before.rfind('\n'))
            .map_or(0, |i| i + 1)
    }

    /// Column of the opening fence once enclosing quote markers are removed.
    fn fence_indent(&self, node: &AstNode, depth: usize) -> usize {
        let start = self.line_start(node.span.start);
        self.source
            .get(start..node.span.start)
            .map_or(0, |prefix| strip_quote_prefixes(prefix, depth).len())
    }
}

/// Removes up to `depth` leading `>` markers from every line.
fn strip_quote_prefixes(text: &str, depth: usize) -> Cow<'_, str> {
    if depth == 0 {
        return Cow::Borrowed(text);
    }
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            let mut rest = line;
            for _ in 0..depth {
                match rest.trim_start().strip_prefix('>') {
                    Some(after) => rest = after.strip_prefix(' ').unwrap_or(after),
                    None => break,
                }
            }
            rest
        })
        .collect();
    Cow::Owned(lines.join("\n"))
}

/// Non-blank lines of `text` trimmed and joined with spaces.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Heading text without ATX markers or a setext underline.
fn heading_text(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some((head, last)) = text.rsplit_once('\n')
        && is_setext_underline(last)
    {
        text = head.trim();
    }

    let text = text.trim_start_matches('#').trim();
    let without_closing = text.trim_end_matches('#');
    if without_closing.len() < text.len()
        && (without_closing.is_empty() || without_closing.ends_with(char::is_whitespace))
    {
        without_closing.trim_end()
    } else {
        text
    }
}

fn is_setext_underline(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && (line.chars().all(|c| c == '=') || line.chars().all(|c| c == '-'))
}

/// Fenced code: language from the opening line, body between the fences.
///
/// `indent` is the column of the opening fence; that much leading space is
/// removed from body lines. An unclosed fence runs to the end of the block,
/// so its last line is body text.
fn fenced_code(text: &str, indent: usize) -> Block {
    let lines: Vec<&str> = text
        .trim_end_matches(['\n', '\r'])
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let opening = lines.first().map_or("", |line| line.trim_start());

    let fence_char = opening.chars().next().filter(|c| *c == '`' || *c == '~');
    let language = fence_char
        .filter(|_| opening.starts_with("```") || opening.starts_with("~~~"))
        .map(|c| opening.trim_start_matches(c).trim())
        .filter(|lang| !lang.is_empty())
        .map(str::to_string);

    let body = lines.get(1..).unwrap_or_default();
    let body = match (body.split_last(), fence_char) {
        (Some((last, rest)), Some(c)) if is_closing_fence(last, c) => rest,
        _ => body,
    };

    let code = body
        .iter()
        .map(|line| strip_indent(line, indent))
        .collect::<Vec<_>>()
        .join("\n");

    Block::CodeBlock { language, code }
}

fn is_closing_fence(line: &str, fence_char: char) -> bool {
    let line = line.trim();
    line.len() >= 3 && line.chars().all(|c| c == fence_char)
}

fn strip_indent(line: &str, max: usize) -> &str {
    let spaces = line.bytes().take(max).take_while(|b| *b == b' ').count();
    &line[spaces..]
}

/// Indented code with the common indentation removed.
fn indented_code(text: &str) -> String {
    let text = text.trim_end_matches(['\n', '\r']);
    let indent = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    text.split('\n')
        .map(|line| strip_indent(line, indent))
        .collect::<Vec<_>>()
        .join("\n")
}
