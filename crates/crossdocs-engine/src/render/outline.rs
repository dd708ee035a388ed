//! Plain-text outline of a render tree.
//!
//! The outline reads like markdown but is not meant to round-trip. Styled
//! spans are written as `[style]text[/style]` so the styling stays visible in
//! plain text.

use crate::parsing::{Alignment, FormatKind, FormattedSpan, TableData};

use super::types::{Block, Document};

/// Formats `document` one block after another, nested blocks indented.
pub fn to_outline(document: &Document) -> String {
    let mut lines = Vec::new();
    write_blocks(&document.blocks, &mut lines);
    lines.join("\n")
}

/// Writes spans with their styles visible.
pub fn spans_to_string(spans: &[FormattedSpan]) -> String {
    spans
        .iter()
        .map(|span| match span.style {
            FormatKind::Plain => span.text.clone(),
            style => format!("[{0}]{1}[/{0}]", style.as_str(), span.text),
        })
        .collect()
}

fn write_blocks(blocks: &[Block], lines: &mut Vec<String>) {
    for block in blocks {
        write_block(block, lines);
    }
}

fn write_block(block: &Block, lines: &mut Vec<String>) {
    match block {
        Block::Heading { level, spans } => {
            let hashes = "#".repeat(usize::from(*level));
            lines.push(format!("{hashes} {}", spans_to_string(spans)));
        }
        Block::Paragraph { spans } => {
            lines.extend(spans_to_string(spans).split('\n').map(str::to_string));
        }
        Block::Table(table) => write_table(table, lines),
        Block::TaskList(items) => {
            for item in items {
                let check = if item.is_checked { 'x' } else { ' ' };
                lines.push(format!("[{check}] {}", item.text));
            }
        }
        Block::Definitions(items) => {
            for item in items {
                lines.push(item.term.clone());
                lines.push(format!("  : {}", item.definition));
            }
        }
        Block::List { items, .. } => {
            for entry in items {
                let mut inner = Vec::new();
                write_blocks(&entry.blocks, &mut inner);
                let continuation = " ".repeat(entry.marker.chars().count());
                prefix_lines(inner, &entry.marker, &continuation, lines);
            }
        }
        Block::BlockQuote(blocks) => {
            let mut inner = Vec::new();
            write_blocks(blocks, &mut inner);
            for line in inner {
                if line.is_empty() {
                    lines.push(">".to_string());
                } else {
                    lines.push(format!("> {line}"));
                }
            }
        }
        Block::CodeBlock { language, code } => {
            lines.push(format!("```{}", language.as_deref().unwrap_or("")));
            lines.extend(code.split('\n').map(str::to_string));
            lines.push("```".to_string());
        }
        Block::Footnote { id, blocks } => {
            let mut inner = Vec::new();
            write_blocks(blocks, &mut inner);
            prefix_lines(inner, &format!("[^{id}]: "), "  ", lines);
        }
        Block::Rule => lines.push("---".to_string()),
    }
}

fn write_table(table: &TableData, lines: &mut Vec<String>) {
    let row = |cells: &[String]| format!("| {} |", cells.join(" | "));

    lines.push(row(&table.headers));
    let separators: Vec<&str> = table
        .alignments
        .iter()
        .map(|alignment| match alignment {
            Alignment::Start => ":--",
            Alignment::Center => ":-:",
            Alignment::End => "--:",
        })
        .collect();
    lines.push(format!("|{}|", separators.join("|")));
    lines.extend(table.rows.iter().map(|cells| row(cells)));
}

fn prefix_lines(inner: Vec<String>, first: &str, rest: &str, lines: &mut Vec<String>) {
    if inner.is_empty() {
        lines.push(first.trim_end().to_string());
        return;
    }
    for (i, line) in inner.into_iter().enumerate() {
        let prefix = if i == 0 { first } else { rest };
        lines.push(format!("{prefix}{line}"));
    }
}
