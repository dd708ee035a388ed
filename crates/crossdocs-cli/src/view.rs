//! Styled terminal lines for a rendered document.

use crossdocs_engine::{Alignment, Block, Document, FormatKind, FormattedSpan, TableData};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE_WIDTH: usize = 40;

/// Lines for the content panel, with a blank line after each top-level block.
pub fn document_lines(document: &Document) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in &document.blocks {
        lines.extend(block_lines(block));
        lines.push(Line::default());
    }
    lines
}

fn block_lines(block: &Block) -> Vec<Line<'static>> {
    match block {
        Block::Heading { level, spans } => {
            let mut heading_style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
            if *level == 1 {
                heading_style = heading_style.add_modifier(Modifier::UNDERLINED);
            }
            let mut lines = styled_lines(spans);
            for line in &mut lines {
                for span in &mut line.spans {
                    span.style = heading_style.patch(span.style);
                }
            }
            lines
        }
        Block::Paragraph { spans } => styled_lines(spans),
        Block::Table(table) => table_lines(table),
        Block::TaskList(items) => items
            .iter()
            .map(|item| {
                if item.is_checked {
                    Line::from(vec![
                        Span::styled("☑ ", Style::default().fg(Color::Green)),
                        Span::styled(
                            item.text.clone(),
                            Style::default().add_modifier(Modifier::CROSSED_OUT),
                        ),
                    ])
                } else {
                    Line::from(vec![Span::raw("☐ "), Span::raw(item.text.clone())])
                }
            })
            .collect(),
        Block::Definitions(items) => items
            .iter()
            .flat_map(|item| {
                [
                    Line::from(Span::styled(
                        item.term.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("    {}", item.definition)),
                ]
            })
            .collect(),
        Block::List { items, .. } => {
            let mut lines = Vec::new();
            for entry in items {
                let inner: Vec<Line<'static>> = entry.blocks.iter().flat_map(block_lines).collect();
                let continuation = " ".repeat(entry.marker.chars().count());
                lines.extend(prefixed(inner, &entry.marker, &continuation, Style::default()));
            }
            lines
        }
        Block::BlockQuote(blocks) => {
            let inner: Vec<Line<'static>> = blocks.iter().flat_map(block_lines).collect();
            prefixed(inner, "│ ", "│ ", Style::default().fg(Color::DarkGray))
        }
        Block::CodeBlock { language, code } => {
            let code_style = Style::default().fg(Color::Green);
            let mut lines = Vec::new();
            if let Some(language) = language {
                lines.push(Line::from(Span::styled(
                    language.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }
            lines.extend(
                code.split('\n')
                    .map(|line| Line::from(Span::styled(line.to_string(), code_style))),
            );
            lines
        }
        Block::Footnote { id, blocks } => {
            let inner: Vec<Line<'static>> = blocks.iter().flat_map(block_lines).collect();
            prefixed(
                inner,
                &format!("[^{id}] "),
                "    ",
                Style::default().add_modifier(Modifier::DIM),
            )
        }
        Block::Rule => vec![Line::from(Span::styled(
            "─".repeat(RULE_WIDTH),
            Style::default().fg(Color::DarkGray),
        ))],
    }
}

fn span_style(kind: FormatKind) -> Style {
    let style = Style::default();
    match kind {
        FormatKind::Plain => style,
        FormatKind::Bold => style.add_modifier(Modifier::BOLD),
        FormatKind::Italic => style.add_modifier(Modifier::ITALIC),
        FormatKind::InlineCode => style.fg(Color::Yellow),
        FormatKind::Strikethrough => style.add_modifier(Modifier::CROSSED_OUT),
        FormatKind::Subscript | FormatKind::Superscript => style.add_modifier(Modifier::DIM),
        FormatKind::Highlight => style.bg(Color::Yellow).fg(Color::Black),
        FormatKind::Link => style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
    }
}

/// Styled spans broken into terminal lines at `\n`.
fn styled_lines(spans: &[FormattedSpan]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for span in spans {
        let style = span_style(span.style);
        for (i, part) in span.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if !part.is_empty()
                && let Some(line) = lines.last_mut()
            {
                line.spans.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines
}

fn table_lines(table: &TableData) -> Vec<Line<'static>> {
    let columns = table
        .rows
        .iter()
        .map(Vec::len)
        .chain([table.headers.len()])
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            std::iter::once(&table.headers)
                .chain(&table.rows)
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = cells.get(col).map_or("", String::as_str);
                let alignment = table.alignments.get(col).copied().unwrap_or(Alignment::Start);
                pad(cell, *width, alignment)
            })
            .collect();
        format!("│ {} │", padded.join(" │ "))
    };

    let mut lines = vec![Line::from(Span::styled(
        format_row(&table.headers),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    let separator: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(Line::from(format!("├─{}─┤", separator.join("─┼─"))));
    lines.extend(table.rows.iter().map(|row| Line::from(format_row(row))));
    lines
}

fn pad(cell: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    match alignment {
        Alignment::Start => format!("{cell}{}", " ".repeat(fill)),
        Alignment::End => format!("{}{cell}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

fn prefixed(
    inner: Vec<Line<'static>>,
    first: &str,
    rest: &str,
    prefix_style: Style,
) -> Vec<Line<'static>> {
    if inner.is_empty() {
        return vec![Line::from(Span::styled(first.to_string(), prefix_style))];
    }
    inner
        .into_iter()
        .enumerate()
        .map(|(i, mut line)| {
            let prefix = if i == 0 { first } else { rest };
            line.spans
                .insert(0, Span::styled(prefix.to_string(), prefix_style));
            line
        })
        .collect()
}
