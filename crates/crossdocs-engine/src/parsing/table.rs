//! Pipe-delimited table parsing.

use serde::Serialize;

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
    Start,
    Center,
    End,
}

impl Alignment {
    /// Reads the alignment from one separator cell such as `:---:`.
    pub fn from_separator_cell(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.starts_with(':') && cell.ends_with(':') {
            Alignment::Center
        } else if cell.ends_with(':') {
            Alignment::End
        } else {
            Alignment::Start
        }
    }
}

/// A parsed table.
///
/// `alignments` has one entry per header column. Data rows keep whatever
/// number of cells they were written with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub alignments: Vec<Alignment>,
}

fn is_table_row(line: &str) -> bool {
    let line = line.trim();
    line.starts_with('|') && line.ends_with('|')
}

/// Splits one `| a | b |` row into trimmed cells.
pub fn parse_row(row: &str) -> Vec<String> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Parses a table from a block of text.
///
/// The first line that both starts and ends with `|` is the header, the line
/// after it is the separator, and the consecutive `|`-prefixed lines after
/// that are data rows. Returns `None` for fewer than three lines, when no
/// header is found, or when the separator and header disagree on the number
/// of columns.
pub fn parse_table(text: &str) -> Option<TableData> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 3 {
        return None;
    }

    let header_index = lines.iter().position(|line| is_table_row(line))?;
    let headers = parse_row(lines[header_index]);

    let separator = lines.get(header_index + 1)?;
    let alignments: Vec<Alignment> = parse_row(separator)
        .iter()
        .map(|cell| Alignment::from_separator_cell(cell))
        .collect();
    if alignments.len() != headers.len() {
        return None;
    }

    let rows = lines[header_index + 2..]
        .iter()
        .take_while(|line| line.trim().starts_with('|'))
        .map(|line| parse_row(line))
        .collect();

    Some(TableData {
        headers,
        rows,
        alignments,
    })
}
