//! Splitting paragraph text into prose and table runs.

/// A run of paragraph text, classified as prose or table syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    Regular(String),
    Table(String),
}

/// Accumulates lines and flushes them as segments.
#[derive(Default)]
struct SegmentSplitter {
    segments: Vec<TextSegment>,
    text_lines: Vec<String>,
    table_lines: Vec<String>,
    in_table: bool,
}

impl SegmentSplitter {
    fn flush_text(&mut self) {
        if self.text_lines.is_empty() {
            return;
        }
        let text = self.text_lines.join("\n").trim().to_string();
        self.text_lines.clear();
        self.segments.push(TextSegment::Regular(text));
    }

    fn flush_table(&mut self) {
        self.in_table = false;
        if self.table_lines.is_empty() {
            return;
        }
        let table = self.table_lines.join("\n");
        self.table_lines.clear();
        self.segments.push(TextSegment::Table(table));
    }

    fn push_line(&mut self, line: &str) {
        let line = line.trim();

        if line.starts_with('|') && line.ends_with('|') {
            if !self.in_table {
                self.flush_text();
                self.in_table = true;
            }
            self.table_lines.push(line.to_string());
        } else if self.in_table && line.contains('|') {
            // A ragged row is kept but closes the table.
            self.table_lines.push(line.to_string());
            self.flush_table();
        } else {
            if self.in_table {
                self.flush_table();
            }
            if !line.is_empty() {
                self.text_lines.push(line.to_string());
            }
        }
    }

    fn finish(mut self) -> Vec<TextSegment> {
        self.flush_text();
        self.flush_table();
        self.segments
    }
}

/// Splits `text` into ordered prose and table segments.
///
/// A line that starts and ends with `|` (after trimming) opens or continues
/// a table run. Blank lines outside tables are dropped.
pub fn split_text_and_tables(text: &str) -> Vec<TextSegment> {
    let mut splitter = SegmentSplitter::default();
    for line in text.split('\n') {
        splitter.push_line(line);
    }
    splitter.finish()
}
