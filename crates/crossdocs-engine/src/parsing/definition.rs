//! Definition lists: a term line followed by a `: definition` line.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionItem {
    pub term: String,
    pub definition: String,
}

/// Collects every term/definition pair in `text`.
///
/// A term only counts when the very next line starts with `:`. Terms with no
/// definition line, and definition lines with no pending term, are dropped.
pub fn parse_definitions(text: &str) -> Vec<DefinitionItem> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut definitions = Vec::new();
    let mut current_term: Option<&str> = None;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        let next_is_definition = lines
            .get(i + 1)
            .is_some_and(|next| next.trim_start().starts_with(':'));

        if !line.is_empty() && !line.starts_with(':') && next_is_definition {
            current_term = Some(line);
        } else if let Some(definition) = line.strip_prefix(':')
            && let Some(term) = current_term.take()
        {
            definitions.push(DefinitionItem {
                term: term.to_string(),
                definition: definition.trim().to_string(),
            });
        }
    }

    definitions
}
