//! Task list (`- [ ]` / `- [x]`) detection.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The literal that opens a marker-style task list.
pub const TASK_LIST_MARKER: &str = "Task List";

/// A single checkbox item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskItem {
    pub text: String,
    pub is_checked: bool,
}

/// How a block is recognised as a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskListMode {
    /// The block must start with the `Task List` marker line.
    Marker,
    /// Any `- [ ] text` / `- [x] text` line makes the block a task list.
    #[default]
    Pattern,
}

fn task_line_regex() -> &'static Regex {
    static TASK_LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    TASK_LINE_REGEX.get_or_init(|| {
        Regex::new(r"^\s*[-*+]\s+\[([ xX])\]\s+(.*)$").expect("Invalid task line regex")
    })
}

/// Parses one `- [ ] text` line.
pub fn parse_task_line(line: &str) -> Option<TaskItem> {
    let caps = task_line_regex().captures(line)?;
    Some(TaskItem {
        text: caps[2].trim().to_string(),
        is_checked: !caps[1].trim().is_empty(),
    })
}

/// Marker mode: the text must start with [`TASK_LIST_MARKER`].
///
/// Lines after the marker that start with `- [` become items. Returns `None`
/// when the marker is missing; the list may be empty when it is present.
pub fn parse_marker_task_list(text: &str) -> Option<Vec<TaskItem>> {
    let body = text.trim_start().strip_prefix(TASK_LIST_MARKER)?;

    let items = body
        .trim()
        .split('\n')
        .filter(|line| line.trim().starts_with("- ["))
        .map(|line| {
            let is_checked = line.to_ascii_lowercase().contains("- [x]");
            let text = line
                .split_once(']')
                .map_or("", |(_, after)| after)
                .trim()
                .to_string();
            TaskItem { text, is_checked }
        })
        .collect();

    Some(items)
}

/// Pattern mode: every task line anywhere in the text is an item.
///
/// Returns `None` when no line is a task line.
pub fn parse_pattern_task_list(text: &str) -> Option<Vec<TaskItem>> {
    let items: Vec<TaskItem> = text.lines().filter_map(parse_task_line).collect();
    if items.is_empty() { None } else { Some(items) }
}

/// Detects a task list using the given mode.
pub fn parse_task_list(text: &str, mode: TaskListMode) -> Option<Vec<TaskItem>> {
    match mode {
        TaskListMode::Marker => parse_marker_task_list(text),
        TaskListMode::Pattern => parse_pattern_task_list(text),
    }
}
