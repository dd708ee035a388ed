use serde::{Deserialize, Serialize};

use crate::parsing::TaskListMode;

/// Switches that change how markdown is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub task_list_mode: TaskListMode,
    /// Parse `[^id]: text` footnote definitions into their own blocks.
    pub footnotes: bool,
    /// Replace `:shortcode:` emoji in text.
    pub emoji: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            task_list_mode: TaskListMode::Pattern,
            footnotes: true,
            emoji: true,
        }
    }
}

impl RenderOptions {
    pub fn with_task_list_mode(mut self, mode: TaskListMode) -> Self {
        self.task_list_mode = mode;
        self
    }
}
