use regex::Regex;
use std::sync::OnceLock;

use super::types::FormatKind;

/// A delimiter pattern and the style it gives to its first capture group.
pub struct FormatRule {
    pub regex: Regex,
    pub kind: FormatKind,
}

impl FormatRule {
    fn new(pattern: &str, kind: FormatKind) -> Self {
        Self {
            regex: Regex::new(pattern).expect("Invalid inline format regex"),
            kind,
        }
    }
}

/// The inline rules in tie-break order.
///
/// When two rules match at the same offset the one listed first wins, so
/// `**` resolves to bold before italic and `~~` to strikethrough before
/// subscript. Every capture is non-greedy.
pub fn format_rules() -> &'static [FormatRule] {
    static RULES: OnceLock<Vec<FormatRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            FormatRule::new(r"\*\*(.*?)\*\*", FormatKind::Bold),
            FormatRule::new(r"\*(.*?)\*", FormatKind::Italic),
            FormatRule::new(r"`(.*?)`", FormatKind::InlineCode),
            FormatRule::new(r"~~(.*?)~~", FormatKind::Strikethrough),
            FormatRule::new(r"~(.*?)~", FormatKind::Subscript),
            FormatRule::new(r"\^(.*?)\^", FormatKind::Superscript),
            FormatRule::new(r"==(.*?)==", FormatKind::Highlight),
            FormatRule::new(r"\[(.*?)\]\((.*?)\)", FormatKind::Link),
            FormatRule::new(r"```(.*?)```", FormatKind::InlineCode),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_compile_with_a_capture_group() {
        let rules = format_rules();
        assert_eq!(rules.len(), 9);
        for rule in rules {
            assert!(rule.regex.captures_len() >= 2, "{}", rule.regex.as_str());
        }
    }

    #[test]
    fn bold_precedes_italic() {
        let kinds: Vec<_> = format_rules().iter().map(|r| r.kind).collect();
        let bold = kinds.iter().position(|k| *k == FormatKind::Bold).unwrap();
        let italic = kinds.iter().position(|k| *k == FormatKind::Italic).unwrap();
        assert!(bold < italic);
    }

    #[test]
    fn strikethrough_precedes_subscript() {
        let kinds: Vec<_> = format_rules().iter().map(|r| r.kind).collect();
        let strike = kinds
            .iter()
            .position(|k| *k == FormatKind::Strikethrough)
            .unwrap();
        let sub = kinds
            .iter()
            .position(|k| *k == FormatKind::Subscript)
            .unwrap();
        assert!(strike < sub);
    }
}
