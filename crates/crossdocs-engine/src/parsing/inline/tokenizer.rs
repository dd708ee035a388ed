use super::{
    rules::format_rules,
    types::{FormatKind, FormattedSpan},
};

/// The earliest rule match in the remaining text.
struct Candidate<'a> {
    kind: FormatKind,
    start: usize,
    end: usize,
    inner: &'a str,
}

/// Finds the leftmost match of any rule in `rest`.
///
/// Ties at the same offset go to the rule listed first.
fn leftmost_match(rest: &str) -> Option<Candidate<'_>> {
    format_rules()
        .iter()
        .filter_map(|rule| {
            let caps = rule.regex.captures(rest)?;
            let whole = caps.get(0)?;
            Some(Candidate {
                kind: rule.kind,
                start: whole.start(),
                end: whole.end(),
                inner: caps.get(1).map_or("", |m| m.as_str()),
            })
        })
        .min_by_key(|c| c.start)
}

/// Splits `text` into styled spans.
///
/// Text outside any delimiter pair comes out as [`FormatKind::Plain`]. The
/// delimiters of a matched rule are consumed; everything else is kept, so
/// plain text without markup round-trips unchanged. Inline styles do not
/// nest: the inner text of a match is emitted as-is.
pub fn tokenize(text: &str) -> Vec<FormattedSpan> {
    let mut out = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(found) = leftmost_match(rest) else {
            out.push(FormattedSpan::plain(rest));
            break;
        };

        if found.start > 0 {
            out.push(FormattedSpan::plain(&rest[..found.start]));
        }
        out.push(FormattedSpan::new(found.inner, found.kind));
        rest = &rest[found.end..];
    }

    out
}
