use crossdocs_engine::parsing::{spans_text, tokenize};
use crossdocs_engine::{
    Block, FormatKind, RenderOptions, TaskListMode, read_markdown, render_document, to_outline,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ));
    read_markdown(&path).unwrap()
}

fn marker_options() -> RenderOptions {
    RenderOptions::default().with_task_list_mode(TaskListMode::Marker)
}

#[test]
fn fixture_weekly_notes() {
    let md = fixture("weekly_notes");
    let document = render_document(&md, &RenderOptions::default());
    assert_snapshot!(to_outline(&document), @r"
    # Weekly notes 🚀
    Plans for the [bold]week[/bold] ahead, with [strikethrough]old[/strikethrough] ideas.
    ## Chores
    [ ] wash dishes
    [x] pay bills
    ## Glossary
    Crate
      : a compilation unit
    ## Budget
    | Item | Cost |
    |:--|--:|
    | Coffee | 3 |
    > Remember to [highlight]rest[/highlight].
    1. first
    2. second
    ```sh
    cargo run
    ```
    ---
    Footnote reference[^1].
    [^1]: Written on Sunday.
    ");
}

#[test]
fn fixture_marker_tasks_in_marker_mode() {
    let md = fixture("marker_tasks");
    let document = render_document(&md, &marker_options());
    assert_snapshot!(to_outline(&document), @r"
    [ ] draft release notes
    [x] tag the release
    Loose line after the list.
    ");
}

#[test]
fn fixture_marker_tasks_in_pattern_mode() {
    let md = fixture("marker_tasks");
    let document = render_document(&md, &RenderOptions::default());
    assert_snapshot!(to_outline(&document), @r"
    Task List
    • [ ] draft release notes
    • [x] tag the release
    • not a task
    Loose line after the list.
    ");
}

#[rstest]
#[case("weekly_notes")]
#[case("marker_tasks")]
fn rendering_twice_gives_equal_documents(#[case] name: &str) {
    let md = fixture(name);
    for options in [RenderOptions::default(), marker_options()] {
        assert_eq!(render_document(&md, &options), render_document(&md, &options));
    }
}

#[rstest]
#[case("no markup at all")]
#[case("punctuation: commas, colons; and [brackets]")]
#[case("unicode 日本語 and emoji 🦀")]
#[case("lone * star and lone ` tick")]
fn text_without_markup_is_preserved(#[case] text: &str) {
    let spans = tokenize(text);
    assert_eq!(spans_text(&spans), text);
    assert!(spans.iter().all(|s| s.style == FormatKind::Plain));

    let document = render_document(text, &RenderOptions::default());
    let [Block::Paragraph { spans }] = document.blocks.as_slice() else {
        panic!("expected one paragraph, got {:?}", document.blocks);
    };
    assert_eq!(spans_text(spans), text);
}

#[rstest]
#[case("**bold** text", "bold text")]
#[case("a ~~b~~ c ~d~ e ^f^", "a b c d e f")]
#[case("[site](https://x.y) and ==mark==", "site and mark")]
#[case("`code` *em*", "code em")]
fn matched_delimiters_are_dropped(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(spans_text(&tokenize(text)), expected);
}

#[test]
fn link_destination_is_not_rendered() {
    let document = render_document("[site](https://x.y)", &RenderOptions::default());
    let outline = to_outline(&document);
    assert_eq!(outline, "[link]site[/link]");
    assert!(!outline.contains("https://x.y"));
}

#[test]
fn footnotes_disabled_keeps_definition_as_text() {
    let options = RenderOptions {
        footnotes: false,
        ..RenderOptions::default()
    };
    let document = render_document("[^1]: Note text", &options);
    assert!(
        !document
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Footnote { .. }))
    );
}

#[test]
fn headings_report_their_level() {
    let document = render_document("# One\n\n### Three", &RenderOptions::default());
    let levels: Vec<u8> = document
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![1, 3]);
}
