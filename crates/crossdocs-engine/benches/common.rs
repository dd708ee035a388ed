// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title :rocket:\n\n## Section\n\nParagraph with **bold**, *italic*, `code` and [a link](https://example.com).\n\n- Bullet point\n  - Nested item\n- Another item\n\n- [ ] open task\n- [x] done task\n\nTerm\n: Definition text\n\n| Name | Count |\n|:---|---:|\n| apples | 3 |\n| pears | 5 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(words: usize) -> String {
    let styles = ["**b**", "*i*", "~~s~~", "~sub~", "^sup^", "==hl==", "`c`", "plain"];
    (0..words)
        .map(|i| styles[i % styles.len()])
        .collect::<Vec<_>>()
        .join(" ")
}
