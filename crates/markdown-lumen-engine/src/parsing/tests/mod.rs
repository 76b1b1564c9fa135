//! Document-level parser tests.
//!
//! Fixtures (.md) live in `fixtures/`. Every fixture is checked against the
//! invariants, and edited copies of it must re-parse incrementally to exactly
//! the tree a full parse gives.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParsedDoc, Previous, incremental::reparse, node::NodeKind, parse_document, parse_markdown,
    snapshot,
};

fn fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(path).unwrap()
}

fn assert_equivalent(before: &str, after: &str) {
    let prev = parse_document(before);
    let full = parse_document(after);
    snapshot::invariants(after, &full);
    assert_eq!(
        reparse(before, &prev, after),
        full,
        "incremental result differs for edit\n--- before\n{before}\n--- after\n{after}"
    );
}

/// Edited variants: each line removed, duplicated, replaced, and preceded
/// by lines that change block structure.
fn edits(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out = vec![];
    for i in 0..lines.len() {
        let mut removed = lines.clone();
        removed.remove(i);
        let mut duplicated = lines.clone();
        duplicated.insert(i, lines[i]);
        let mut replaced = lines.clone();
        replaced[i] = "changed **text**";
        out.extend([removed, duplicated, replaced].map(|l| l.join("\n")));

        for inserted in ["```", "", "- item", "> quote", "<div>", "| x |"] {
            let mut l = lines.clone();
            l.insert(i, inserted);
            out.push(l.join("\n"));
        }
    }
    out
}

/// Lines that open, close or continue blocks.
const VOCABULARY: [&str; 12] = [
    "",
    "```",
    "- item",
    "  - nested",
    "1. first",
    "> quote",
    "<div>",
    "</div>",
    "| x |",
    "| -- |",
    "# heading",
    "plain *text*",
];

/// Edits that delete line `i` and insert at line `j` in one step, which
/// includes moving a line.
fn paired_edits(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out = vec![];
    for i in 0..lines.len() {
        for j in i.saturating_sub(3)..(i + 4).min(lines.len()) {
            let mut moved = lines.clone();
            let line = moved.remove(i);
            moved.insert(j.min(moved.len()), line);
            out.push(moved.join("\n"));

            let mut swapped = lines.clone();
            swapped.remove(i);
            swapped.insert(j.min(swapped.len()), VOCABULARY[(i + j) % VOCABULARY.len()]);
            out.push(swapped.join("\n"));
        }
    }
    out
}

/// Xorshift, so edit sequences are reproducible from the seed.
struct EditRng(u64);

impl EditRng {
    fn next(&mut self, bound: usize) -> usize {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 % bound.max(1) as u64) as usize
    }
}

/// Copies of `text` with two to five random line operations applied each.
fn random_edits(text: &str, seed: u64, count: usize) -> Vec<String> {
    let mut rng = EditRng(seed);
    let mut out = vec![];
    for _ in 0..count {
        let mut lines: Vec<&str> = text.split('\n').collect();
        for _ in 0..2 + rng.next(4) {
            let at = rng.next(lines.len() + 1);
            match rng.next(4) {
                0 if at < lines.len() => {
                    lines.remove(at);
                }
                1 => lines.insert(at, VOCABULARY[rng.next(VOCABULARY.len())]),
                2 if at < lines.len() => lines[at] = VOCABULARY[rng.next(VOCABULARY.len())],
                _ if at < lines.len() => {
                    let to = rng.next(lines.len());
                    lines.swap(at, to);
                }
                _ => lines.push(VOCABULARY[rng.next(VOCABULARY.len())]),
            }
        }
        out.push(lines.join("\n"));
    }
    out
}

#[rstest]
#[case("mixed")]
#[case("nested_quotes")]
#[case("raw_blocks")]
#[case("lists")]
fn fixture_invariants(#[case] name: &str) {
    let md = fixture(name);
    let root = parse_document(&md);
    snapshot::invariants(&md, &root);
    assert!(!root.children().is_empty());
}

#[rstest]
#[case("mixed")]
#[case("nested_quotes")]
#[case("raw_blocks")]
#[case("lists")]
fn fixture_edits_reparse_like_full_parse(#[case] name: &str) {
    let md = fixture(name);
    for edited in edits(&md) {
        assert_equivalent(&md, &edited);
        assert_equivalent(&edited, &md);
    }
}

#[test]
fn mixed_fixture_top_level_blocks() {
    let root = parse_document(&fixture("mixed"));
    let kinds: Vec<_> = root.children().iter().map(|n| n.kind_name()).collect();
    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "thematicBreak",
            "heading",
            "list",
            "list",
            "blockquote",
            "code",
            "table",
            "html",
            "html",
            "paragraph",
        ]
    );
}

#[test]
fn sanitized_html_in_fixture() {
    let root = parse_document(&fixture("mixed"));
    let html: Vec<_> = root
        .children()
        .iter()
        .filter_map(|n| match &n.kind {
            NodeKind::Html { value } => Some(value.as_str()),
            _ => None,
        })
        .collect();
    assert!(html.iter().all(|v| !v.contains("onerror")));
    assert!(html[0].starts_with("<div data-line=\"34\""));
}

#[test]
fn quote_snapshot() {
    let md = "> a\nb\n\n| x | y |\n|---|---|\n| 1 | 2 |";
    let root = parse_document(md);
    snapshot::invariants(md, &root);
    insta::assert_snapshot!(snapshot::normalize(&root), @r#"
    root 1:1-6:10 @0..36
      blockquote 1:1-2:2 @0..5
        paragraph 1:3-2:2 @2..5
          text "a" 1:3-1:4 @2..3
          text "\n" 1:4-2:1 @3..4
          text "b" 2:1-2:2 @4..5
      table 4:1-6:10 @7..36
        tableRow 4:1-4:10 @7..16
          tableCell 4:3-4:4 @9..10
            text "x" 4:3-4:4 @9..10
          tableCell 4:7-4:8 @13..14
            text "y" 4:7-4:8 @13..14
        tableRow 6:1-6:10 @27..36
          tableCell 6:3-6:4 @29..30
            text "1" 6:3-6:4 @29..30
          tableCell 6:7-6:8 @33..34
            text "2" 6:7-6:8 @33..34
    "#);
}

#[test]
fn list_and_fence_snapshot() {
    let md = "- a\n  - b\n```rust\nx\n```";
    let root = parse_document(md);
    snapshot::invariants(md, &root);
    insta::assert_snapshot!(snapshot::normalize(&root), @r#"
    root 1:1-5:4 @0..23
      list 1:1-2:6 @0..9
        listItem 1:1-2:6 @0..9
          paragraph 1:3-1:4 @2..3
            text "a" 1:3-1:4 @2..3
          list 2:3-2:6 @6..9
            listItem 2:3-2:6 @6..9
              paragraph 2:5-2:6 @8..9
                text "b" 2:5-2:6 @8..9
      code(rust) "x" 3:1-5:4 @10..23
    "#);
}

#[test]
fn empty_document() {
    let root = parse_document("");
    assert!(root.children().is_empty());
    assert_eq!(root.kind_name(), "root");
}

#[test]
fn blank_lines_only() {
    let root = parse_document("\n\n\n");
    assert!(root.children().is_empty());
    assert_eq!(root.span.end.line, 4);
}

#[test]
fn parse_markdown_without_previous_is_full_parse() {
    let md = "# a\n\ntext";
    assert_eq!(parse_markdown(md, None), parse_document(md));
}

#[test]
fn parse_markdown_with_same_text_returns_previous_tree() {
    let md = "# a\n\ntext";
    let root = parse_document(md);
    let again = parse_markdown(
        md,
        Some(Previous {
            text: md,
            root: &root,
        }),
    );
    assert_eq!(again, root);
}

#[test]
fn parsed_doc_tracks_text_and_tree() {
    let doc = ParsedDoc::parse("# a\n\ntext");
    let next = doc.reparse("# a\n\nmore text\n- item");
    assert_eq!(next.root, parse_document(&next.text));
    assert_eq!(
        parse_markdown(&next.text, Some(doc.previous())),
        next.root
    );
}

/// Code spans keep markup literal.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let root = parse_document("`**not bold**`");
    let para = &root.children()[0];
    assert_eq!(para.children().len(), 1);
    let code = &para.children()[0];
    assert_eq!(code.kind_name(), "inlineCode");
    assert_eq!(code.plain_text(), "**not bold**");
}

#[test]
fn unclosed_constructs_become_text() {
    let root = parse_document("**unclosed and `also unclosed");
    let para = &root.children()[0];
    assert_eq!(para.children().len(), 1);
    assert_eq!(para.children()[0].kind_name(), "text");
}

#[rstest]
#[case("mixed")]
#[case("nested_quotes")]
#[case("raw_blocks")]
#[case("lists")]
fn fixture_line_moves_reparse_like_full_parse(#[case] name: &str) {
    let md = fixture(name);
    for edited in paired_edits(&md) {
        assert_equivalent(&md, &edited);
        assert_equivalent(&edited, &md);
    }
}

#[rstest]
#[case("mixed", 0x9e37_79b9)]
#[case("nested_quotes", 0x2545_f491)]
#[case("raw_blocks", 0x6a09_e667)]
#[case("lists", 0xbb67_ae85)]
fn fixture_random_edits_reparse_like_full_parse(#[case] name: &str, #[case] seed: u64) {
    let md = fixture(name);
    let edited = random_edits(&md, seed, 200);
    for pair in edited.windows(2) {
        assert_equivalent(&pair[0], &pair[1]);
    }
    for text in &edited {
        assert_equivalent(&md, text);
    }
}

#[test]
fn small_documents_survive_random_edits() {
    let mut rng = EditRng(0x51_7cc1);
    for _ in 0..500 {
        let before: Vec<&str> = (0..rng.next(5))
            .map(|_| VOCABULARY[rng.next(VOCABULARY.len())])
            .collect();
        let after: Vec<&str> = (0..rng.next(5))
            .map(|_| VOCABULARY[rng.next(VOCABULARY.len())])
            .collect();
        assert_equivalent(&before.join("\n"), &after.join("\n"));
    }
}
