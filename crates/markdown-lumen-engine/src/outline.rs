use serde::Serialize;

use crate::parsing::node::{Node, NodeKind};

/// One heading in the document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// The heading's `data-line`, also its anchor id.
    pub key: usize,
    pub href: String,
    pub title: String,
    pub depth: u8,
    pub children: Vec<OutlineEntry>,
}

/// Builds the heading outline of a document.
///
/// An entry nests under the nearest preceding entry of smaller depth.
/// Headings inside quotes and list items count too.
pub fn build_outline(root: &Node) -> Vec<OutlineEntry> {
    let mut headings = vec![];
    collect_headings(root, &mut headings);

    let mut roots = vec![];
    let mut stack: Vec<OutlineEntry> = vec![];
    for entry in headings {
        while stack.last().is_some_and(|top| top.depth >= entry.depth) {
            close_top(&mut stack, &mut roots);
        }
        stack.push(entry);
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }
    roots
}

fn collect_headings(node: &Node, out: &mut Vec<OutlineEntry>) {
    if let NodeKind::Heading { depth, .. } = node.kind {
        let key = node.span.start.line;
        out.push(OutlineEntry {
            key,
            href: format!("#{key}"),
            title: node.plain_text(),
            depth,
            children: vec![],
        });
        return;
    }
    for child in node.children().iter().filter(|c| c.is_block()) {
        collect_headings(child, out);
    }
}

fn close_top(stack: &mut Vec<OutlineEntry>, roots: &mut Vec<OutlineEntry>) {
    let Some(done) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some(parent) => parent.children.push(done),
        None => roots.push(done),
    }
}

/// Plain-text outline, two spaces of indent per nesting level.
pub fn outline_to_text(entries: &[OutlineEntry]) -> String {
    fn walk(out: &mut String, entries: &[OutlineEntry], level: usize) {
        for e in entries {
            out.push_str(&format!("{:indent$}{} {}\n", "", e.key, e.title, indent = level * 2));
            walk(out, &e.children, level + 1);
        }
    }
    let mut out = String::new();
    walk(&mut out, entries, 0);
    out
}
