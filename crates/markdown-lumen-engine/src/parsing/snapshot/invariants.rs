use crate::parsing::{node::Node, position::Position};

/// Validates parser output invariants against the source text.
///
/// Asserts that:
/// - Every position's line and column agree with its byte offset
/// - Spans are non-inverted and within the text
/// - Children lie inside their parent, siblings do not overlap
/// - Text leaves hold exactly the source slice they span
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, root: &Node) {
    check_node(text, root);
}

fn check_node(text: &str, node: &Node) {
    let span = node.span;
    assert!(
        span.start.offset <= span.end.offset && span.end.offset <= text.len(),
        "{} span out of bounds: {:?} (text len: {})",
        node.kind_name(),
        span,
        text.len()
    );
    check_position(text, span.start, node);
    check_position(text, span.end, node);

    if let crate::parsing::node::NodeKind::Text { value } = &node.kind {
        assert_eq!(
            &text[span.start.offset..span.end.offset],
            value,
            "text value differs from its source slice at {span:?}"
        );
    }

    let mut prev_end = span.start.offset;
    for child in node.children() {
        assert!(
            child.span.start.offset >= prev_end && child.span.end.offset <= span.end.offset,
            "{} {:?} not inside {} {:?} after offset {}",
            child.kind_name(),
            child.span,
            node.kind_name(),
            span,
            prev_end
        );
        prev_end = child.span.end.offset;
        check_node(text, child);
    }
}

fn check_position(text: &str, pos: Position, node: &Node) {
    let before = &text[..pos.offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    assert_eq!(
        (pos.line, pos.column),
        (line, column),
        "{} position {:?} disagrees with its offset",
        node.kind_name(),
        pos
    );
}
