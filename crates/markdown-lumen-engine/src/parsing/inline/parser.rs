use crate::parsing::{
    node::{Node, NodeKind},
    position::Position,
};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, InlineKind, InlineMatch, Link, leftmost},
};

/// Parses a single-line text span into inline nodes.
///
/// # Arguments
/// - `s`: The text to scan (a heading, paragraph line, list item or cell)
/// - `at`: Absolute position of `s[0]` in the document
///
/// # Arbitration
/// The construct with the smallest start wins; on a tie the earlier kind in
/// [`InlineKind::ORDER`] wins. Text between constructs is emitted as `Text`.
/// Emphasis and link text recurse, code spans and images do not.
pub fn parse_inline(s: &str, at: Position) -> Vec<Node> {
    let mut cur = Cursor::new(s, at);
    let mut out = vec![];
    let mut text_start = 0usize;

    while !cur.eof() {
        let Some(m) = leftmost(s, cur.i) else {
            break;
        };
        cur.jump_to(m.full.end);

        let Some(node) = build(&cur, &m) else {
            // Literal construct: stays part of the pending text run.
            continue;
        };
        flush_text(&cur, &mut out, text_start, m.full.start);
        out.push(node);
        text_start = m.full.end;
    }

    flush_text(&cur, &mut out, text_start, s.len());
    out
}

fn flush_text(cur: &Cursor<'_>, out: &mut Vec<Node>, start: usize, end: usize) {
    if end > start {
        out.push(Node::text(cur.span(start, end), &cur.s[start..end]));
    }
}

/// Builds the node for a match, or `None` when the match degrades to text.
fn build(cur: &Cursor<'_>, m: &InlineMatch) -> Option<Node> {
    let span = cur.span(m.full.start, m.full.end);
    let inner = &cur.s[m.inner.clone()];
    let inner_at = cur.pos_at(m.inner.start);

    let kind = match m.kind {
        InlineKind::Bold => NodeKind::Bold {
            children: parse_inline(inner, inner_at),
        },
        InlineKind::Italic => NodeKind::Italic {
            children: parse_inline(inner, inner_at),
        },
        InlineKind::Underline => NodeKind::Underline {
            children: parse_inline(inner, inner_at),
        },
        InlineKind::Strike => NodeKind::Delete {
            children: parse_inline(inner, inner_at),
        },
        InlineKind::Code => {
            if CodeSpan::is_literal(inner) {
                return None;
            }
            NodeKind::InlineCode {
                children: vec![Node::text(cur.span(m.inner.start, m.inner.end), inner)],
            }
        }
        InlineKind::Image => {
            let (url, title) = Link::split_target(&cur.s[m.target.clone()?]);
            NodeKind::Image {
                url,
                alt: inner.to_string(),
                title,
            }
        }
        InlineKind::Link => {
            let (url, title) = Link::split_target(&cur.s[m.target.clone()?]);
            NodeKind::Link {
                url,
                title,
                children: parse_inline(inner, inner_at),
            }
        }
    };
    Some(Node::new(span, kind))
}
