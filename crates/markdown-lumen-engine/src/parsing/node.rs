use serde::Serialize;

use super::position::Span;

/// One element of the parsed tree, tagged by kind and carrying its source range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub span: Span,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// The kind of a node together with its kind-specific payload.
///
/// Block containers hold blocks, inline containers hold inline nodes.
/// `Text`, `ThematicBreak`, `Code`, `Html` and `Image` are leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Root {
        children: Vec<Node>,
    },
    Heading {
        /// 1 to 6.
        depth: u8,
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    Blockquote {
        children: Vec<Node>,
    },
    List {
        ordered: bool,
        /// Only `ListItem`s; nested lists live inside an item.
        children: Vec<Node>,
    },
    ListItem {
        children: Vec<Node>,
    },
    Table {
        children: Vec<Node>,
    },
    TableRow {
        children: Vec<Node>,
    },
    TableCell {
        children: Vec<Node>,
    },
    ThematicBreak,
    Code {
        lang: String,
        value: String,
    },
    /// Raw markup, already sanitized.
    Html {
        value: String,
    },
    /// Raw text, escaped only at render time.
    Text {
        value: String,
    },
    Bold {
        children: Vec<Node>,
    },
    Italic {
        children: Vec<Node>,
    },
    Underline {
        children: Vec<Node>,
    },
    Delete {
        children: Vec<Node>,
    },
    Link {
        url: String,
        title: Option<String>,
        children: Vec<Node>,
    },
    Image {
        url: String,
        alt: String,
        title: Option<String>,
    },
    /// Holds a single raw `Text` child; markup inside code is literal.
    InlineCode {
        children: Vec<Node>,
    },
}

impl Node {
    pub fn new(span: Span, kind: NodeKind) -> Self {
        Self { span, kind }
    }

    pub fn text(span: Span, value: impl Into<String>) -> Self {
        Self::new(
            span,
            NodeKind::Text {
                value: value.into(),
            },
        )
    }

    pub fn paragraph(span: Span, children: Vec<Node>) -> Self {
        Self::new(span, NodeKind::Paragraph { children })
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Root { children }
            | NodeKind::Heading { children, .. }
            | NodeKind::Paragraph { children }
            | NodeKind::Blockquote { children }
            | NodeKind::List { children, .. }
            | NodeKind::ListItem { children }
            | NodeKind::Table { children }
            | NodeKind::TableRow { children }
            | NodeKind::TableCell { children }
            | NodeKind::Bold { children }
            | NodeKind::Italic { children }
            | NodeKind::Underline { children }
            | NodeKind::Delete { children }
            | NodeKind::Link { children, .. }
            | NodeKind::InlineCode { children } => children,
            NodeKind::ThematicBreak
            | NodeKind::Code { .. }
            | NodeKind::Html { .. }
            | NodeKind::Text { .. }
            | NodeKind::Image { .. } => &[],
        }
    }

    /// Mutable child list, `None` for leaves.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.kind {
            NodeKind::Root { children }
            | NodeKind::Heading { children, .. }
            | NodeKind::Paragraph { children }
            | NodeKind::Blockquote { children }
            | NodeKind::List { children, .. }
            | NodeKind::ListItem { children }
            | NodeKind::Table { children }
            | NodeKind::TableRow { children }
            | NodeKind::TableCell { children }
            | NodeKind::Bold { children }
            | NodeKind::Italic { children }
            | NodeKind::Underline { children }
            | NodeKind::Delete { children }
            | NodeKind::Link { children, .. }
            | NodeKind::InlineCode { children } => Some(children),
            NodeKind::ThematicBreak
            | NodeKind::Code { .. }
            | NodeKind::Html { .. }
            | NodeKind::Text { .. }
            | NodeKind::Image { .. } => None,
        }
    }

    /// The discriminant name used in serialized output and tree dumps.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Root { .. } => "root",
            NodeKind::Heading { .. } => "heading",
            NodeKind::Paragraph { .. } => "paragraph",
            NodeKind::Blockquote { .. } => "blockquote",
            NodeKind::List { .. } => "list",
            NodeKind::ListItem { .. } => "listItem",
            NodeKind::Table { .. } => "table",
            NodeKind::TableRow { .. } => "tableRow",
            NodeKind::TableCell { .. } => "tableCell",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Code { .. } => "code",
            NodeKind::Html { .. } => "html",
            NodeKind::Text { .. } => "text",
            NodeKind::Bold { .. } => "bold",
            NodeKind::Italic { .. } => "italic",
            NodeKind::Underline { .. } => "underline",
            NodeKind::Delete { .. } => "delete",
            NodeKind::Link { .. } => "link",
            NodeKind::Image { .. } => "image",
            NodeKind::InlineCode { .. } => "inlineCode",
        }
    }

    /// Whether this kind occupies whole lines.
    pub fn is_block(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Root { .. }
                | NodeKind::Heading { .. }
                | NodeKind::Paragraph { .. }
                | NodeKind::Blockquote { .. }
                | NodeKind::List { .. }
                | NodeKind::ListItem { .. }
                | NodeKind::Table { .. }
                | NodeKind::TableRow { .. }
                | NodeKind::TableCell { .. }
                | NodeKind::ThematicBreak
                | NodeKind::Code { .. }
                | NodeKind::Html { .. }
        )
    }

    /// Concatenated text content with all markup removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text { value } | NodeKind::Code { value, .. } => out.push_str(value),
            NodeKind::Image { alt, .. } => out.push_str(alt),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Moves this node and its whole subtree by `lines` and `bytes`.
    ///
    /// HTML nodes carry their start line inside the markup as `data-line`,
    /// which is renumbered along with the span.
    pub fn shift(&mut self, lines: isize, bytes: isize) {
        if lines == 0 && bytes == 0 {
            return;
        }
        if let NodeKind::Html { value } = &mut self.kind {
            let old_line = self.span.start.line;
            let new_line = old_line.saturating_add_signed(lines);
            *value = value.replacen(
                &format!("data-line=\"{old_line}\""),
                &format!("data-line=\"{new_line}\""),
                1,
            );
        }
        self.span = self.span.moved(lines, bytes);
        if let Some(children) = self.children_mut() {
            for child in children {
                child.shift(lines, bytes);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::position::Position;

    fn sp(line: usize, start: usize, end: usize) -> Span {
        Span::new(
            Position::new(line, start + 1, start),
            Position::new(line, end + 1, end),
        )
    }

    #[test]
    fn leaves_have_no_children() {
        let mut node = Node::text(sp(1, 0, 3), "abc");
        assert!(node.children().is_empty());
        assert!(node.children_mut().is_none());
        assert_eq!(node.kind_name(), "text");
        assert!(!node.is_block());
    }

    #[test]
    fn plain_text_flattens_markup() {
        let node = Node::paragraph(
            sp(1, 0, 9),
            vec![
                Node::text(sp(1, 0, 2), "a "),
                Node::new(
                    sp(1, 2, 9),
                    NodeKind::Bold {
                        children: vec![Node::text(sp(1, 4, 7), "bcd")],
                    },
                ),
            ],
        );
        assert_eq!(node.plain_text(), "a bcd");
        assert!(node.is_block());
    }

    #[test]
    fn shift_moves_whole_subtree() {
        let mut node = Node::paragraph(sp(1, 0, 3), vec![Node::text(sp(1, 0, 3), "abc")]);
        node.shift(2, 10);
        assert_eq!(node.span.start, Position::new(3, 1, 10));
        assert_eq!(node.children()[0].span.end, Position::new(3, 4, 13));
    }

    #[test]
    fn shift_renumbers_html_data_line() {
        let mut node = Node::new(
            sp(4, 0, 4),
            NodeKind::Html {
                value: "<br data-line=\"4\" />".into(),
            },
        );
        node.shift(-1, -5);
        assert_eq!(
            node.kind,
            NodeKind::Html {
                value: "<br data-line=\"3\" />".into()
            }
        );
    }
}
