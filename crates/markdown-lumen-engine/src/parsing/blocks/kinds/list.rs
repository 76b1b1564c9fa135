use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::{builder::Tokenizer, classify::LineClass},
    inline::parse_inline,
    node::{Node, NodeKind},
    position::{Position, Span},
};

/// Bullet (`-`) and ordered (`1.`) list items.
///
/// Nesting follows indentation in steps of [`List::INDENT_WIDTH`] columns.
pub struct List;

/// The marker part of a list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// Byte index in the trimmed line where item content begins.
    pub content: usize,
}

impl List {
    pub const BULLET: &'static str = "-";
    pub const INDENT_WIDTH: usize = 2;

    pub fn marker(trimmed: &str) -> Option<ListMarker> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN
            .get_or_init(|| Regex::new(r"^(-|\d+\.)\s+(.*)$").expect("Invalid list item regex"));
        let caps = re.captures(trimmed)?;
        Some(ListMarker {
            ordered: caps.get(1)?.as_str() != Self::BULLET,
            content: caps.get(2)?.start(),
        })
    }

    pub fn matches(line: &LineClass<'_>) -> bool {
        Self::marker(line.trimmed).is_some()
    }

    /// Nesting level of an indented line.
    pub fn level(indent: usize) -> usize {
        indent / Self::INDENT_WIDTH
    }

    pub fn consume(tok: &mut Tokenizer, line: &LineClass<'_>) -> bool {
        let Some(marker) = Self::marker(line.trimmed) else {
            if tok.ctx.list.is_some() {
                tok.close_open();
            }
            return false;
        };

        let item = Self::item(line, marker);
        let level = Self::level(line.indent);
        let rejected = match tok.ctx.list.as_mut() {
            Some(open) => open.push(item, level, marker.ordered),
            None => Some(item),
        };
        if let Some(item) = rejected {
            tok.close_open();
            tok.ctx.list = Some(OpenList::new(item, level, marker.ordered));
        }
        true
    }

    fn item(line: &LineClass<'_>, marker: ListMarker) -> Node {
        let at = line.at(marker.content);
        let inline = parse_inline(&line.trimmed[marker.content..], at);
        let children = if inline.is_empty() {
            vec![]
        } else {
            vec![Node::paragraph(Span::new(at, line.end()), inline)]
        };
        Node::new(line.span(), NodeKind::ListItem { children })
    }
}

/// One list on the nesting stack.
#[derive(Debug, Clone)]
struct Level {
    /// Child indexes from the root list down to this list.
    path: Vec<usize>,
    level: usize,
    ordered: bool,
}

/// A root list still accepting items, with the stack of lists items may
/// currently be added to.
pub struct OpenList {
    node: Node,
    stack: Vec<Level>,
}

impl OpenList {
    fn new(item: Node, level: usize, ordered: bool) -> Self {
        Self {
            node: Self::list_of(item, ordered),
            stack: vec![Level {
                path: vec![],
                level,
                ordered,
            }],
        }
    }

    pub fn finish(self) -> Node {
        self.node
    }

    /// Adds an item, or hands it back when it has to start a new root list.
    fn push(&mut self, item: Node, level: usize, ordered: bool) -> Option<Node> {
        let mut dedented = false;
        while self.stack.len() > 1 && self.top().level > level {
            self.stack.pop();
            dedented = true;
        }
        let top = self.top().clone();

        if level > top.level {
            self.nest(&top, item, level, ordered);
            return None;
        }
        if top.ordered == ordered {
            self.append(&top.path, item);
            return None;
        }
        if dedented || self.stack.len() == 1 {
            return Some(item);
        }
        // Same indent, other ordering: a sibling list in the same parent item.
        self.stack.pop();
        let parent = &top.path[..top.path.len() - 1];
        self.add_list(parent, item, level, ordered);
        None
    }

    fn top(&self) -> &Level {
        // The root level is never popped.
        &self.stack[self.stack.len() - 1]
    }

    /// Adds a deeper item under the current item of `top`, reusing the
    /// item's trailing sublist when the ordering matches.
    fn nest(&mut self, top: &Level, item: Node, level: usize, ordered: bool) {
        let Some(list) = node_at_mut(&mut self.node, &top.path) else {
            return;
        };
        let item_index = list.children().len().saturating_sub(1);
        let mut item_path = top.path.clone();
        item_path.push(item_index);

        let reusable = node_at_mut(&mut self.node, &item_path).and_then(|current| {
            let last = current.children().len().checked_sub(1)?;
            match current.children()[last].kind {
                NodeKind::List { ordered: o, .. } if o == ordered => Some(last),
                _ => None,
            }
        });
        match reusable {
            Some(index) => {
                let mut path = item_path;
                path.push(index);
                self.append(&path, item);
                self.stack.push(Level {
                    path,
                    level,
                    ordered,
                });
            }
            None => self.add_list(&item_path, item, level, ordered),
        }
    }

    /// Starts a new list holding `item` as the last child of the item at
    /// `item_path`.
    fn add_list(&mut self, item_path: &[usize], item: Node, level: usize, ordered: bool) {
        let end = item.span.end;
        let Some(parent) = node_at_mut(&mut self.node, item_path).and_then(Node::children_mut)
        else {
            return;
        };
        parent.push(Self::list_of(item, ordered));
        let mut path = item_path.to_vec();
        path.push(parent.len() - 1);
        extend_to(&mut self.node, &path, end);
        self.stack.push(Level {
            path,
            level,
            ordered,
        });
    }

    fn append(&mut self, list_path: &[usize], item: Node) {
        let end = item.span.end;
        if let Some(items) = node_at_mut(&mut self.node, list_path).and_then(Node::children_mut) {
            items.push(item);
        }
        extend_to(&mut self.node, list_path, end);
    }

    fn list_of(item: Node, ordered: bool) -> Node {
        Node::new(
            item.span,
            NodeKind::List {
                ordered,
                children: vec![item],
            },
        )
    }
}

fn node_at_mut<'n>(mut node: &'n mut Node, path: &[usize]) -> Option<&'n mut Node> {
    for &i in path {
        node = node.children_mut()?.get_mut(i)?;
    }
    Some(node)
}

/// Moves the end of every node along `path` (root included) to `end`.
fn extend_to(root: &mut Node, path: &[usize], end: Position) {
    root.span.end = end;
    let mut node = root;
    for &i in path {
        let Some(child) = node.children_mut().and_then(|c| c.get_mut(i)) else {
            return;
        };
        child.span.end = end;
        node = child;
    }
}
