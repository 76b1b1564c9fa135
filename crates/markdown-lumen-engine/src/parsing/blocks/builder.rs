use log::trace;

use crate::parsing::{
    lines::{LineRef, lines_with_positions},
    node::Node,
    position::Position,
};

use super::{classify::LineClass, context::ScanContext, open::dispatch};

/// Line-at-a-time block tokenizer.
///
/// Each pushed line is offered to the matchers in precedence order. Finished
/// top-level blocks accumulate in `out`; constructs still accepting lines live
/// in the scan context until something closes them.
#[derive(Default)]
pub struct Tokenizer {
    pub(crate) out: Vec<Node>,
    pub(crate) ctx: ScanContext,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line (without its `\n`) whose first byte sits at `start`.
    pub fn push_line(&mut self, line: &str, start: Position) {
        let class = LineClass::classify(line, start);
        let kind = dispatch(self, &class);
        trace!("line {}: {:?}", start.line, kind);
    }

    /// True when no construct is waiting for more lines.
    pub fn is_idle(&self) -> bool {
        self.ctx.is_idle()
    }

    /// Top-level blocks finished so far.
    pub fn nodes(&self) -> &[Node] {
        &self.out
    }

    /// Closes every open construct. Called before a new top-level block is
    /// started so blocks land in document order.
    pub fn close_open(&mut self) {
        let closed = self.ctx.close_all();
        self.out.extend(closed);
    }

    /// Closes open constructs, then appends a finished block.
    pub fn push_block(&mut self, node: Node) {
        self.close_open();
        self.out.push(node);
    }

    /// Flushes unterminated constructs and returns all top-level blocks.
    pub fn finish(mut self) -> Vec<Node> {
        self.close_open();
        self.out
    }
}

/// Tokenizes `lines` as a whole document.
pub fn tokenize(lines: &[&str]) -> Vec<Node> {
    let mut tok = Tokenizer::new();
    for LineRef { text, start, .. } in lines_with_positions(lines) {
        tok.push_line(text, start);
    }
    tok.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{lines::split_lines, node::NodeKind};

    fn kinds(text: &str) -> Vec<&'static str> {
        tokenize(&split_lines(text))
            .iter()
            .map(Node::kind_name)
            .collect()
    }

    #[test]
    fn every_plain_line_is_a_paragraph() {
        assert_eq!(kinds("one\ntwo"), vec!["paragraph", "paragraph"]);
    }

    #[test]
    fn blank_lines_produce_nothing() {
        assert!(kinds("\n  \n").is_empty());
    }

    #[test]
    fn matcher_precedence() {
        assert_eq!(
            kinds("# h\n---\n- a\n| x |\n> q\n```\ncode\n```\n<div>\n</div>\nplain"),
            vec![
                "heading",
                "thematicBreak",
                "list",
                "table",
                "blockquote",
                "code",
                "html",
                "paragraph"
            ]
        );
    }

    #[test]
    fn open_containers_block_idleness() {
        let mut tok = Tokenizer::new();
        tok.push_line("- a", Position::start());
        assert!(!tok.is_idle());
        assert!(tok.nodes().is_empty());
        tok.push_line("", Position::new(2, 1, 4));
        assert!(tok.is_idle());
        assert_eq!(tok.nodes().len(), 1);
    }

    #[test]
    fn unterminated_fence_flushes_at_finish() {
        let nodes = tokenize(&split_lines("```rust\nfn main() {}"));
        assert_eq!(
            nodes[0].kind,
            NodeKind::Code {
                lang: "rust".into(),
                value: "fn main() {}".into()
            }
        );
    }
}
