use crate::parsing::{
    blocks::{builder::Tokenizer, classify::LineClass},
    node::{Node, NodeKind},
};

/// Three or more `-` or `*` and nothing else.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 2] = ['-', '*'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &LineClass<'_>) -> bool {
        let t = line.trimmed;
        t.len() >= Self::MIN_LEN
            && Self::MARKERS
                .iter()
                .any(|&m| t.chars().all(|c| c == m))
    }

    pub fn consume(tok: &mut Tokenizer, line: &LineClass<'_>) -> bool {
        if !Self::matches(line) {
            return false;
        }
        tok.push_block(Node::new(line.span(), NodeKind::ThematicBreak));
        true
    }
}
