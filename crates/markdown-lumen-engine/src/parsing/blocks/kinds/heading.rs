use crate::parsing::{
    blocks::{builder::Tokenizer, classify::LineClass},
    inline::parse_inline,
    node::{Node, NodeKind},
};

/// ATX heading: one to six `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_DEPTH: usize = 6;

    /// Returns `(depth, content byte index)` for a heading line.
    pub fn parse(trimmed: &str) -> Option<(u8, usize)> {
        let b = trimmed.as_bytes();
        let depth = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if depth == 0 || depth > Self::MAX_DEPTH || b.get(depth) != Some(&b' ') {
            return None;
        }
        let rest = &trimmed[depth..];
        let content = depth + (rest.len() - rest.trim_start().len());
        Some((depth as u8, content))
    }

    pub fn matches(line: &LineClass<'_>) -> bool {
        Self::parse(line.trimmed).is_some()
    }

    pub fn consume(tok: &mut Tokenizer, line: &LineClass<'_>) -> bool {
        let Some((depth, content)) = Self::parse(line.trimmed) else {
            return false;
        };
        let children = parse_inline(&line.trimmed[content..], line.at(content));
        tok.push_block(Node::new(line.span(), NodeKind::Heading { depth, children }));
        true
    }
}
