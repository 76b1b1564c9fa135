use crate::parsing::{
    blocks::{builder::Tokenizer, classify::LineClass},
    inline::parse_inline,
    node::Node,
};

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters. They are the fallback when no other
/// matcher claims a line, and each line becomes its own paragraph.
pub struct Paragraph;

impl Paragraph {
    /// Always consumes. Blank lines produce nothing.
    pub fn consume(tok: &mut Tokenizer, line: &LineClass<'_>) -> bool {
        if line.is_blank() {
            return true;
        }
        let children = parse_inline(line.trimmed, line.content_start);
        if !children.is_empty() {
            tok.push_block(Node::paragraph(line.span(), children));
        }
        true
    }
}
