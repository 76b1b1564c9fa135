use super::{
    builder::Tokenizer,
    classify::LineClass,
    kinds::{BlockQuote, CodeFence, Heading, HtmlBlock, List, Paragraph, Table, ThematicBreak},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    CodeFence,
    HtmlBlock,
    Heading,
    BlockQuote,
    ThematicBreak,
    List,
    Table,
    Paragraph,
}

/// A matcher consumes the line and returns `true`, or leaves it alone.
pub type Matcher = fn(&mut Tokenizer, &LineClass<'_>) -> bool;

/// The block grammar: matchers in precedence order. The first one that
/// consumes a line wins. `Paragraph` is the fallback and consumes anything.
pub const MATCHERS: [(BlockKind, Matcher); 8] = [
    (BlockKind::CodeFence, CodeFence::consume),
    (BlockKind::HtmlBlock, HtmlBlock::consume),
    (BlockKind::Heading, Heading::consume),
    (BlockKind::BlockQuote, BlockQuote::consume),
    (BlockKind::ThematicBreak, ThematicBreak::consume),
    (BlockKind::List, List::consume),
    (BlockKind::Table, Table::consume),
    (BlockKind::Paragraph, Paragraph::consume),
];

/// Runs the matchers over one line, returning the kind that consumed it.
pub fn dispatch(tok: &mut Tokenizer, line: &LineClass<'_>) -> Option<BlockKind> {
    for (kind, matcher) in MATCHERS {
        if matcher(tok, line) {
            return Some(kind);
        }
    }
    None
}
