use crate::parsing::{
    blocks::{builder::Tokenizer, classify::LineClass},
    inline::parse_inline,
    node::{Node, NodeKind},
    position::{Position, Span},
};

use super::{CodeFence, Heading, HtmlBlock, List, Table, ThematicBreak};

/// Blockquote block type with owned delimiter constant.
///
/// Quoted content is parsed by a nested [`Tokenizer`], so any block can
/// appear inside a quote, quotes included.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Byte index in `trimmed` where quoted content begins: after the `>`
    /// and one optional space. `None` if the line is not quoted.
    pub fn strip_prefix(trimmed: &str) -> Option<usize> {
        let rest = trimmed.strip_prefix(Self::PREFIX)?;
        Some(1 + usize::from(rest.starts_with(' ')))
    }

    pub fn matches(line: &LineClass<'_>) -> bool {
        Self::strip_prefix(line.trimmed).is_some()
    }

    /// Lines that end a quote instead of continuing it lazily.
    pub fn ends_lazy_continuation(line: &LineClass<'_>) -> bool {
        line.is_blank()
            || Table::matches(line)
            || CodeFence::matches(line)
            || HtmlBlock::matches(line)
            || Heading::matches(line)
            || ThematicBreak::matches(line)
            || List::matches(line)
    }

    pub fn consume(tok: &mut Tokenizer, line: &LineClass<'_>) -> bool {
        if let Some(at) = Self::strip_prefix(line.trimmed) {
            let content = line.raw_from(at);
            let content_start = line.at(at);
            match tok.ctx.quote.as_mut() {
                Some(quote) => {
                    quote.inner.push_line(content, content_start);
                    quote.end = line.end();
                    quote.raw_end = line.start.shifted(line.raw);
                }
                None => {
                    tok.close_open();
                    let mut inner = Tokenizer::new();
                    inner.push_line(content, content_start);
                    tok.ctx.quote = Some(OpenQuote {
                        start: line.content_start,
                        end: line.end(),
                        raw_end: line.start.shifted(line.raw),
                        inner: Box::new(inner),
                    });
                }
            }
            return true;
        }

        if tok.ctx.quote.is_none() {
            return false;
        }
        if Self::ends_lazy_continuation(line) {
            tok.close_open();
            return false;
        }
        if let Some(quote) = tok.ctx.quote.as_mut() {
            quote.continue_lazily(line);
        }
        true
    }
}

/// A quote still accepting lines.
pub struct OpenQuote {
    pub start: Position,
    pub end: Position,
    /// End of the last line taken, trailing whitespace included.
    pub raw_end: Position,
    pub inner: Box<Tokenizer>,
}

impl OpenQuote {
    /// Appends an unquoted line to the quote.
    ///
    /// Raw blocks take it verbatim. Otherwise it joins the quote's last
    /// paragraph when that paragraph ended on the previous line, after a
    /// text node holding exactly the line break, or becomes a new paragraph.
    pub fn continue_lazily(&mut self, line: &LineClass<'_>) {
        let newline = self.newline_before(line);
        self.end = line.end();
        self.raw_end = line.start.shifted(line.raw);
        if self.inner.ctx.in_raw_block() {
            self.inner.push_line(line.raw, line.start);
            return;
        }

        self.inner.close_open();
        let nodes = parse_inline(line.trimmed, line.content_start);
        if let Some(last) = self.inner.out.last_mut()
            && last.span.end.line + 1 == line.start.line
            && let NodeKind::Paragraph { children } = &mut last.kind
        {
            children.push(Node::text(Span::new(newline, line.start), "\n"));
            children.extend(nodes);
            last.span.end = line.end();
            return;
        }
        self.inner.out.push(Node::paragraph(line.span(), nodes));
    }

    /// Position of the `\n` ending the line before `line`. A `\r` before it
    /// is not part of `raw`, so it sits one column past `raw_end`.
    fn newline_before(&self, line: &LineClass<'_>) -> Position {
        let offset = line.start.offset.saturating_sub(1);
        let column = if self.raw_end.offset == offset {
            self.raw_end.column
        } else {
            self.raw_end.column + 1
        };
        Position::new(line.start.line.saturating_sub(1), column, offset)
    }

    pub fn finish(self) -> Node {
        Node::new(
            Span::new(self.start, self.end),
            NodeKind::Blockquote {
                children: self.inner.finish(),
            },
        )
    }
}
