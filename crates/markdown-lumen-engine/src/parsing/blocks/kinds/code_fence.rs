use crate::parsing::{
    blocks::{builder::Tokenizer, classify::LineClass},
    node::{Node, NodeKind},
    position::{Position, Span},
};

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const DEFAULT_LANG: &'static str = "plaintext";

    pub fn matches(line: &LineClass<'_>) -> bool {
        line.trimmed.starts_with(Self::BACKTICKS)
    }

    /// Opens a fence, buffers a line of an open fence, or closes it.
    pub fn consume(tok: &mut Tokenizer, line: &LineClass<'_>) -> bool {
        if let Some(open) = tok.ctx.fence.as_mut() {
            open.end = line.end();
            if Self::matches(line) {
                if let Some(open) = tok.ctx.fence.take() {
                    tok.out.push(open.finish());
                }
            } else {
                open.lines.push(line.raw.to_string());
            }
            return true;
        }

        if !Self::matches(line) {
            return false;
        }
        tok.close_open();
        let info = line.trimmed[Self::BACKTICKS.len()..].trim();
        tok.ctx.fence = Some(OpenFence {
            lang: if info.is_empty() {
                Self::DEFAULT_LANG.to_string()
            } else {
                info.to_string()
            },
            lines: vec![],
            start: line.content_start,
            end: line.end(),
        });
        true
    }

    /// The buffered lines, verbatim, with whitespace trimmed from both ends
    /// of the whole block.
    pub fn code_value(lines: &[String]) -> String {
        lines.join("\n").trim().to_string()
    }
}

/// A fence that has seen its opening line.
#[derive(Debug)]
pub struct OpenFence {
    pub lang: String,
    pub lines: Vec<String>,
    pub start: Position,
    pub end: Position,
}

impl OpenFence {
    pub fn finish(self) -> Node {
        Node::new(
            Span::new(self.start, self.end),
            NodeKind::Code {
                value: CodeFence::code_value(&self.lines),
                lang: self.lang,
            },
        )
    }
}
