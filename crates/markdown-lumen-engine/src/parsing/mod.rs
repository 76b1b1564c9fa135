//! Markdown to positioned syntax tree.
//!
//! A full parse feeds every line through the block [`Tokenizer`](blocks::Tokenizer); a delta
//! parse goes through [`incremental`] and reuses unaffected blocks of the
//! previous tree.

pub mod blocks;
pub mod incremental;
pub mod inline;
pub mod lines;
pub mod node;
pub mod position;
pub mod sanitize;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::tokenize;
use lines::{end_position, split_lines};
use node::{Node, NodeKind};
use position::{Position, Span};

/// The last parsed text together with its tree.
#[derive(Debug, Clone, Copy)]
pub struct Previous<'a> {
    pub text: &'a str,
    pub root: &'a Node,
}

/// Parses a whole document into a `root` node.
pub fn parse_document(text: &str) -> Node {
    let lines = split_lines(text);
    let span = Span::new(Position::start(), end_position(&lines));
    Node::new(
        span,
        NodeKind::Root {
            children: tokenize(&lines),
        },
    )
}

/// Parses `text`, incrementally when the previous text and tree are given.
pub fn parse_markdown(text: &str, previous: Option<Previous<'_>>) -> Node {
    match previous {
        Some(prev) => incremental::reparse(prev.text, prev.root, text),
        None => parse_document(text),
    }
}

/// A document's text together with its parsed tree.
#[derive(Debug, Clone)]
pub struct ParsedDoc {
    pub text: String,
    pub root: Node,
}

impl ParsedDoc {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let root = parse_document(&text);
        Self { text, root }
    }

    /// Parses `new_text` against this document, reusing unchanged blocks.
    pub fn reparse(&self, new_text: impl Into<String>) -> Self {
        let text = new_text.into();
        let root = incremental::reparse(&self.text, &self.root, &text);
        Self { text, root }
    }

    pub fn previous(&self) -> Previous<'_> {
        Previous {
            text: &self.text,
            root: &self.root,
        }
    }
}
