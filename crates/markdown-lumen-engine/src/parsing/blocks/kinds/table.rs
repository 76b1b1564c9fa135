use crate::parsing::{
    blocks::{builder::Tokenizer, classify::LineClass},
    inline::parse_inline,
    node::{Node, NodeKind},
    position::Span,
};

/// Pipe tables: every line of the form `| ... |` is a row, except the
/// header separator row, which is consumed without producing a node.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    pub fn matches(line: &LineClass<'_>) -> bool {
        let t = line.trimmed;
        t.len() >= 2 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// Non-empty trimmed cells with their byte index in `trimmed`.
    pub fn cells(trimmed: &str) -> Vec<(usize, &str)> {
        let inner = &trimmed[1..trimmed.len() - 1];
        let mut out = vec![];
        let mut at = 1usize;
        for piece in inner.split(Self::PIPE) {
            let cell = piece.trim();
            if !cell.is_empty() {
                let lead = piece.len() - piece.trim_start().len();
                out.push((at + lead, cell));
            }
            at += piece.len() + 1;
        }
        out
    }

    /// A row whose cells only hold `-` and `:` with at least one `-`.
    pub fn is_separator(trimmed: &str) -> bool {
        let cells = Self::cells(trimmed);
        !cells.is_empty()
            && cells.iter().all(|(_, c)| {
                c.contains('-') && c.chars().all(|ch| ch == '-' || ch == ':')
            })
    }

    pub fn consume(tok: &mut Tokenizer, line: &LineClass<'_>) -> bool {
        if !Self::matches(line) {
            if tok.ctx.table.is_some() {
                tok.close_open();
            }
            return false;
        }

        if Self::is_separator(line.trimmed) {
            if let Some(table) = tok.ctx.table.as_mut() {
                table.span.end = line.end();
            }
            return true;
        }

        let row = Self::row(line);
        match tok.ctx.table.as_mut() {
            Some(table) => {
                table.span.end = row.span.end;
                if let Some(rows) = table.children_mut() {
                    rows.push(row);
                }
            }
            None => {
                tok.close_open();
                tok.ctx.table = Some(Node::new(
                    row.span,
                    NodeKind::Table {
                        children: vec![row],
                    },
                ));
            }
        }
        true
    }

    fn row(line: &LineClass<'_>) -> Node {
        let children = Self::cells(line.trimmed)
            .into_iter()
            .map(|(at, text)| {
                let start = line.at(at);
                Node::new(
                    Span::of(start, text),
                    NodeKind::TableCell {
                        children: parse_inline(text, start),
                    },
                )
            })
            .collect();
        Node::new(line.span(), NodeKind::TableRow { children })
    }
}
