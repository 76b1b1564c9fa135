use crate::parsing::{
    blocks::Tokenizer,
    lines::line_starts,
    node::Node,
    position::Position,
};

use super::{
    ReparseStats,
    ranges::{ChangeRange, LineDiff},
};

/// 0-based line a top-level node starts on.
fn start_line(node: &Node) -> usize {
    node.span.start.line - 1
}

/// Rebuilds the top-level block list of a new document from the old one.
///
/// Old blocks are copied (and shifted) until a change range is reached. The
/// tokenizer then restarts at the old block the change could extend, or just
/// after the last unaffected one, and runs until, past the change, it is idle on an unchanged line where an
/// old block also started. From there the old blocks are reused again.
pub struct Splice<'a> {
    old: &'a [Node],
    new_lines: &'a [&'a str],
    old_starts: Vec<usize>,
    new_starts: Vec<usize>,
    new_to_old: &'a [Option<usize>],
    out: Vec<Node>,
    /// First old block not yet reused or discarded.
    next_node: usize,
    /// Matching old and new line of the last resynchronization point.
    done_old: usize,
    done_new: usize,
    pub stats: ReparseStats,
}

impl<'a> Splice<'a> {
    pub fn new(
        old: &'a [Node],
        old_lines: &[&str],
        new_lines: &'a [&'a str],
        diff: &'a LineDiff,
    ) -> Self {
        Self {
            old,
            new_lines,
            old_starts: line_starts(old_lines),
            new_starts: line_starts(new_lines),
            new_to_old: &diff.new_to_old,
            out: Vec::with_capacity(old.len()),
            next_node: 0,
            done_old: 0,
            done_new: 0,
            stats: ReparseStats {
                change_ranges: diff.ranges.clone(),
                ..ReparseStats::default()
            },
        }
    }

    /// Re-tokenizes the region touched by `range`.
    pub fn apply(&mut self, range: &ChangeRange) {
        if range.old.start < self.done_old || range.new.start < self.done_new {
            // Already covered by the previous run.
            return;
        }

        let pending = &self.old[self.next_node..];
        let before = pending.partition_point(|n| start_line(n) < range.old.start);
        let (restart_node, restart_old) = match before.checked_sub(1) {
            // A block reaching the line before the change may be continued by it.
            Some(last) if self.old[self.next_node + last].span.end.line >= range.old.start => {
                let index = self.next_node + last;
                (index, start_line(&self.old[index]))
            }
            // Only blank lines lie between the last block and the change.
            Some(last) => {
                let index = self.next_node + last;
                (index + 1, self.old[index].span.end.line)
            }
            None => (self.next_node, self.done_old),
        };

        self.reuse_until(restart_node);
        let restart_new = restart_old - self.done_old + self.done_new;
        self.run(restart_new, range.new.end);
    }

    /// Reuses every remaining old block and returns the new top-level list.
    pub fn finish(mut self) -> (Vec<Node>, ReparseStats) {
        self.reuse_until(self.old.len());
        (self.out, self.stats)
    }

    fn reuse_until(&mut self, end: usize) {
        if end <= self.next_node {
            return;
        }
        let lines = self.done_new as isize - self.done_old as isize;
        let bytes = self.new_starts[self.done_new] as isize - self.old_starts[self.done_old] as isize;
        for node in &self.old[self.next_node..end] {
            let mut node = node.clone();
            node.shift(lines, bytes);
            self.out.push(node);
        }
        self.stats.reused += end - self.next_node;
        self.next_node = end;
    }

    /// Tokenizes new lines from `from` until resynchronized past `changed_end`
    /// or until the document ends.
    fn run(&mut self, from: usize, changed_end: usize) {
        let mut tok = Tokenizer::new();
        for n in from..self.new_lines.len() {
            if n >= changed_end
                && tok.is_idle()
                && let Some(old_line) = self.new_to_old[n]
                && let Some(node) = self.old_block_at(old_line)
            {
                self.emit(tok);
                self.next_node = node;
                self.done_old = old_line;
                self.done_new = n;
                return;
            }
            tok.push_line(self.new_lines[n], Position::new(n + 1, 1, self.new_starts[n]));
        }

        self.emit(tok);
        self.next_node = self.old.len();
        self.done_old = self.old_starts.len() - 1;
        self.done_new = self.new_lines.len();
    }

    fn emit(&mut self, tok: Tokenizer) {
        let nodes = tok.finish();
        self.stats.reparsed += nodes.len();
        self.out.extend(nodes);
    }

    /// Index of the unconsumed old block starting on `old_line`.
    fn old_block_at(&self, old_line: usize) -> Option<usize> {
        let pending = &self.old[self.next_node..];
        let i = pending.partition_point(|n| start_line(n) < old_line);
        pending
            .get(i)
            .filter(|n| start_line(n) == old_line)
            .map(|_| self.next_node + i)
    }
}
