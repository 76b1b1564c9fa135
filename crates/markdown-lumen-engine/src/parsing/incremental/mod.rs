//! Incremental re-parsing.
//!
//! Given the previous text and its tree, only the blocks around changed
//! lines are tokenized again. Blocks outside the touched region are cloned
//! from the previous tree with their positions shifted, so the result is
//! identical to a full parse of the new text.

pub mod ranges;
pub mod splice;

use log::debug;
use serde::Serialize;

use super::{
    lines::{end_position, split_lines},
    node::{Node, NodeKind},
    position::{Position, Span},
};

pub use ranges::{ChangeRange, LineDiff, diff_lines};
use splice::Splice;

/// What a re-parse did, for logging and benchmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReparseStats {
    pub change_ranges: Vec<ChangeRange>,
    /// Top-level blocks taken over from the previous tree.
    pub reused: usize,
    /// Top-level blocks produced by the tokenizer.
    pub reparsed: usize,
}

/// Parses `new_text` reusing as much of `prev_root` (the tree of
/// `prev_text`) as possible.
pub fn reparse(prev_text: &str, prev_root: &Node, new_text: &str) -> Node {
    reparse_with_stats(prev_text, prev_root, new_text).0
}

pub fn reparse_with_stats(prev_text: &str, prev_root: &Node, new_text: &str) -> (Node, ReparseStats) {
    if prev_text == new_text {
        let stats = ReparseStats {
            reused: prev_root.children().len(),
            ..ReparseStats::default()
        };
        return (prev_root.clone(), stats);
    }

    let old_lines = split_lines(prev_text);
    let new_lines = split_lines(new_text);
    let diff = diff_lines(&old_lines, &new_lines);

    let mut splice = Splice::new(prev_root.children(), &old_lines, &new_lines, &diff);
    for range in &diff.ranges {
        splice.apply(range);
    }
    let (children, stats) = splice.finish();
    debug!(
        "reparse: {} change ranges, {} blocks reused, {} reparsed",
        stats.change_ranges.len(),
        stats.reused,
        stats.reparsed
    );

    let span = Span::new(Position::start(), end_position(&new_lines));
    (Node::new(span, NodeKind::Root { children }), stats)
}
