use std::ops::Range;

use serde::Serialize;
use similar::{Algorithm, DiffTag, capture_diff_slices};

/// A maximal run of differing lines, as half-open line index ranges into
/// the old and the new document. Either side may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRange {
    pub old: Range<usize>,
    pub new: Range<usize>,
}

/// Line-level comparison of two documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    pub ranges: Vec<ChangeRange>,
    /// For every new line that is unchanged, its old line index.
    pub new_to_old: Vec<Option<usize>>,
}

/// Diffs two line arrays (Myers). Each gap between two runs of equal
/// lines, or between a run and either end of the documents, becomes one
/// change range.
///
/// Only the equal runs are used for alignment: the index an insert or
/// delete reports for the side it leaves untouched need not line up with
/// its neighbours.
pub fn diff_lines(old: &[&str], new: &[&str]) -> LineDiff {
    let mut ranges = vec![];
    let mut new_to_old = vec![None; new.len()];
    let (mut old_at, mut new_at) = (0, 0);

    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        if tag != DiffTag::Equal {
            continue;
        }
        push_gap(&mut ranges, old_at..old_range.start, new_at..new_range.start);
        old_at = old_range.end;
        new_at = new_range.end;
        for (o, n) in old_range.zip(new_range) {
            new_to_old[n] = Some(o);
        }
    }
    push_gap(&mut ranges, old_at..old.len(), new_at..new.len());

    LineDiff { ranges, new_to_old }
}

fn push_gap(ranges: &mut Vec<ChangeRange>, old: Range<usize>, new: Range<usize>) {
    if !old.is_empty() || !new.is_empty() {
        ranges.push(ChangeRange { old, new });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn identical_lines_have_no_ranges() {
        let diff = diff_lines(&["a", "b"], &["a", "b"]);
        assert!(diff.ranges.is_empty());
        assert_eq!(diff.new_to_old, vec![Some(0), Some(1)]);
    }

    #[test]
    fn replaced_line() {
        let diff = diff_lines(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(
            diff.ranges,
            vec![ChangeRange {
                old: 1..2,
                new: 1..2
            }]
        );
        assert_eq!(diff.new_to_old, vec![Some(0), None, Some(2)]);
    }

    #[test]
    fn insertion_has_empty_old_side() {
        let diff = diff_lines(&["a", "c"], &["a", "b", "c"]);
        assert_eq!(
            diff.ranges,
            vec![ChangeRange {
                old: 1..1,
                new: 1..2
            }]
        );
    }

    #[test]
    fn deletion_has_empty_new_side() {
        let diff = diff_lines(&["a", "b", "c"], &["a", "c"]);
        assert_eq!(
            diff.ranges,
            vec![ChangeRange {
                old: 1..2,
                new: 1..1
            }]
        );
        assert_eq!(diff.new_to_old, vec![Some(0), Some(2)]);
    }

    #[test]
    fn ranges_follow_equal_runs() {
        let diff = diff_lines(&["a", "b"], &["b", "a", "a"]);
        let unchanged = diff.new_to_old.iter().flatten().count();
        assert_eq!(unchanged, 1);

        let mut old_at = 0;
        let mut new_at = 0;
        for range in &diff.ranges {
            assert!(range.old.start >= old_at && range.new.start >= new_at);
            old_at = range.old.end;
            new_at = range.new.end;
        }
        let changed_old: usize = diff.ranges.iter().map(|r| r.old.len()).sum();
        let changed_new: usize = diff.ranges.iter().map(|r| r.new.len()).sum();
        assert_eq!(changed_old, 1);
        assert_eq!(changed_new, 2);
    }

    #[test]
    fn trailing_insertion_reaches_end() {
        let diff = diff_lines(&["a"], &["a", "b", "c"]);
        assert_eq!(
            diff.ranges,
            vec![ChangeRange {
                old: 1..1,
                new: 1..3
            }]
        );
    }

    #[test]
    fn separate_edits_give_separate_ranges() {
        let diff = diff_lines(&["a", "b", "c", "d"], &["x", "b", "c", "y"]);
        assert_eq!(diff.ranges.len(), 2);
        assert_eq!(diff.ranges[1].new, 3..4);
    }
}
