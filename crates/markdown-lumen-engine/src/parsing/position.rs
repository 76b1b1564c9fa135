use serde::Serialize;

/// A point in the source document.
///
/// `line` and `column` are 1-based (column counts characters), `offset` is the
/// 0-based byte offset into the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// The first character of a document.
    pub const fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Advances over `skipped`, which must lie on the same line as `self`.
    ///
    /// Offsets move by bytes and columns by characters, so this is the only
    /// place where the two units are reconciled.
    #[must_use]
    pub fn shifted(self, skipped: &str) -> Self {
        Self {
            line: self.line,
            column: self.column + skipped.chars().count(),
            offset: self.offset + skipped.len(),
        }
    }

    /// Moves the position by whole lines and bytes, keeping the column.
    #[must_use]
    pub fn moved(self, lines: isize, bytes: isize) -> Self {
        Self {
            line: self.line.saturating_add_signed(lines),
            column: self.column,
            offset: self.offset.saturating_add_signed(bytes),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// The source range covered by a node, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span of `text` starting at `start` (text must not contain a newline).
    pub fn of(start: Position, text: &str) -> Self {
        Self {
            start,
            end: start.shifted(text),
        }
    }

    #[must_use]
    pub fn moved(self, lines: isize, bytes: isize) -> Self {
        Self {
            start: self.start.moved(lines, bytes),
            end: self.end.moved(lines, bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_counts_bytes_and_chars_separately() {
        let p = Position::new(3, 5, 40).shifted("héllo");
        assert_eq!(p, Position::new(3, 10, 46));
    }

    #[test]
    fn span_of_text() {
        let sp = Span::of(Position::start(), "abc");
        assert_eq!(sp.end, Position::new(1, 4, 3));
    }

    #[test]
    fn moved_applies_signed_deltas() {
        let sp = Span::new(Position::new(5, 1, 50), Position::new(6, 3, 60));
        let moved = sp.moved(-2, -20);
        assert_eq!(moved.start, Position::new(3, 1, 30));
        assert_eq!(moved.end, Position::new(4, 3, 40));
    }
}
