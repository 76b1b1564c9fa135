use crate::parsing::position::{Position, Span};

/// A cursor over a single-line text span with position tracking.
///
/// Operates over a string slice while tracking the absolute position of its
/// first byte in the document (via `base`).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Position of `s[0]` in the document.
    pub base: Position,
    /// Current local byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: Position) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the absolute position of local byte index `i`.
    pub fn pos_at(&self, i: usize) -> Position {
        self.base.shifted(&self.s[..i])
    }

    /// Absolute span of the local byte range `start..end`.
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.pos_at(start), self.pos_at(end))
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Moves to local byte index `i` (never backwards).
    pub fn jump_to(&mut self, i: usize) {
        self.i = self.i.max(i.min(self.s.len()));
    }
}
