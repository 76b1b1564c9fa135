use crate::parsing::position::{Position, Span};

/// Classification of a single line containing only local facts.
///
/// Matchers decide from these facts plus the scan context; no matcher looks
/// at neighbouring lines.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line without its terminator (a trailing `\r` is dropped too).
    pub raw: &'a str,
    /// `raw` with surrounding whitespace removed.
    pub trimmed: &'a str,
    /// Leading whitespace width in characters.
    pub indent: usize,
    /// Position of the first byte of `raw`.
    pub start: Position,
    /// Position of the first byte of `trimmed`.
    pub content_start: Position,
}

impl<'a> LineClass<'a> {
    pub fn classify(line: &'a str, start: Position) -> Self {
        let raw = line.strip_suffix('\r').unwrap_or(line);
        let unindented = raw.trim_start();
        let leading = &raw[..raw.len() - unindented.len()];
        Self {
            raw,
            trimmed: unindented.trim_end(),
            indent: leading.chars().count(),
            start,
            content_start: start.shifted(leading),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// End of the trimmed text.
    pub fn end(&self) -> Position {
        self.content_start.shifted(self.trimmed)
    }

    /// Span of the trimmed text.
    pub fn span(&self) -> Span {
        Span::new(self.content_start, self.end())
    }

    /// Position of byte `i` of `trimmed`.
    pub fn at(&self, i: usize) -> Position {
        self.content_start.shifted(&self.trimmed[..i])
    }

    /// `raw` from byte `i` of `trimmed` to the end of the line.
    pub fn raw_from(&self, i: usize) -> &'a str {
        let lead = self.raw.len() - self.raw.trim_start().len();
        &self.raw[lead + i..]
    }
}
