use super::position::Position;

/// A reference to a single source line with the position of its first byte.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// 0-based line index.
    pub index: usize,
    /// Line text without the terminating `\n`.
    pub text: &'a str,
    pub start: Position,
}

/// Splits a document into its lines. An empty document is one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Byte offset of every line start, plus one trailing entry for the position
/// just past the last line, so `starts[i + 1] - starts[i]` is `len + 1`.
pub fn line_starts(lines: &[&str]) -> Vec<usize> {
    let mut starts = Vec::with_capacity(lines.len() + 1);
    let mut offset = 0usize;
    for line in lines {
        starts.push(offset);
        offset += line.len() + 1;
    }
    starts.push(offset);
    starts
}

/// Returns an iterator over lines with their absolute start positions.
pub fn lines_with_positions<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = LineRef<'a>> + 'a {
    let mut offset = 0usize;
    lines.iter().enumerate().map(move |(index, text)| {
        let start = Position::new(index + 1, 1, offset);
        offset += text.len() + 1;
        LineRef { index, text, start }
    })
}

/// Position just past the last character of the document.
pub fn end_position(lines: &[&str]) -> Position {
    let starts = line_starts(lines);
    let last = lines.len().saturating_sub(1);
    let text = lines.get(last).copied().unwrap_or_default();
    Position::new(last + 1, 1, starts[last]).shifted(text)
}
