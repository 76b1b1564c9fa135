//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`Emphasis`**: `**bold**`, `_italic_`, `--underline--`, `~~strike~~`
//! - **`CodeSpan`**: `` `code` `` - raw zone, its content is never re-scanned
//! - **`Link`**: `[text](url "title")` and `![alt](url "title")`
//!
//! The parser asks each kind for its next occurrence and keeps the leftmost;
//! it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

use std::ops::Range;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
    Image,
    Link,
}

/// One occurrence of an inline construct, as local byte ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub kind: InlineKind,
    /// The whole construct including delimiters.
    pub full: Range<usize>,
    /// Emphasis/code content, link text or image alt.
    pub inner: Range<usize>,
    /// Link or image destination, title included.
    pub target: Option<Range<usize>>,
}

impl InlineKind {
    /// Scan order. On equal start indexes the earlier kind wins.
    pub const ORDER: [InlineKind; 7] = [
        InlineKind::Bold,
        InlineKind::Italic,
        InlineKind::Underline,
        InlineKind::Strike,
        InlineKind::Code,
        InlineKind::Image,
        InlineKind::Link,
    ];

    /// Finds the first occurrence of this kind starting at or after `from`.
    pub fn find(self, s: &str, from: usize) -> Option<InlineMatch> {
        match self {
            InlineKind::Bold => Emphasis::find(self, s, from),
            InlineKind::Italic => Emphasis::find(self, s, from),
            InlineKind::Underline => Emphasis::find(self, s, from),
            InlineKind::Strike => Emphasis::find(self, s, from),
            InlineKind::Code => CodeSpan::find(s, from),
            InlineKind::Image => Link::find_image(s, from),
            InlineKind::Link => Link::find_link(s, from),
        }
    }
}

/// The leftmost construct in `s[from..]` across all kinds.
pub fn leftmost(s: &str, from: usize) -> Option<InlineMatch> {
    let mut best: Option<InlineMatch> = None;
    for kind in InlineKind::ORDER {
        if let Some(m) = kind.find(s, from)
            && best.as_ref().is_none_or(|b| m.full.start < b.full.start)
        {
            best = Some(m);
        }
    }
    best
}
