use std::sync::OnceLock;

use regex::Regex;

use super::{InlineKind, InlineMatch};

/// Paired-delimiter emphasis: bold, italic, underline and strikethrough.
///
/// Content is matched lazily, so `**a** **b**` is two bold runs, and must be
/// non-empty.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "_";
    pub const UNDERLINE: &'static str = "--";
    pub const STRIKE: &'static str = "~~";

    pub fn delimiter(kind: InlineKind) -> Option<&'static str> {
        match kind {
            InlineKind::Bold => Some(Self::BOLD),
            InlineKind::Italic => Some(Self::ITALIC),
            InlineKind::Underline => Some(Self::UNDERLINE),
            InlineKind::Strike => Some(Self::STRIKE),
            _ => None,
        }
    }

    pub fn find(kind: InlineKind, s: &str, from: usize) -> Option<InlineMatch> {
        let caps = Self::pattern(kind)?.captures_at(s, from)?;
        let full = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(InlineMatch {
            kind,
            full: full.range(),
            inner: inner.range(),
            target: None,
        })
    }

    fn pattern(kind: InlineKind) -> Option<&'static Regex> {
        static BOLD: OnceLock<Regex> = OnceLock::new();
        static ITALIC: OnceLock<Regex> = OnceLock::new();
        static UNDERLINE: OnceLock<Regex> = OnceLock::new();
        static STRIKE: OnceLock<Regex> = OnceLock::new();

        let cell = match kind {
            InlineKind::Bold => &BOLD,
            InlineKind::Italic => &ITALIC,
            InlineKind::Underline => &UNDERLINE,
            InlineKind::Strike => &STRIKE,
            _ => return None,
        };
        let delimiter = Self::delimiter(kind)?;
        Some(cell.get_or_init(|| {
            let d = regex::escape(delimiter);
            Regex::new(&format!("{d}(.+?){d}")).expect("Invalid emphasis regex")
        }))
    }
}
