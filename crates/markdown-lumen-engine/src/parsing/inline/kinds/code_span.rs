use std::sync::OnceLock;

use regex::Regex;

use super::{InlineKind, InlineMatch};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their content becomes a single text node and is
/// never scanned for other constructs.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    pub fn find(s: &str, from: usize) -> Option<InlineMatch> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| Regex::new(r"`(.*?)`").expect("Invalid code span regex"));
        let caps = re.captures_at(s, from)?;
        Some(InlineMatch {
            kind: InlineKind::Code,
            full: caps.get(0)?.range(),
            inner: caps.get(1)?.range(),
            target: None,
        })
    }

    /// Whitespace-only spans stay literal text, delimiters included.
    pub fn is_literal(inner: &str) -> bool {
        inner.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_code_span() {
        let m = CodeSpan::find("run `cargo` now", 0).unwrap();
        assert_eq!(m.full, 4..11);
        assert_eq!(m.inner, 5..10);
    }

    #[test]
    fn unclosed_tick_is_not_code() {
        assert!(CodeSpan::find("`unclosed", 0).is_none());
    }

    #[test]
    fn blank_content_is_literal() {
        assert!(CodeSpan::is_literal(" "));
        assert!(CodeSpan::is_literal(""));
        assert!(!CodeSpan::is_literal(" x "));
    }
}
