use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::{builder::Tokenizer, classify::LineClass},
    node::{Node, NodeKind},
    position::{Position, Span},
    sanitize::sanitize_html,
};

/// Raw HTML blocks.
///
/// Void and self-closing tags are single-line blocks, as is an opening line
/// that already holds its own closing tag. Any other opening tag buffers
/// lines until a line ends with the matching closing tag. The first
/// tag gets a `data-line` anchor and the stored value is always sanitized.
pub struct HtmlBlock;

impl HtmlBlock {
    pub const DATA_LINE: &'static str = "data-line";
    pub const VOID_ELEMENTS: [&'static str; 14] = [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ];

    /// Tag name of a non-self-closing opening tag at the start of the line.
    pub fn open_tag(trimmed: &str) -> Option<&str> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"^<([a-zA-Z][a-zA-Z0-9]*)[^>]*>").expect("Invalid html open regex")
        });
        let caps = re.captures(trimmed)?;
        if caps.get(0)?.as_str().ends_with("/>") {
            return None;
        }
        Some(caps.get(1)?.as_str())
    }

    /// Tag name when the whole line is one self-closing tag.
    pub fn self_closing_tag(trimmed: &str) -> Option<&str> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"^<([a-zA-Z][a-zA-Z0-9]*)[^>]*/>$").expect("Invalid html self-closing regex")
        });
        Some(re.captures(trimmed)?.get(1)?.as_str())
    }

    /// Whether the line ends with the closing tag for `tag`.
    pub fn closes(trimmed: &str, tag: &str) -> bool {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"</([a-zA-Z][a-zA-Z0-9]*)>$").expect("Invalid html close regex")
        });
        re.captures(trimmed)
            .and_then(|caps| caps.get(1))
            .is_some_and(|name| name.as_str().eq_ignore_ascii_case(tag))
    }

    /// Whether `</tag` appears anywhere in the line, ignoring case.
    pub fn contains_close(trimmed: &str, tag: &str) -> bool {
        let line = trimmed.to_ascii_lowercase();
        let needle = format!("</{}", tag.to_ascii_lowercase());
        line.match_indices(&needle).any(|(at, _)| {
            !line[at + needle.len()..]
                .starts_with(|c: char| c.is_ascii_alphanumeric())
        })
    }

    pub fn is_void(tag: &str) -> bool {
        Self::VOID_ELEMENTS
            .iter()
            .any(|v| v.eq_ignore_ascii_case(tag))
    }

    pub fn matches(line: &LineClass<'_>) -> bool {
        Self::self_closing_tag(line.trimmed).is_some() || Self::open_tag(line.trimmed).is_some()
    }

    /// Inserts the anchor attribute right after the tag name of the first tag.
    pub fn with_anchor(trimmed: &str, tag: &str, line: usize) -> String {
        let at = 1 + tag.len();
        format!(
            "{} {}=\"{line}\"{}",
            &trimmed[..at],
            Self::DATA_LINE,
            &trimmed[at..]
        )
    }

    pub fn consume(tok: &mut Tokenizer, line: &LineClass<'_>) -> bool {
        if let Some(open) = tok.ctx.html.as_mut() {
            open.value.push('\n');
            open.value.push_str(line.raw);
            open.end = line.end();
            if Self::closes(line.trimmed, &open.tag)
                && let Some(open) = tok.ctx.html.take()
            {
                tok.out.push(open.finish());
            }
            return true;
        }

        let tag = match Self::self_closing_tag(line.trimmed) {
            Some(tag) => tag,
            None => match Self::open_tag(line.trimmed) {
                Some(tag) => tag,
                None => return false,
            },
        };
        let open = OpenHtml {
            tag: tag.to_ascii_lowercase(),
            value: Self::with_anchor(line.trimmed, tag, line.start.line),
            start: line.content_start,
            end: line.end(),
        };
        let single_line = line.trimmed.ends_with("/>")
            || Self::is_void(tag)
            || Self::contains_close(line.trimmed, tag);
        if single_line {
            tok.push_block(open.finish());
        } else {
            tok.close_open();
            tok.ctx.html = Some(open);
        }
        true
    }
}

/// An HTML block waiting for its closing tag.
#[derive(Debug)]
pub struct OpenHtml {
    pub tag: String,
    pub value: String,
    pub start: Position,
    pub end: Position,
}

impl OpenHtml {
    pub fn finish(self) -> Node {
        Node::new(
            Span::new(self.start, self.end),
            NodeKind::Html {
                value: sanitize_html(&self.value),
            },
        )
    }
}
