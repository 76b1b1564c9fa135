use std::sync::OnceLock;

use regex::Regex;

use super::{InlineKind, InlineMatch};

/// Links `[text](url)` and images `![alt](url)`, both with an optional
/// `"title"` after the destination.
pub struct Link;

impl Link {
    pub const IMAGE_BANG: u8 = b'!';

    pub fn find_image(s: &str, from: usize) -> Option<InlineMatch> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN
            .get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"));
        let caps = re.captures_at(s, from)?;
        Some(InlineMatch {
            kind: InlineKind::Image,
            full: caps.get(0)?.range(),
            inner: caps.get(1)?.range(),
            target: Some(caps.get(2)?.range()),
        })
    }

    /// Finds a link that is not the tail of an image.
    pub fn find_link(s: &str, from: usize) -> Option<InlineMatch> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex")
        });

        let mut at = from;
        while let Some(caps) = re.captures_at(s, at) {
            let full = caps.get(0)?;
            if full.start() > 0 && s.as_bytes()[full.start() - 1] == Self::IMAGE_BANG {
                at = full.start() + 1;
                continue;
            }
            return Some(InlineMatch {
                kind: InlineKind::Link,
                full: full.range(),
                inner: caps.get(1)?.range(),
                target: Some(caps.get(2)?.range()),
            });
        }
        None
    }

    /// Splits `url "title"` into its parts. The url is trimmed.
    pub fn split_target(target: &str) -> (String, Option<String>) {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r#"^(\S+)\s+"(.*)"$"#).expect("Invalid link title regex")
        });

        let target = target.trim();
        match re.captures(target) {
            Some(caps) => (caps[1].to_string(), Some(caps[2].to_string())),
            None => (target.to_string(), None),
        }
    }
}
