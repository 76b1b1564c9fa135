use std::sync::OnceLock;

use regex::Regex;

/// Strips script-capable attributes from raw HTML.
///
/// Removes event handlers (`on*=`), `formaction`/`form` attributes, bare
/// `javascript:`/`data:` tokens and any attribute whose value uses one of the
/// `javascript:`, `vbscript:` or `data:` schemes.
pub fn sanitize_html(html: &str) -> String {
    let mut out = html.to_string();
    for re in patterns() {
        out = re.replace_all(&out, "").into_owned();
    }
    out
}

fn patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r#"(?i)\son\w+\s*=\s*["']?[^"']*["']?"#,
            r#"(?i)\s[\w-]+\s*=\s*(?:"\s*(?:javascript|vbscript|data):[^"]*"|'\s*(?:javascript|vbscript|data):[^']*'|(?:javascript|vbscript|data):[^\s>]*)"#,
            r#"(?i)\s(?:javascript|data):[^\s>]*"#,
            r#"(?i)\sformaction\s*=\s*["']?[^"']*["']?"#,
            r#"(?i)\sform\s*=\s*["']?[^"']*["']?"#,
        ]
        .into_iter()
        .map(|p| Regex::new(p).expect("Invalid sanitizer regex"))
        .collect()
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(r#"<div onclick="alert(1)">x</div>"#, "<div>x</div>")]
    #[case(r#"<img src=x ONERROR='boom()'/>"#, "<img src=x/>")]
    #[case(r#"<a href="javascript:alert(1)">x</a>"#, "<a>x</a>")]
    #[case(r#"<iframe src='data:text/html;base64,AAAA'></iframe>"#, "<iframe></iframe>")]
    #[case(r#"<button formaction="/steal">go</button>"#, "<button>go</button>")]
    #[case(r#"<input form="other" name="q">"#, r#"<input name="q">"#)]
    fn strips_dangerous_attributes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_html(input), expected);
    }

    #[test]
    fn keeps_safe_markup_and_anchors() {
        let html = r#"<div data-line="3" class="note"><a href="https://x.dev">x</a></div>"#;
        assert_eq!(sanitize_html(html), html);
    }
}
