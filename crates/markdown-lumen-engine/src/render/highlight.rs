use std::sync::LazyLock;

use log::warn;
use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Language name used when a fence names no language or an unknown one.
pub const PLAINTEXT: &str = "plaintext";

/// Highlighted code body and the language it was highlighted as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedCode {
    pub lang: String,
    /// HTML for the inside of `<code>`.
    pub html: String,
}

fn find_syntax(lang: &str) -> Option<&'static SyntaxReference> {
    if lang.is_empty() || lang.eq_ignore_ascii_case(PLAINTEXT) {
        return None;
    }
    SYNTAX_SET.find_syntax_by_token(lang)
}

/// Highlights `code` with CSS classes (`ClassStyle::Spaced`).
///
/// Unknown languages, disabled highlighting and highlighter errors all
/// produce escaped plain text.
pub fn highlight_code(code: &str, lang: &str, enabled: bool) -> HighlightedCode {
    let plain = |lang: &str| HighlightedCode {
        lang: lang.to_string(),
        html: html_escape::encode_text(code).into_owned(),
    };
    let Some(syntax) = find_syntax(lang) else {
        return plain(PLAINTEXT);
    };
    if !enabled {
        return plain(lang);
    }
    match classed_html(code, syntax) {
        Ok(html) => HighlightedCode {
            lang: lang.to_string(),
            html,
        },
        Err(e) => {
            warn!("highlighting {lang} failed, rendering plain: {e}");
            plain(lang)
        }
    }
}

fn classed_html(code: &str, syntax: &SyntaxReference) -> Result<String, syntect::Error> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(generator.finalize())
}
