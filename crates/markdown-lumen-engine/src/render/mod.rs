//! AST to HTML.
//!
//! Every block element carries `data-line` with the 1-based line its node
//! starts on, so a preview can be mapped back to the source.

pub mod export;
pub mod highlight;
pub mod images;

use std::fmt::{self, Write};

use crate::parsing::node::{Node, NodeKind};

pub use export::standalone_document;
pub use highlight::{HighlightedCode, PLAINTEXT, highlight_code};
pub use images::{ImageStore, MemoryImageStore, resolve_image_url};

/// Reference prefix marking image URLs that live in an [`ImageStore`].
pub const DEFAULT_IMAGE_REF_PREFIX: &str = "lumen-image://";
pub const DEFAULT_CLASS_PREFIX: &str = "lumen";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix of every generated CSS class (`{prefix}-h1`, ...).
    pub class_prefix: String,
    pub highlight: bool,
    /// Give headings `id="<data-line>"` for outline links.
    pub heading_ids: bool,
    pub link_target_blank: bool,
    pub image_ref_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            highlight: true,
            heading_ids: true,
            link_target_blank: true,
            image_ref_prefix: DEFAULT_IMAGE_REF_PREFIX.to_string(),
        }
    }
}

/// Renders a tree with default options and no image store.
pub fn render_html(node: &Node) -> String {
    HtmlRenderer::new(RenderOptions::default()).render(node)
}

pub struct HtmlRenderer<'a> {
    opts: RenderOptions,
    images: Option<&'a dyn ImageStore>,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, images: None }
    }

    pub fn with_images(mut self, store: &'a dyn ImageStore) -> Self {
        self.images = Some(store);
        self
    }

    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_node(&mut out, node);
        out
    }

    /// Renders a whole document including `<html>` and `<head>`.
    pub fn render_standalone(&self, title: &str, root: &Node, css: Option<&str>) -> String {
        standalone_document(title, &self.render(root), css, &self.opts.class_prefix)
    }

    fn write_children(&self, out: &mut String, node: &Node) -> fmt::Result {
        for child in node.children() {
            self.write_node(out, child)?;
        }
        Ok(())
    }

    fn write_node(&self, out: &mut String, node: &Node) -> fmt::Result {
        let p = &self.opts.class_prefix;
        let line = node.span.start.line;
        match &node.kind {
            NodeKind::Root { children } => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    self.write_node(out, child)?;
                }
                Ok(())
            }
            NodeKind::Heading { depth, .. } => {
                if !(1..=6).contains(depth) {
                    return Ok(());
                }
                write!(out, "<h{depth} class=\"{p}-h{depth}\" data-line=\"{line}\"")?;
                if self.opts.heading_ids {
                    write!(out, " id=\"{line}\"")?;
                }
                out.push('>');
                self.write_children(out, node)?;
                write!(out, "</h{depth}>")
            }
            NodeKind::Paragraph { .. } => {
                write!(out, "<p data-line=\"{line}\">")?;
                self.write_children(out, node)?;
                write!(out, "</p>")
            }
            NodeKind::Blockquote { .. } => {
                write!(out, "<blockquote class=\"{p}-blockquote\" data-line=\"{line}\">")?;
                self.write_children(out, node)?;
                write!(out, "</blockquote>")
            }
            NodeKind::List { ordered, .. } => {
                let tag = if *ordered { "ol" } else { "ul" };
                write!(out, "<{tag} class=\"{p}-{tag}\" data-line=\"{line}\">")?;
                self.write_children(out, node)?;
                write!(out, "</{tag}>")
            }
            NodeKind::ListItem { .. } => {
                write!(out, "<li class=\"{p}-li\" data-line=\"{line}\">")?;
                self.write_children(out, node)?;
                write!(out, "</li>")
            }
            NodeKind::Table { .. } => {
                write!(out, "<table class=\"{p}-table\" data-line=\"{line}\">")?;
                self.write_children(out, node)?;
                write!(out, "</table>")
            }
            NodeKind::TableRow { .. } => {
                write!(out, "<tr class=\"{p}-tr\" data-line=\"{line}\">")?;
                self.write_children(out, node)?;
                write!(out, "</tr>")
            }
            NodeKind::TableCell { .. } => {
                write!(out, "<td class=\"{p}-td\">")?;
                self.write_children(out, node)?;
                write!(out, "</td>")
            }
            NodeKind::ThematicBreak => {
                write!(out, "<hr class=\"{p}-hr\" data-line=\"{line}\" />")
            }
            NodeKind::Code { lang, value } => {
                let code = highlight_code(value, lang, self.opts.highlight);
                let lang = html_escape::encode_text(&code.lang);
                write!(
                    out,
                    "<div class=\"{p}-code-container\" data-line=\"{line}\">\
                     <div class=\"{p}-code-header\"><div class=\"{p}-code-icon\">\
                     <span></span><span></span><span></span></div>\
                     <div class=\"{p}-code-right\">{lang}</div></div>\
                     <pre><code class=\"language-{lang}\">{}</code></pre></div>",
                    code.html
                )
            }
            NodeKind::Html { value } => write!(out, "{value}"),
            NodeKind::Text { value } => write!(out, "{}", escape_angles(value)),
            NodeKind::Bold { .. } => self.wrap(out, node, &format!("strong class=\"{p}-bold\""), "strong"),
            NodeKind::Italic { .. } => self.wrap(out, node, "em", "em"),
            NodeKind::Underline { .. } => self.wrap(out, node, "u", "u"),
            NodeKind::Delete { .. } => self.wrap(out, node, "del", "del"),
            NodeKind::Link { url, title, .. } => {
                write!(
                    out,
                    "<a href=\"{}\" class=\"{p}-link\"",
                    html_escape::encode_double_quoted_attribute(safe_href(url))
                )?;
                if let Some(title) = title {
                    write!(
                        out,
                        " title=\"{}\"",
                        html_escape::encode_double_quoted_attribute(title)
                    )?;
                }
                if self.opts.link_target_blank {
                    out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
                }
                out.push('>');
                self.write_children(out, node)?;
                write!(out, "</a>")
            }
            NodeKind::Image { url, alt, title } => {
                let src = resolve_image_url(url, &self.opts.image_ref_prefix, self.images);
                write!(
                    out,
                    "<img src=\"{}\" alt=\"{}\" class=\"{p}-image\"",
                    html_escape::encode_double_quoted_attribute(&src),
                    html_escape::encode_double_quoted_attribute(alt)
                )?;
                if let Some(title) = title {
                    write!(
                        out,
                        " title=\"{}\"",
                        html_escape::encode_double_quoted_attribute(title)
                    )?;
                }
                write!(out, " />")
            }
            NodeKind::InlineCode { .. } => write!(
                out,
                "<code class=\"{p}-inline-code\">{}</code>",
                escape_angles(&node.plain_text())
            ),
        }
    }

    fn wrap(&self, out: &mut String, node: &Node, open: &str, close: &str) -> fmt::Result {
        write!(out, "<{open}>")?;
        self.write_children(out, node)?;
        write!(out, "</{close}>")
    }
}

/// Text escaping: only `<` and `>`.
fn escape_angles(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}

/// Link target, or `#` for script-capable schemes.
fn safe_href(url: &str) -> &str {
    let scheme = url.trim_start().to_ascii_lowercase();
    if ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|s| scheme.starts_with(s))
    {
        "#"
    } else {
        url
    }
}
