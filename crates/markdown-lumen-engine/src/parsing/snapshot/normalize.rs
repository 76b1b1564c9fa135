use std::fmt::Write;

use crate::parsing::{
    node::{Node, NodeKind},
    position::Span,
};

/// Renders a tree as one line per node, children indented by two spaces.
///
/// Each line is `kind[payload] line:col-line:col @start..end`. Text payloads
/// are debug-quoted so whitespace stays visible.
pub fn normalize(root: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let _ = writeln!(
        out,
        "{:indent$}{}{} {}",
        "",
        node.kind_name(),
        payload(&node.kind),
        span(&node.span),
        indent = depth * 2
    );
    for child in node.children() {
        write_node(out, child, depth + 1);
    }
}

fn payload(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Heading { depth, .. } => format!("({depth})"),
        NodeKind::List { ordered, .. } => {
            if *ordered {
                "(ordered)".into()
            } else {
                String::new()
            }
        }
        NodeKind::Code { lang, value } => format!("({lang}) {value:?}"),
        NodeKind::Html { value } | NodeKind::Text { value } => format!(" {value:?}"),
        NodeKind::Link { url, title, .. } => match title {
            Some(title) => format!("({url} {title:?})"),
            None => format!("({url})"),
        },
        NodeKind::Image { url, alt, title } => match title {
            Some(title) => format!("({url} {title:?}) {alt:?}"),
            None => format!("({url}) {alt:?}"),
        },
        _ => String::new(),
    }
}

fn span(span: &Span) -> String {
    format!(
        "{}:{}-{}:{} @{}..{}",
        span.start.line,
        span.start.column,
        span.end.line,
        span.end.column,
        span.start.offset,
        span.end.offset
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;

    #[test]
    fn dump_is_indented_by_depth() {
        let dump = normalize(&parse_document("# Hi **there**"));
        insta::assert_snapshot!(dump, @r#"
        root 1:1-1:15 @0..14
          heading(1) 1:1-1:15 @0..14
            text "Hi " 1:3-1:6 @2..5
            bold 1:6-1:15 @5..14
              text "there" 1:8-1:13 @7..12
        "#);
    }
}
