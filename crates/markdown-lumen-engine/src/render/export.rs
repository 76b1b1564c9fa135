/// Wraps rendered body HTML in a complete HTML document.
///
/// The title is escaped; `css` becomes an inline `<style>` element.
pub fn standalone_document(title: &str, body: &str, css: Option<&str>, class_prefix: &str) -> String {
    let style = css
        .map(|css| format!("<style>\n{css}\n</style>\n"))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         {style}\
         </head>\n\
         <body>\n\
         <article class=\"{prefix}-preview\">\n\
         {body}\n\
         </article>\n\
         </body>\n\
         </html>\n",
        title = html_escape::encode_text(title),
        prefix = html_escape::encode_double_quoted_attribute(class_prefix),
    )
}
