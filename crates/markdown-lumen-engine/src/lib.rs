pub mod io;
pub mod outline;
pub mod parsing;
pub mod render;


// Re-export key types for easier usage
pub use io::{IoError, read_markdown, write_html};
pub use outline::{OutlineEntry, build_outline, outline_to_text};
pub use parsing::{
    ParsedDoc, Previous,
    incremental::{ChangeRange, ReparseStats, reparse, reparse_with_stats},
    inline::parse_inline,
    node::{Node, NodeKind},
    parse_document, parse_markdown,
    position::{Position, Span},
    sanitize::sanitize_html,
};
pub use render::{
    HtmlRenderer, ImageStore, MemoryImageStore, RenderOptions, render_html, standalone_document,
};
