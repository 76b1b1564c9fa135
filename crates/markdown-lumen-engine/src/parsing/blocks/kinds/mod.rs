//! # Block Kinds
//!
//! One module per block construct. Each owns its delimiters, a `matches`
//! predicate over a classified line and a `consume` matcher that mutates the
//! tokenizer. Constructs that span several lines also own their open state.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod html_block;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::{BlockQuote, OpenQuote};
pub use code_fence::{CodeFence, OpenFence};
pub use heading::Heading;
pub use html_block::{HtmlBlock, OpenHtml};
pub use list::{List, OpenList};
pub use paragraph::Paragraph;
pub use table::Table;
pub use thematic_break::ThematicBreak;
