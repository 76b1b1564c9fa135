//! # Inline Parsing
//!
//! Leftmost-match inline scanning with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over one line of
//! text at a time (heading text, a paragraph line, a list item's content, a
//! table cell).
//!
//! ## Modules
//!
//! - **`kinds`**: Inline kinds with owned delimiters and patterns
//! - **`cursor`**: `Cursor` over a text span with absolute position tracking
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Raw Zone Precedence
//!
//! Code spans are leaves: `` `**x**` `` parses as inline code holding the
//! literal text `**x**`.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
