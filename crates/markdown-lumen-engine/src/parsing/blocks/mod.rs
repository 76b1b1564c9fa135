//! # Block Parsing
//!
//! Line-oriented block parsing driven by an ordered matcher table.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts (trimmed text, indentation, start positions)
//!
//! 2. **Dispatch** (`open`): the line is offered to the matchers in
//!    precedence order (code fence, HTML, heading, blockquote, thematic
//!    break, list, table, paragraph); the first that consumes it wins
//!
//! 3. **Construction** (`builder`): matchers mutate the `Tokenizer`, which
//!    owns the finished blocks and the `ScanContext` of open constructs
//!
//! ## Modules
//!
//! - **`classify`**: `LineClass` for each line
//! - **`context`**: `ScanContext`, the per-parse state shared by matchers
//! - **`kinds`**: one type per block construct with its delimiters and matcher
//! - **`open`**: `MATCHERS`, the precedence table, and `dispatch`
//! - **`builder`**: `Tokenizer` and `tokenize`
//!
//! ## Key Invariants
//!
//! - Top-level blocks are emitted in document order: a matcher that starts a
//!   new block closes whatever is open first
//! - Fenced code and HTML blocks are raw zones: no block/inline parsing inside
//! - Blockquotes nest by running a child `Tokenizer` over the quoted text

pub mod builder;
pub mod classify;
pub mod context;
pub mod kinds;
pub mod open;

pub use builder::{Tokenizer, tokenize};
pub use classify::LineClass;
pub use context::ScanContext;
pub use open::{BlockKind, MATCHERS};
