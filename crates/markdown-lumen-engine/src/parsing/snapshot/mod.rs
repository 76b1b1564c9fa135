//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a tree as a stable indented dump for `insta`
//!   string snapshots
//! - **`invariants`**: Runtime checks for parser correctness (positions agree
//!   with the source text, children lie inside their parents, siblings are
//!   ordered)
//!
//! Parsing behavior is pinned by snapshot tests rather than a separate formal
//! grammar. Snapshots show node kinds, key payload fields and positions.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
