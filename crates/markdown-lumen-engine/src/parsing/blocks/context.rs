use crate::parsing::node::Node;

use super::kinds::{OpenFence, OpenHtml, OpenList, OpenQuote};

/// Per-parse state threaded through the block matchers.
///
/// Holds every construct that is still accepting lines. Open containers are
/// owned here and handed to the output when they close, so the output only
/// ever holds finished nodes. At most one construct is open at a time.
#[derive(Default)]
pub struct ScanContext {
    pub fence: Option<OpenFence>,
    pub html: Option<OpenHtml>,
    pub quote: Option<OpenQuote>,
    pub list: Option<OpenList>,
    pub table: Option<Node>,
}

impl ScanContext {
    pub fn is_idle(&self) -> bool {
        self.fence.is_none()
            && self.html.is_none()
            && self.quote.is_none()
            && self.list.is_none()
            && self.table.is_none()
    }

    /// Whether an open construct takes lines verbatim.
    pub fn in_raw_block(&self) -> bool {
        self.fence.is_some() || self.html.is_some()
    }

    /// Closes everything that is open, returning the finished nodes.
    pub fn close_all(&mut self) -> Vec<Node> {
        let mut out = vec![];
        if let Some(quote) = self.quote.take() {
            out.push(quote.finish());
        }
        if let Some(list) = self.list.take() {
            out.push(list.finish());
        }
        if let Some(table) = self.table.take() {
            out.push(table);
        }
        if let Some(fence) = self.fence.take() {
            out.push(fence.finish());
        }
        if let Some(html) = self.html.take() {
            out.push(html.finish());
        }
        out
    }
}
