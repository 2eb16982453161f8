//! Core view-state newtypes.

/// Size of the area the document scrolls inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportDimensions {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Largest scroll offset that still fills the viewport with content.
    pub fn max_scroll(self, document_len: usize) -> usize {
        document_len.saturating_sub(self.height as usize)
    }
}
