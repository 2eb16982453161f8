//! Application state (pure).

use crate::model::LayerKey;

// ===== DiagramState =====

/// Which layer section, if any, shows its detail panel.
///
/// `toggle` is the only mutator, so at most one section is ever expanded
/// and a fresh value always starts with nothing expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagramState {
    expanded: Option<LayerKey>,
}

impl DiagramState {
    /// Nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Close `key` if it is open, otherwise open it (closing any other).
    pub fn toggle(&mut self, key: LayerKey) {
        self.expanded = if self.expanded == Some(key) {
            None
        } else {
            Some(key)
        };
    }

    /// The currently expanded layer.
    pub fn expanded(&self) -> Option<LayerKey> {
        self.expanded
    }

    /// Whether `key` currently shows its detail panel.
    pub fn is_expanded(&self, key: LayerKey) -> bool {
        self.expanded == Some(key)
    }
}

// ===== ScrollState =====

/// Vertical scroll position of the page, in document lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
}

// ===== AppState =====

/// Everything the view renders from, besides the static diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Expansion state of the layer sections.
    pub diagram: DiagramState,
    /// Layer header that keyboard toggles apply to.
    pub cursor: LayerKey,
    /// Page scroll position.
    pub scroll: ScrollState,
    /// Whether the key binding overlay is shown.
    pub help_visible: bool,
    /// Scroll position inside the help overlay.
    pub help_scroll_offset: u16,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            diagram: DiagramState::new(),
            cursor: LayerKey::Presentation,
            scroll: ScrollState::default(),
            help_visible: false,
            help_scroll_offset: 0,
        }
    }

    /// Shorthand for `self.diagram.expanded()`.
    pub fn expanded(&self) -> Option<LayerKey> {
        self.diagram.expanded()
    }

    /// Show the help overlay if hidden, hide it if shown.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.help_scroll_offset = 0;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
