//! Domain-level keyboard actions independent of key bindings.

use super::LayerKey;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the page up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the page down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by half a viewport. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by half a viewport. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the page header. Default: g/Home
    ScrollToTop,
    /// Jump to the last section. Default: G/End
    ScrollToBottom,

    // Layer headers
    /// Move the header cursor to the next layer. Default: Tab
    NextLayer,
    /// Move the header cursor to the previous layer. Default: Shift+Tab
    PrevLayer,
    /// Toggle the layer under the header cursor. Default: Enter/Space
    ToggleFocused,
    /// Toggle a specific layer and move the cursor to it. Default: 1-3
    ToggleLayer(LayerKey),
    /// Close whichever panel is open. Default: Esc
    CollapseOpen,

    // Application
    /// Show or hide the key binding overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action is one of the page scrolling actions.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
