//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod expand_handler;
pub mod mouse_handler;
pub mod scroll_handler;

// Re-export for convenience
pub use app_state::{AppState, DiagramState, ScrollState};
pub use expand_handler::{handle_expand_action, handle_header_click};
pub use mouse_handler::{handle_click, handle_wheel, WheelDirection};
pub use scroll_handler::{clamp_scroll, handle_scroll_action, scroll_into_view};
