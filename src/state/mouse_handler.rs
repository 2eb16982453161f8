//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse events.
//! Coordinates are resolved to layer headers by
//! [`crate::view_state::hit_test`] before they reach this module.

use crate::state::expand_handler::handle_header_click;
use crate::state::scroll_handler::scroll_by;
use crate::state::AppState;
use crate::view_state::{HitTestResult, ViewportDimensions};

/// Lines moved per mouse wheel notch.
pub const WHEEL_SCROLL_LINES: isize = 3;

/// Direction of a mouse wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Handle a left-button press that was hit-tested against the document.
///
/// A header hit toggles that layer; anything else leaves the state alone.
pub fn handle_click(state: AppState, hit: HitTestResult) -> AppState {
    match hit {
        HitTestResult::Header(key) => handle_header_click(state, key),
        HitTestResult::Miss => state,
    }
}

/// Handle a wheel notch by scrolling the page.
pub fn handle_wheel(
    state: AppState,
    direction: WheelDirection,
    document_len: usize,
    viewport: ViewportDimensions,
) -> AppState {
    let lines = match direction {
        WheelDirection::Up => -WHEEL_SCROLL_LINES,
        WheelDirection::Down => WHEEL_SCROLL_LINES,
    };
    scroll_by(state, lines, document_len, viewport)
}

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
