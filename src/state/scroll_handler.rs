//! Vertical scrolling keyboard action handler.
//!
//! Pure functions that transform AppState in response to scroll actions.
//! All offsets are clamped so the last page of the document stays filled.

use crate::model::KeyAction;
use crate::state::AppState;
use crate::view_state::ViewportDimensions;

/// Handle a scroll keyboard action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The scroll action to handle
/// * `document_len` - Number of lines in the rendered document
/// * `viewport` - Size of the area the document is drawn in
///
/// Page actions move by half a viewport. Non-scroll actions only clamp.
pub fn handle_scroll_action(
    mut state: AppState,
    action: KeyAction,
    document_len: usize,
    viewport: ViewportDimensions,
) -> AppState {
    let max = viewport.max_scroll(document_len);
    let page = (viewport.height as usize / 2).max(1);
    let offset = state.scroll.offset.min(max);

    state.scroll.offset = match action {
        KeyAction::ScrollUp => offset.saturating_sub(1),
        KeyAction::ScrollDown => offset.saturating_add(1).min(max),
        KeyAction::PageUp => offset.saturating_sub(page),
        KeyAction::PageDown => offset.saturating_add(page).min(max),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => max,
        _ => offset,
    };

    state
}

/// Scroll by `lines` (negative is up), clamped to the document.
pub fn scroll_by(
    mut state: AppState,
    lines: isize,
    document_len: usize,
    viewport: ViewportDimensions,
) -> AppState {
    let max = viewport.max_scroll(document_len);
    let offset = state.scroll.offset.min(max);
    state.scroll.offset = if lines < 0 {
        offset.saturating_sub(lines.unsigned_abs())
    } else {
        offset.saturating_add(lines as usize).min(max)
    };
    state
}

/// Clamp the offset after the document changed size.
pub fn clamp_scroll(
    mut state: AppState,
    document_len: usize,
    viewport: ViewportDimensions,
) -> AppState {
    state.scroll.offset = state.scroll.offset.min(viewport.max_scroll(document_len));
    state
}

/// Adjust the offset the least amount needed to show `line`.
///
/// When `line` is below the viewport, it becomes the bottom row unless
/// `following` more lines fit too, in which case those are revealed as well
/// (used to show a freshly expanded panel under its header).
pub fn scroll_into_view(
    mut state: AppState,
    line: usize,
    following: usize,
    document_len: usize,
    viewport: ViewportDimensions,
) -> AppState {
    let height = viewport.height as usize;
    let max = viewport.max_scroll(document_len);
    if height == 0 {
        state.scroll.offset = line.min(max);
        return state;
    }

    let offset = state.scroll.offset.min(max);
    let last_wanted = line + following.min(height - 1);
    let target = if line < offset {
        line
    } else if last_wanted >= offset + height {
        (last_wanted + 1 - height).min(line)
    } else {
        offset
    };
    state.scroll.offset = target.min(max);
    state
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
