//! Layer expand/collapse action handler.
//!
//! Pure functions that transform AppState in response to header actions.
//! Every change to the expansion state goes through `DiagramState::toggle`.

use crate::model::{KeyAction, LayerKey};
use crate::state::AppState;

/// Handle a layer header keyboard action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The header action to handle
///
/// Returns a new AppState with the action applied. Actions that are not
/// header actions leave the state unchanged.
///
/// # Behavior
/// - `ToggleFocused` toggles the layer under the header cursor
/// - `ToggleLayer(k)` moves the cursor to `k` and toggles it
/// - `CollapseOpen` toggles the open layer, if any, closing it
/// - `NextLayer` / `PrevLayer` move the cursor without toggling
pub fn handle_expand_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::ToggleFocused => {
            let key = state.cursor;
            state.diagram.toggle(key);
        }
        KeyAction::ToggleLayer(key) => {
            state.cursor = key;
            state.diagram.toggle(key);
        }
        KeyAction::CollapseOpen => {
            if let Some(open) = state.diagram.expanded() {
                state.diagram.toggle(open);
            }
        }
        KeyAction::NextLayer => {
            state.cursor = state.cursor.next();
        }
        KeyAction::PrevLayer => {
            state.cursor = state.cursor.prev();
        }
        _ => {}
    }

    state
}

/// Handle a click on the header of `key`.
///
/// Same transition as `ToggleLayer(key)`: the cursor follows the click so
/// keyboard and mouse stay in sync.
pub fn handle_header_click(state: AppState, key: LayerKey) -> AppState {
    handle_expand_action(state, KeyAction::ToggleLayer(key))
}

// ===== Tests =====

#[cfg(test)]
#[path = "expand_handler_tests.rs"]
mod tests;
