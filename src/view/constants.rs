//! Layout dimension constants for TUI rendering.

/// Height of the status bar in lines.
///
/// Single line for the expansion state and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width used for one-shot rendering when stdout is not a terminal.
pub const DEFAULT_PRINT_WIDTH: u16 = 80;
