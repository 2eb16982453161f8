//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod styles;

pub use help::render_help_overlay;
pub use layout::{render_layout, split_screen, ScreenLayout};
pub use styles::{ColorConfig, DiagramStyles, MUTED_TEXT};

use crate::config::KeyBindings;
use crate::model::{diagram, Diagram, KeyAction, LayerKey};
use crate::state::{
    clamp_scroll, handle_click, handle_expand_action, handle_scroll_action, handle_wheel,
    scroll_into_view, AppState, WheelDirection,
};
use crate::view_state::{build_document, hit_test, DiagramDocument, DocumentParams, ViewportDimensions};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: DiagramStyles,
    diagram: &'static Diagram,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, and captures the
    /// mouse when `mouse` is set.
    pub fn new(styles: DiagramStyles, mouse: bool) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        if mouse {
            stdout.execute(EnableMouseCapture)?;
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, KeyBindings::default(), styles))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an app over an existing terminal, starting with nothing expanded.
    pub fn with_terminal(terminal: Terminal<B>, key_bindings: KeyBindings, styles: DiagramStyles) -> Self {
        Self {
            terminal,
            app_state: AppState::new(),
            key_bindings,
            styles,
            diagram: diagram(),
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal (inspect the backend buffer in tests).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal events and
    /// redraws after each one; nothing happens between events.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let event = event::read()?;
            if self.handle_event(event) {
                info!("Quit requested");
                return Ok(());
            }
            self.draw()?;
        }
    }

    /// Apply one terminal event to the state.
    ///
    /// Returns true if app should quit. Does not redraw.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            Event::Resize(width, height) => {
                self.handle_resize(width, height);
                false
            }
            _ => false,
        }
    }

    /// Render the current state.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let layout = split_screen(self.screen_area());
        let document = self.document(layout.content.width);
        let state = &self.app_state;
        let styles = &self.styles;

        self.terminal.draw(|frame| {
            render_layout(frame, state, &document, styles);
            if state.help_visible {
                render_help_overlay(frame, state.help_scroll_offset);
            }
        })?;

        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false; // Unknown key, ignore
        };
        debug!(?action, "Key action");

        // The help overlay swallows everything except closing, quitting
        // and scrolling its own content.
        if self.app_state.help_visible {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help | KeyAction::CollapseOpen => self.app_state.toggle_help(),
                action if action.is_scroll() => self.scroll_help(action),
                _ => {}
            }
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            action if action.is_scroll() => {
                let (document, viewport) = self.page();
                let state = std::mem::take(&mut self.app_state);
                self.app_state = handle_scroll_action(state, action, document.len(), viewport);
            }
            KeyAction::ToggleFocused
            | KeyAction::ToggleLayer(_)
            | KeyAction::CollapseOpen
            | KeyAction::NextLayer
            | KeyAction::PrevLayer => self.apply_header_action(action),
            _ => {}
        }

        false
    }

    /// Apply a header action and bring the cursor's header into view.
    fn apply_header_action(&mut self, action: KeyAction) {
        let before = self.app_state.expanded();
        let state = std::mem::take(&mut self.app_state);
        self.app_state = handle_expand_action(state, action);
        self.log_expansion_change(before);

        let (document, viewport) = self.page();
        let cursor = self.app_state.cursor;
        let state = std::mem::take(&mut self.app_state);
        self.app_state = match document.header(cursor) {
            Some(row) => scroll_into_view(state, row.line, row.detail_lines, document.len(), viewport),
            None => clamp_scroll(state, document.len(), viewport),
        };
    }

    /// Handle a mouse event: left click toggles a header, wheel scrolls.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            return;
        }

        let direction = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.click(mouse.column, mouse.row);
                return;
            }
            MouseEventKind::ScrollUp => WheelDirection::Up,
            MouseEventKind::ScrollDown => WheelDirection::Down,
            _ => return,
        };

        let (document, viewport) = self.page();
        let state = std::mem::take(&mut self.app_state);
        self.app_state = handle_wheel(state, direction, document.len(), viewport);
    }

    /// Toggle the layer whose header is under the pointer.
    fn click(&mut self, column: u16, row: u16) {
        let layout = split_screen(self.screen_area());
        let document = self.document(layout.content.width);
        let hit = hit_test(
            &document,
            layout.content,
            self.app_state.scroll.offset,
            column,
            row,
        );
        debug!(?hit, column, row, "Mouse click");
        if !hit.is_hit() {
            return;
        }

        let before = self.app_state.expanded();
        let state = std::mem::take(&mut self.app_state);
        self.app_state = handle_click(state, hit);
        self.log_expansion_change(before);

        let (document, viewport) = self.page();
        let state = std::mem::take(&mut self.app_state);
        self.app_state = clamp_scroll(state, document.len(), viewport);
    }

    /// Re-clamp scrolling for the new terminal size.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized");
        let layout = split_screen(Rect::new(0, 0, width, height));
        let document = self.document(layout.content.width);
        let viewport = ViewportDimensions::new(layout.content.width, layout.content.height);
        let state = std::mem::take(&mut self.app_state);
        self.app_state = clamp_scroll(state, document.len(), viewport);
    }

    fn scroll_help(&mut self, action: KeyAction) {
        let visible = help::help_viewport_height(self.screen_area());
        let max = help::help_content_height().saturating_sub(visible);
        let half = (visible / 2).max(1);
        let offset = self.app_state.help_scroll_offset;

        self.app_state.help_scroll_offset = match action {
            KeyAction::ScrollUp => offset.saturating_sub(1),
            KeyAction::ScrollDown => offset.saturating_add(1).min(max),
            KeyAction::PageUp => offset.saturating_sub(half),
            KeyAction::PageDown => offset.saturating_add(half).min(max),
            KeyAction::ScrollToTop => 0,
            KeyAction::ScrollToBottom => max,
            _ => offset,
        };
    }

    fn log_expansion_change(&self, before: Option<LayerKey>) {
        let after = self.app_state.expanded();
        if before != after {
            debug!(?before, ?after, "Expanded layer changed");
        }
    }

    fn screen_area(&self) -> Rect {
        match self.terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width, size.height),
            Err(_) => Rect::new(0, 0, constants::DEFAULT_PRINT_WIDTH, 24),
        }
    }

    fn document(&self, width: u16) -> DiagramDocument {
        build_document(
            self.diagram,
            &DocumentParams::from_state(&self.app_state, width),
            &self.styles,
        )
    }

    /// Document for the current state and the viewport it scrolls in.
    fn page(&self) -> (DiagramDocument, ViewportDimensions) {
        let layout = split_screen(self.screen_area());
        let document = self.document(layout.content.width);
        let viewport = ViewportDimensions::new(layout.content.width, layout.content.height);
        (document, viewport)
    }
}

/// Render the page once as plain text, without touching the terminal.
///
/// `expanded` opens one layer for this rendering only.
pub fn render_plain(expanded: Option<LayerKey>, width: u16) -> String {
    let styles = DiagramStyles::with_color_config(ColorConfig::disabled());
    let document = build_document(diagram(), &DocumentParams::new(expanded, None, width), &styles);
    document.plain_text()
}

/// Initialize and run the interactive TUI
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when setup or the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_interactive(styles: DiagramStyles, mouse: bool) -> Result<(), TuiError> {
    info!(colors = styles.colors_enabled(), mouse, "Starting interactive view");

    let result = TuiApp::new(styles, mouse).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal(mouse)?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal(mouse: bool) -> Result<(), TuiError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse {
        stdout.execute(DisableMouseCapture)?;
    }
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
