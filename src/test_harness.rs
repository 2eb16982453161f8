//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::KeyBindings;
use crate::model::LayerKey;
use crate::state::AppState;
use crate::view::{ColorConfig, DiagramStyles, TuiApp, TuiError};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Start the app on an 80x24 terminal without colors.
    pub fn new() -> Result<Self, TuiError> {
        Self::with_size(80, 24)
    }

    /// Start the app on a terminal of the given size.
    pub fn with_size(width: u16, height: u16) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let styles = DiagramStyles::with_color_config(ColorConfig::disabled());
        let mut app = TuiApp::with_terminal(terminal, KeyBindings::default(), styles);
        app.draw()?;

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        self.dispatch(Event::Key(KeyEvent::new(key, mods)));
        !self.running
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Send a left mouse button press at the given screen cell.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.dispatch(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    /// Screen row where the header of `key` is currently drawn.
    pub fn header_row(&mut self, key: LayerKey) -> Option<u16> {
        let collapsed = format!("▶ [{}]", key.number());
        let expanded = format!("▼ [{}]", key.number());
        self.render_to_string_raw()
            .lines()
            .position(|line| line.contains(&collapsed) || line.contains(&expanded))
            .map(|row| row as u16)
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string, dropping empty rows.
    pub fn render_to_string(&mut self) -> String {
        self.redraw();
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    fn render_to_string_raw(&mut self) -> String {
        self.redraw();
        let buffer = self.app.terminal().backend().buffer();
        let area = buffer.area();
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn dispatch(&mut self, event: Event) {
        if !self.running {
            return;
        }
        if self.app.handle_event(event) {
            self.running = false;
            return;
        }
        self.redraw();
    }

    fn redraw(&mut self) {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harness_starts_collapsed() {
        let mut harness = AcceptanceTestHarness::new().unwrap();
        assert!(harness.is_running());
        assert_eq!(harness.state().expanded(), None);

        let screen = harness.render_to_string();
        assert!(screen.contains("Web-based solution for 500+ employees"));
        assert!(!screen.contains("Click to collapse"));
        assert!(screen.contains("Microservices"));
        assert!(screen.contains("Document Storage"));
    }

    #[test]
    fn clicking_presentation_header_shows_its_components() {
        let mut harness = AcceptanceTestHarness::new().unwrap();
        let row = harness.header_row(LayerKey::Presentation).unwrap();

        harness.click_at(10, row);

        assert_eq!(harness.state().expanded(), Some(LayerKey::Presentation));
        let screen = harness.render_to_string();
        for item in [
            "React.js Frontend (Web App)",
            "Responsive Design (Mobile/Tablet/Desktop)",
            "Material-UI Components",
            "Real-time Updates",
            "Multi-language Support (EN/AR)",
        ] {
            assert!(screen.contains(item), "missing {item}");
        }
        assert!(screen.contains("Click to collapse"));
    }

    #[test]
    fn opening_another_layer_closes_the_first() {
        // Tall enough for the data header below the microservices block
        let mut harness = AcceptanceTestHarness::with_size(80, 50).unwrap();
        let presentation = harness.header_row(LayerKey::Presentation).unwrap();
        harness.click_at(10, presentation);

        let data = harness.header_row(LayerKey::Data).unwrap();
        harness.click_at(10, data);

        assert_eq!(harness.state().expanded(), Some(LayerKey::Data));
        let screen = harness.render_to_string();
        assert!(!screen.contains("React.js Frontend (Web App)"));
        assert!(screen.contains("PostgreSQL (Primary Database)"));
    }

    #[test]
    fn second_click_collapses() {
        let mut harness = AcceptanceTestHarness::new().unwrap();
        let row = harness.header_row(LayerKey::Application).unwrap();

        harness.click_at(10, row);
        harness.click_at(10, row);

        assert_eq!(harness.state().expanded(), None);
        assert!(!harness.render_to_string().contains("RESTful API Gateway"));
    }

    #[test]
    fn keyboard_toggle_matches_click() {
        let mut harness = AcceptanceTestHarness::new().unwrap();
        harness.send_keys(&[KeyCode::Tab, KeyCode::Tab, KeyCode::Enter]);

        assert_eq!(harness.state().expanded(), Some(LayerKey::Data));
        assert!(harness.render_to_string().contains("PostgreSQL (Primary Database)"));
    }

    #[test]
    fn quit_stops_processing() {
        let mut harness = AcceptanceTestHarness::new().unwrap();
        assert!(harness.send_key(KeyCode::Char('q')));
        assert!(!harness.is_running());

        harness.send_key(KeyCode::Char('1'));
        assert_eq!(harness.state().expanded(), None);
    }
}
