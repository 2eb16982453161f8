//! Diagram styling configuration.
//!
//! Maps section accents to terminal colors and provides the text styles the
//! document builder and help overlay use.

use crate::model::Accent;
use ratatui::style::{Color, Modifier, Style};

/// Style for secondary text (hints, dismissal notes).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag / `no_color` config key
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved flag and environment.
    ///
    /// Priority (first match wins):
    /// 1. `no_color_flag` (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off, regardless of environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== DiagramStyles =====

/// Text styles for every element of the rendered page.
///
/// With colors disabled every style keeps its modifiers (bold, reversed)
/// and drops foreground/background colors, so structure stays readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramStyles {
    colors: ColorConfig,
}

impl DiagramStyles {
    /// Create styles with an explicit color configuration.
    pub fn with_color_config(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// Whether any color is emitted.
    pub fn colors_enabled(&self) -> bool {
        self.colors.colors_enabled()
    }

    /// Terminal color of an accent (Tailwind 500 shades).
    pub fn accent_color(accent: Accent) -> Color {
        match accent {
            Accent::Blue => Color::Rgb(59, 130, 246),
            Accent::Green => Color::Rgb(34, 197, 94),
            Accent::Purple => Color::Rgb(168, 85, 247),
            Accent::Orange => Color::Rgb(249, 115, 22),
            Accent::Indigo => Color::Rgb(99, 102, 241),
        }
    }

    fn fg(&self, style: Style, color: Color) -> Style {
        if self.colors_enabled() {
            style.fg(color)
        } else {
            style
        }
    }

    /// Page title.
    pub fn title(&self) -> Style {
        self.fg(Style::new().add_modifier(Modifier::BOLD), Color::White)
    }

    /// Line under the page title.
    pub fn subtitle(&self) -> Style {
        self.fg(Style::new(), Color::Gray)
    }

    /// Heading of a non-layer section.
    pub fn section_heading(&self, accent: Accent) -> Style {
        self.fg(
            Style::new().add_modifier(Modifier::BOLD),
            Self::accent_color(accent),
        )
    }

    /// Layer header row. The header under the keyboard cursor is reversed.
    pub fn layer_header(&self, accent: Accent, focused: bool) -> Style {
        let style = self.fg(
            Style::new().add_modifier(Modifier::BOLD),
            Self::accent_color(accent),
        );
        if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    /// Bullet glyph in front of a list entry.
    pub fn bullet(&self, accent: Accent) -> Style {
        self.fg(Style::new(), Self::accent_color(accent))
    }

    /// Sub-heading inside a section (module names, migration columns).
    pub fn subheading(&self) -> Style {
        Style::new().add_modifier(Modifier::BOLD)
    }

    /// Regular body text.
    pub fn body(&self) -> Style {
        Style::new()
    }

    /// Secondary text.
    pub fn muted(&self) -> Style {
        if self.colors_enabled() {
            MUTED_TEXT
        } else {
            Style::new()
        }
    }

    /// Footer status bar.
    pub fn status_bar(&self) -> Style {
        if self.colors_enabled() {
            Style::new().fg(Color::Black).bg(Color::Gray)
        } else {
            Style::new().add_modifier(Modifier::REVERSED)
        }
    }
}

// ===== Tests =====
