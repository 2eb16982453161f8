//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::MUTED_TEXT;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Shortcut groups shown in the overlay: (category, [(keys, description)]).
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Layers",
        &[
            ("Tab", "Next layer header"),
            ("Shift+Tab", "Previous layer header"),
            ("Enter/Space", "Expand/collapse selected layer"),
            ("1-3", "Expand/collapse layer by number"),
            ("Esc", "Collapse open layer"),
            ("Click", "Expand/collapse clicked layer"),
        ],
    ),
    (
        "Navigation",
        &[
            ("j/↓", "Scroll down"),
            ("k/↑", "Scroll up"),
            ("Ctrl+d/PgDn", "Half page down"),
            ("Ctrl+u/PgUp", "Half page up"),
            ("g/Home", "Go to top"),
            ("G/End", "Go to bottom"),
            ("Wheel", "Scroll"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Number of lines the overlay content occupies.
pub fn help_content_height() -> u16 {
    build_help_content().len() as u16
}

/// Render the help overlay centered on the screen.
///
/// The scroll_offset parameter controls which line is shown at the top.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Rows of the popup available for content (inside the borders).
pub fn help_viewport_height(area: Rect) -> u16 {
    centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area)
        .height
        .saturating_sub(2)
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    // Widen before multiplying: u16 overflows past ~1092 columns
    let popup_width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let popup_height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let category_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = Vec::new();
    for (i, (category, shortcuts)) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<13} "), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}
