//! Screen layout rendering.
//!
//! Splits the frame into the scrolling page and the status bar, and draws
//! both from an already built document.

use super::constants::STATUS_BAR_HEIGHT;
use super::DiagramStyles;
use crate::state::AppState;
use crate::view_state::DiagramDocument;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Where the page document is drawn.
    pub content: Rect,
    /// Bottom status line.
    pub status: Rect,
}

/// Split `area` into page and status bar.
pub fn split_screen(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Page
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    ScreenLayout {
        content: chunks[0],
        status: chunks[1],
    }
}

/// Draw the visible window of the document and the status bar.
///
/// Lines are sliced rather than wrapped so that each document line maps to
/// exactly one screen row, which hit-testing relies on.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    document: &DiagramDocument,
    styles: &DiagramStyles,
) {
    let layout = split_screen(frame.area());

    let start = state.scroll.offset.min(document.len());
    let visible: Vec<Line<'static>> = document.lines()[start..]
        .iter()
        .take(layout.content.height as usize)
        .cloned()
        .collect();
    frame.render_widget(Paragraph::new(visible), layout.content);

    let max_scroll = document
        .len()
        .saturating_sub(layout.content.height as usize);
    render_status_bar(frame, layout.status, state, max_scroll, styles);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    max_scroll: usize,
    styles: &DiagramStyles,
) {
    let expanded = state.expanded().map_or("none", |key| key.as_str());
    let percent = if max_scroll == 0 {
        100
    } else {
        (state.scroll.offset * 100 / max_scroll).min(100)
    };

    let text = format!(
        " expanded: {expanded} │ {percent:>3}% │ Tab/Enter toggle · 1-3 layers · j/k scroll · ? help · q quit"
    );
    let bar = Paragraph::new(Line::from(vec![Span::raw(text)])).style(styles.status_bar());
    frame.render_widget(bar, area);
}
