//! Page document builder.
//!
//! Turns the static [`Diagram`] plus the current expansion state into the
//! full list of styled lines the view scrolls through. Building is pure:
//! the same inputs always yield the same lines and header positions.

use crate::model::{
    Accent, Diagram, FeatureDescriptor, LayerDescriptor, LayerKey, LayerSection, MigrationColumn,
    ServicesDescriptor, TechStackEntry,
};
use crate::state::AppState;
use crate::view::DiagramStyles;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const COLLAPSED_MARKER: &str = "▶";
const EXPANDED_MARKER: &str = "▼";
const EXPAND_HINT: &str = "Click to expand";
const COLLAPSE_HINT: &str = "Click to collapse";
/// Width of the " ▶ [1] " prefix, so static tier titles line up with layer titles.
const TITLE_INDENT: usize = 7;

/// Inputs that vary between renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentParams {
    /// Layer whose detail panel is shown.
    pub expanded: Option<LayerKey>,
    /// Layer header to highlight as the keyboard cursor.
    pub cursor: Option<LayerKey>,
    /// Available width in columns, used for centering and hint alignment.
    pub width: u16,
}

impl DocumentParams {
    pub fn new(expanded: Option<LayerKey>, cursor: Option<LayerKey>, width: u16) -> Self {
        Self {
            expanded,
            cursor,
            width,
        }
    }

    /// Parameters for the interactive view of `state`.
    pub fn from_state(state: &AppState, width: u16) -> Self {
        Self::new(state.expanded(), Some(state.cursor), width)
    }
}

/// Position of a layer header within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRow {
    pub line: usize,
    pub key: LayerKey,
    /// Detail lines drawn right below the header (0 while collapsed).
    pub detail_lines: usize,
}

/// Rendered page: one entry per terminal row, never wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramDocument {
    lines: Vec<Line<'static>>,
    headers: Vec<HeaderRow>,
}

impl DiagramDocument {
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Header rows in display order.
    pub fn headers(&self) -> &[HeaderRow] {
        &self.headers
    }

    /// Header row of `key`.
    pub fn header(&self, key: LayerKey) -> Option<&HeaderRow> {
        self.headers.iter().find(|h| h.key == key)
    }

    /// Line holding the header of `key`.
    pub fn header_line(&self, key: LayerKey) -> Option<usize> {
        self.header(key).map(|h| h.line)
    }

    /// Layer whose header sits on `line`, if any.
    pub fn header_at(&self, line: usize) -> Option<LayerKey> {
        self.headers.iter().find(|h| h.line == line).map(|h| h.key)
    }

    /// Unstyled text, one line per row with trailing spaces trimmed.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                text.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Build the whole page.
pub fn build_document(
    diagram: &Diagram,
    params: &DocumentParams,
    styles: &DiagramStyles,
) -> DiagramDocument {
    let mut builder = DocumentBuilder {
        lines: Vec::new(),
        headers: Vec::new(),
        width: params.width as usize,
        styles,
    };

    builder.centered(diagram.title, styles.title());
    builder.centered(diagram.subtitle, styles.subtitle());
    builder.blank();

    for section in diagram.sections {
        match section {
            LayerSection::Layer(layer) => {
                let expanded = params.expanded == Some(layer.key);
                let focused = params.cursor == Some(layer.key);
                builder.layer(layer, expanded, focused);
            }
            LayerSection::Services(services) => builder.services(services),
        }
        builder.blank();
    }

    builder.features(diagram.features);
    builder.blank();
    builder.migration(diagram.migration_title, diagram.migration);
    builder.blank();
    builder.tech_stack(diagram.tech_stack);
    builder.blank();
    builder.next_steps(diagram.next_steps);

    DiagramDocument {
        lines: builder.lines,
        headers: builder.headers,
    }
}

struct DocumentBuilder<'a> {
    lines: Vec<Line<'static>>,
    headers: Vec<HeaderRow>,
    width: usize,
    styles: &'a DiagramStyles,
}

impl DocumentBuilder<'_> {
    fn push(&mut self, spans: Vec<Span<'static>>) {
        self.lines.push(Line::from(spans));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn centered(&mut self, text: &'static str, style: Style) {
        let pad = self.width.saturating_sub(text.width()) / 2;
        self.push(vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)]);
    }

    fn heading(&mut self, text: &'static str, accent: Accent) {
        let style = self.styles.section_heading(accent);
        self.push(vec![Span::raw(" "), Span::styled(text, style)]);
        let rule = "─".repeat(text.width());
        self.push(vec![Span::raw(" "), Span::styled(rule, self.styles.bullet(accent))]);
    }

    fn bullet(&mut self, indent: usize, glyph: &'static str, accent: Accent, text: &'static str) {
        self.push(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(glyph, self.styles.bullet(accent)),
            Span::raw(" "),
            Span::styled(text, self.styles.body()),
        ]);
    }

    fn layer(&mut self, layer: &LayerDescriptor, expanded: bool, focused: bool) {
        let marker = if expanded {
            EXPANDED_MARKER
        } else {
            COLLAPSED_MARKER
        };
        let hint = if expanded { COLLAPSE_HINT } else { EXPAND_HINT };
        let label = format!(" {marker} [{}] {}", layer.key.number(), layer.title);

        let mut spans = vec![Span::styled(
            label.clone(),
            self.styles.layer_header(layer.accent, focused),
        )];
        // label, at least two spaces, hint, one trailing space
        let needed = label.width() + 2 + hint.width() + 1;
        if needed <= self.width {
            let pad = self.width - label.width() - hint.width() - 1;
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(hint, self.styles.muted()));
        }

        let line = self.lines.len();
        self.push(spans);
        if expanded {
            for &item in layer.items.iter() {
                self.bullet(5, "▪", layer.accent, item);
            }
        }
        self.headers.push(HeaderRow {
            line,
            key: layer.key,
            detail_lines: self.lines.len() - line - 1,
        });
    }

    /// Services have no header row: they are not clickable and always open.
    fn services(&mut self, services: &ServicesDescriptor) {
        self.push(vec![
            Span::raw(" ".repeat(TITLE_INDENT)),
            Span::styled(services.title, self.styles.layer_header(services.accent, false)),
        ]);
        for module in services.modules {
            self.push(vec![
                Span::raw("     "),
                Span::styled(module.name, self.styles.subheading()),
            ]);
            for &feature in module.features.iter() {
                self.bullet(7, "•", services.accent, feature);
            }
        }
    }

    fn features(&mut self, features: &[FeatureDescriptor]) {
        self.heading("Core Features", Accent::Indigo);
        for feature in features {
            self.push(vec![
                Span::raw("   "),
                Span::styled("◆", self.styles.bullet(Accent::Indigo)),
                Span::raw(" "),
                Span::styled(feature.name, self.styles.subheading()),
            ]);
            self.push(vec![
                Span::raw("     "),
                Span::styled(feature.description, self.styles.muted()),
            ]);
        }
    }

    fn migration(&mut self, title: &'static str, columns: &[MigrationColumn]) {
        self.heading(title, Accent::Purple);
        for column in columns {
            self.push(vec![
                Span::raw("   "),
                Span::styled(column.heading, self.styles.subheading()),
            ]);
            for &bullet in column.bullets.iter() {
                self.bullet(5, "•", Accent::Purple, bullet);
            }
        }
    }

    fn tech_stack(&mut self, entries: &[TechStackEntry]) {
        self.heading("Recommended Tech Stack", Accent::Blue);
        for entry in entries {
            let labels = entry.labels.join(" · ");
            self.push(vec![
                Span::raw("   "),
                Span::styled("●", self.styles.bullet(entry.accent)),
                Span::raw(" "),
                Span::styled(format!("{}:", entry.category), self.styles.subheading()),
                Span::raw(" "),
                Span::styled(labels, self.styles.body()),
            ]);
        }
    }

    fn next_steps(&mut self, steps: &[&'static str]) {
        self.heading("Next Steps", Accent::Indigo);
        for (i, &step) in steps.iter().enumerate() {
            self.push(vec![
                Span::raw("   "),
                Span::styled(format!("{}.", i + 1), self.styles.section_heading(Accent::Indigo)),
                Span::raw(" "),
                Span::styled(step, self.styles.body()),
            ]);
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
