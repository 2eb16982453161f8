//! Acceptance tests for expanding and collapsing layer sections.
//!
//! Drives the real application through a TestBackend terminal with mouse
//! and keyboard events, and checks what ends up on screen:
//! 1. Initial load shows every layer collapsed
//! 2. Clicking a header shows its items, clicking again hides them
//! 3. Opening a different layer closes the previous one
//! 4. Static sections, the microservices block included, render regardless
//!    of expansion

use archview::config::KeyBindings;
use archview::model::LayerKey;
use archview::view::{ColorConfig, DiagramStyles, TuiApp};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn create_app(width: u16, height: u16) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let styles = DiagramStyles::with_color_config(ColorConfig::disabled());
    let mut app = TuiApp::with_terminal(terminal, KeyBindings::default(), styles);
    app.draw().unwrap();
    app
}

fn screen(app: &mut TuiApp<TestBackend>) -> Vec<String> {
    app.draw().unwrap();
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

fn header_row(app: &mut TuiApp<TestBackend>, title: &str) -> u16 {
    screen(app)
        .iter()
        .position(|line| line.contains(title) && (line.contains('▶') || line.contains('▼')))
        .unwrap_or_else(|| panic!("header {title} not on screen")) as u16
}

fn click(app: &mut TuiApp<TestBackend>, row: u16) {
    let quit = app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 4,
        row,
        modifiers: KeyModifiers::NONE,
    }));
    assert!(!quit);
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) {
    let quit = app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    assert!(!quit);
}

const PRESENTATION_ITEMS: [&str; 5] = [
    "React.js Frontend (Web App)",
    "Responsive Design (Mobile/Tablet/Desktop)",
    "Material-UI Components",
    "Real-time Updates",
    "Multi-language Support (EN/AR)",
];

fn shows_all(lines: &[String], items: &[&str]) -> bool {
    items
        .iter()
        .all(|item| lines.iter().any(|line| line.contains(item)))
}

fn shows_none(lines: &[String], items: &[&str]) -> bool {
    !items
        .iter()
        .any(|item| lines.iter().any(|line| line.contains(item)))
}

// ===== Scenarios =====

#[test]
fn initial_load_has_nothing_expanded() {
    let mut app = create_app(100, 40);
    assert_eq!(app.app_state().expanded(), None);

    let lines = screen(&mut app);
    assert!(shows_none(&lines, &PRESENTATION_ITEMS));
    assert!(lines.iter().all(|line| !line.contains('▼')));
}

#[test]
fn presentation_click_cycle_then_application() {
    let mut app = create_app(100, 40);

    // Click "presentation" → panel shows its 5 listed items
    let row = header_row(&mut app, "Presentation Layer");
    click(&mut app, row);
    let lines = screen(&mut app);
    assert_eq!(app.app_state().expanded(), Some(LayerKey::Presentation));
    assert!(shows_all(&lines, &PRESENTATION_ITEMS));

    // Click "presentation" again → panel hides
    let row = header_row(&mut app, "Presentation Layer");
    click(&mut app, row);
    let lines = screen(&mut app);
    assert_eq!(app.app_state().expanded(), None);
    assert!(shows_none(&lines, &PRESENTATION_ITEMS));

    // Click "application" → application panel shows, presentation stays hidden
    let row = header_row(&mut app, "Application Layer");
    click(&mut app, row);
    let lines = screen(&mut app);
    assert_eq!(app.app_state().expanded(), Some(LayerKey::Application));
    assert!(shows_all(
        &lines,
        &["RESTful API Gateway", "Node.js/Express Backend", "JWT Authentication"]
    ));
    assert!(shows_none(&lines, &PRESENTATION_ITEMS));
}

#[test]
fn opening_data_closes_application() {
    let mut app = create_app(100, 50);

    let row = header_row(&mut app, "Application Layer");
    click(&mut app, row);
    assert!(shows_all(&screen(&mut app), &["RESTful API Gateway"]));

    let row = header_row(&mut app, "Data Layer");
    click(&mut app, row);
    let lines = screen(&mut app);
    assert_eq!(app.app_state().expanded(), Some(LayerKey::Data));
    assert!(shows_none(&lines, &["RESTful API Gateway"]));
    assert!(shows_all(&lines, &["Redis (Cache & Sessions)", "Backup & Recovery System"]));
}

#[test]
fn microservices_block_is_always_open_and_ignores_clicks() {
    let mut app = create_app(100, 50);
    let modules = ["Salary Calculation", "MFA", "Org Structure", "Excel Export"];
    assert!(shows_all(&screen(&mut app), &modules));

    let row = screen(&mut app)
        .iter()
        .position(|line| line.contains("Microservices"))
        .expect("microservices title on screen") as u16;
    assert!(!screen(&mut app)[row as usize].contains('▶'));

    click(&mut app, row);
    assert_eq!(app.app_state().expanded(), None);
    assert!(shows_all(&screen(&mut app), &modules));

    let row = header_row(&mut app, "Presentation Layer");
    click(&mut app, row);
    assert!(shows_all(&screen(&mut app), &modules));
}

#[test]
fn keyboard_number_keys_follow_same_rules() {
    let mut app = create_app(100, 40);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.app_state().expanded(), Some(LayerKey::Presentation));
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.app_state().expanded(), Some(LayerKey::Application));
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.app_state().expanded(), None);
}

#[test]
fn static_sections_render_in_every_state() {
    // Tall enough to hold the longest page without scrolling
    let mut app = create_app(100, 90);
    let static_text = [
        "HR & Payroll System Architecture",
        "Presentation Layer",
        "Application Layer",
        "Microservices",
        "Data Layer",
        "Salary Calculation",
        "Employee Management",
        "Self-Service",
        "Parallel running (1-2 months)",
        "PostgreSQL · Redis Cache",
        "Build MVP (Employee Management + Basic Payroll)",
    ];

    assert!(shows_all(&screen(&mut app), &static_text));
    for digit in ['1', '2', '3'] {
        press(&mut app, KeyCode::Char(digit));
        assert!(
            shows_all(&screen(&mut app), &static_text),
            "static content missing with layer {digit} open"
        );
    }
}

#[test]
fn click_works_after_scrolling() {
    let mut app = create_app(100, 12);

    // Scroll so the presentation header sits on the first row
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(header_row(&mut app, "Presentation Layer"), 0);

    click(&mut app, 0);
    assert_eq!(app.app_state().expanded(), Some(LayerKey::Presentation));
}
