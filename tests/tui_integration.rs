//! Integration tests for the picker TUI
//!
//! These tests drive `TuiApp` on a `TestBackend` through its public API,
//! without requiring an actual terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tickpick::config::ResolvedConfig;
use tickpick::model::DomainValue;
use tickpick::view::{ColorConfig, Outcome, TuiApp};

fn app(width: u16, height: u16, now: Instant) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut app =
        TuiApp::with_terminal(terminal, &ResolvedConfig::default(), ColorConfig::disabled(), now)
            .unwrap();
    app.draw().unwrap();
    app
}

/// Tick frames from `from` for `duration`; returns the final instant.
fn run_frames(app: &mut TuiApp<TestBackend>, from: Instant, duration: Duration) -> Instant {
    let frame = Duration::from_millis(16);
    let mut now = from;
    while now < from + duration {
        now += frame;
        app.tick(now);
    }
    app.draw().unwrap();
    now
}

fn screen(app: &TuiApp<TestBackend>) -> String {
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Test that 'q' quits without a value
#[test]
fn test_q_key_cancels() {
    let now = Instant::now();
    let mut app = app(40, 14, now);
    app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), now);
    assert_eq!(app.outcome(), Some(Outcome::Cancelled));
}

/// Test that stepping then confirming reports the stepped value
#[test]
fn test_step_then_confirm() {
    let t0 = Instant::now();
    let mut app = app(40, 14, t0);

    app.handle_key(KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE), t0);
    let now = run_frames(&mut app, t0, Duration::from_millis(400));
    app.handle_key(KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE), now);
    let now = run_frames(&mut app, now, Duration::from_millis(400));
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);

    assert_eq!(app.outcome(), Some(Outcome::Confirmed(DomainValue::new(30).unwrap())));
    assert!(screen(&app).contains("30"));
}

/// Test that clicking the forward button steps by ten
#[test]
fn test_click_forward_button() {
    let t0 = Instant::now();
    let mut app = app(40, 14, t0);
    let button = app.layout().unwrap().forward_button;

    for kind in [
        MouseEventKind::Down(MouseButton::Left),
        MouseEventKind::Up(MouseButton::Left),
    ] {
        app.handle_mouse(
            MouseEvent {
                kind,
                column: button.x + 1,
                row: button.y,
                modifiers: KeyModifiers::NONE,
            },
            t0,
        );
    }
    run_frames(&mut app, t0, Duration::from_millis(400));

    assert_eq!(app.controller().selected().get(), 20);
}

/// Test that a tiny terminal still renders without panicking
#[test]
fn test_tiny_terminal_renders() {
    let now = Instant::now();
    let mut app = app(5, 3, now);
    app.tick(now + Duration::from_millis(16));
    app.draw().unwrap();
    assert_eq!(app.controller().selected().get(), 10);
}
