//! Tests for the TUI application driven through a test backend.

use super::*;
use crate::test_harness::PickerHarness;
use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn harness() -> PickerHarness {
    PickerHarness::new(40, 14).unwrap()
}

/// Drag the strip horizontally by `columns` from its center, hold still,
/// then release.
fn drag_strip(h: &mut PickerHarness, columns: i32) {
    let layout = h.app().layout().unwrap();
    let row = layout.strip().y;
    let start = layout.center_column();
    let end = (i32::from(start) + columns) as u16;

    h.mouse(MouseEventKind::Down(MouseButton::Left), start, row);
    h.skip(ms(16));
    h.mouse(MouseEventKind::Drag(MouseButton::Left), end, row);
    h.skip(ms(200));
    h.mouse(MouseEventKind::Up(MouseButton::Left), end, row);
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

// ===== Startup =====

#[test]
fn starts_on_initial_value() {
    let mut h = harness();
    assert_eq!(h.selected().get(), 10);
    assert_eq!(h.outcome(), None);

    let screen = h.render_to_string().unwrap();
    assert!(screen.contains("tickpick"));
    assert!(screen.contains("[<]  ±10  [>]"));
    assert!(screen.contains("▼"));
}

#[test]
fn starts_on_configured_value() {
    let config = ResolvedConfig {
        initial_value: DomainValue::new(40).unwrap(),
        ..ResolvedConfig::default()
    };
    let h = PickerHarness::with_config(40, 14, &config).unwrap();
    assert_eq!(h.selected().get(), 40);
    assert!(!h.app().controller().has_pending_settle());
}

// ===== Keys =====

#[test]
fn enter_confirms_current_value() {
    let mut h = harness();
    h.press(KeyCode::Enter);
    assert_eq!(h.outcome(), Some(Outcome::Confirmed(DomainValue::new(10).unwrap())));
}

#[test]
fn q_and_ctrl_c_cancel() {
    let mut h = harness();
    h.press(KeyCode::Char('q'));
    assert_eq!(h.outcome(), Some(Outcome::Cancelled));

    let mut h = harness();
    h.press_with(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(h.outcome(), Some(Outcome::Cancelled));
}

#[test]
fn key_release_is_ignored() {
    let now = Instant::now();
    let mut app = TuiApp::with_terminal(
        Terminal::new(ratatui::backend::TestBackend::new(40, 14)).unwrap(),
        &ResolvedConfig::default(),
        ColorConfig::disabled(),
        now,
    )
    .unwrap();

    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    app.handle_key(release, now);

    assert_eq!(app.outcome(), None);
}

#[test]
fn help_toggles_and_esc_closes_it() {
    let mut h = harness();
    h.press(KeyCode::Char('?'));
    assert!(h.app().help_visible());
    assert!(h.render_to_string().unwrap().contains("Keys"));

    h.press(KeyCode::Esc);
    assert!(!h.app().help_visible());
    assert_eq!(h.outcome(), None);

    h.press(KeyCode::Esc);
    assert_eq!(h.outcome(), Some(Outcome::Cancelled));
}

#[test]
fn brackets_step_by_ten() {
    let mut h = harness();
    h.press(KeyCode::Char(']'));
    h.advance(ms(500)).unwrap();
    assert_eq!(h.selected().get(), 20);

    h.press(KeyCode::Char('['));
    h.advance(ms(500)).unwrap();
    assert_eq!(h.selected().get(), 10);
}

#[test]
fn step_backward_at_ten_is_disabled() {
    let mut h = harness();
    h.press(KeyCode::Char('['));
    h.advance(ms(500)).unwrap();
    assert_eq!(h.selected().get(), 10);
    assert!(!h.app().controller().engine().unwrap().is_moving());
}

#[test]
fn flick_forward_snaps_to_next_decade() {
    let mut h = harness();
    h.press(KeyCode::Char('l'));
    h.advance(ms(1000)).unwrap();
    assert_eq!(h.selected().get(), 20);
    assert!(!h.app().controller().has_pending_settle());
}

#[test]
fn flick_backward_from_thirty_snaps_to_twenty() {
    let config = ResolvedConfig {
        initial_value: DomainValue::new(30).unwrap(),
        ..ResolvedConfig::default()
    };
    let mut h = PickerHarness::with_config(40, 14, &config).unwrap();
    h.press(KeyCode::Left);
    h.advance(ms(1000)).unwrap();
    assert_eq!(h.selected().get(), 20);
}

// ===== Mouse =====

#[test]
fn forward_button_steps_and_back_button_returns() {
    let mut h = harness();
    assert!(h.click_part(PickerHit::ForwardButton));
    h.advance(ms(500)).unwrap();
    assert_eq!(h.selected().get(), 20);

    assert!(h.click_part(PickerHit::BackButton));
    h.advance(ms(500)).unwrap();
    assert_eq!(h.selected().get(), 10);
}

#[test]
fn disabled_back_button_does_nothing() {
    let mut h = harness();
    assert!(h.click_part(PickerHit::BackButton));
    h.advance(ms(500)).unwrap();
    assert_eq!(h.selected().get(), 10);
}

#[test]
fn drag_forward_then_release_snaps_up() {
    let mut h = harness();
    // Dragging left by two ticks moves 10 -> 12.
    drag_strip(&mut h, -6);
    h.advance(ms(800)).unwrap();
    assert_eq!(h.selected().get(), 20);
}

#[test]
fn drag_backward_then_release_snaps_down() {
    let mut h = harness();
    h.press(KeyCode::Char(']'));
    h.advance(ms(500)).unwrap();
    assert_eq!(h.selected().get(), 20);

    // Dragging right by two ticks moves 20 -> 18.
    drag_strip(&mut h, 6);
    h.advance(ms(800)).unwrap();
    assert_eq!(h.selected().get(), 10);
}

#[test]
fn wheel_over_strip_flicks() {
    let mut h = harness();
    let layout = h.app().layout().unwrap();
    h.mouse(MouseEventKind::ScrollDown, layout.center_column(), layout.ticks.y);
    h.advance(ms(1000)).unwrap();
    assert_eq!(h.selected().get(), 20);
}

#[test]
fn wheel_outside_picker_is_ignored() {
    let mut h = harness();
    h.mouse(MouseEventKind::ScrollDown, 0, 0);
    h.advance(ms(500)).unwrap();
    assert_eq!(h.selected().get(), 10);
}

// ===== Resize =====

#[test]
fn resize_keeps_selection() {
    let now = Instant::now();
    let mut app = TuiApp::with_terminal(
        Terminal::new(ratatui::backend::TestBackend::new(40, 14)).unwrap(),
        &ResolvedConfig::default(),
        ColorConfig::disabled(),
        now,
    )
    .unwrap();

    app.handle_resize(60);
    app.tick(now + ms(16));

    assert_eq!(app.controller().selected().get(), 10);
    assert!(!app.controller().has_pending_settle());
    assert_eq!(app.controller().engine().unwrap().viewport_width(), 60);
}
