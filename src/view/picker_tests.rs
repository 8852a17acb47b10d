//! Rendering tests for the tick strip widget.

use super::*;
use crate::model::ScrollIndex;
use crate::test_harness::buffer_to_string;
use crate::view::layout::PICKER_HEIGHT;
use crate::view::styles::ColorConfig;
use ratatui::style::{Color, Modifier};

fn progress_of(value: i64) -> f64 {
    ValueDomain::progress_of(ValueDomain::to_index(ValueDomain::clamp(value)))
}

fn render(widget: PickerWidget<'_>, width: u16) -> Buffer {
    let area = Rect::new(0, 0, width, PICKER_HEIGHT);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

fn value(raw: i64) -> DomainValue {
    ValueDomain::clamp(raw)
}

#[test]
fn renders_strip_centered_on_ten() {
    let styles = PickerStyles::with_color_config(ColorConfig::disabled());
    let widget = PickerWidget::new(progress_of(10), value(10), &styles).steps(false, true);

    let buf = render(widget, 31);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
               ▼
               ┃
│  │  │  │  │  ┃  │  │  │  │  │
              10
              10
         [<]  ±10  [>]
");
}

#[test]
fn last_value_has_no_ticks_past_it() {
    let styles = PickerStyles::with_color_config(ColorConfig::disabled());
    let widget = PickerWidget::new(1.0, value(60), &styles).steps(true, false);

    let buf = render(widget, 31);
    let text = buffer_to_string(&buf);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[2], "│  │  │  │  │  ┃");
    assert_eq!(lines[3], "              60");
}

#[test]
fn fractional_position_shifts_ticks() {
    let styles = PickerStyles::with_color_config(ColorConfig::disabled());
    let at_ten = progress_of(10);
    let one_slot = ValueDomain::progress_of(ScrollIndex::new(1));
    // Two thirds of a slot towards 11 moves everything two columns left.
    let widget = PickerWidget::new(at_ten + one_slot * 2.0 / 3.0, value(11), &styles);

    let buf = render(widget, 31);

    assert_eq!(buf[(13, 2)].symbol(), "┃");
    assert_eq!(buf[(15, 2)].symbol(), " ");
    assert_eq!(buf[(16, 2)].symbol(), "│");
}

#[test]
fn selected_tick_is_highlighted() {
    let styles = PickerStyles::with_color_config(ColorConfig::enabled());
    let widget = PickerWidget::new(progress_of(20), value(20), &styles);

    let buf = render(widget, 31);

    assert_eq!(buf[(15, 2)].fg, Color::Blue);
    assert!(buf[(15, 2)].modifier.contains(Modifier::BOLD));
    assert_eq!(buf[(18, 2)].fg, Color::Gray);
    assert_eq!(buf[(30, 2)].fg, Color::DarkGray);
}

#[test]
fn disabled_buttons_are_dimmed() {
    let styles = PickerStyles::with_color_config(ColorConfig::enabled());
    let widget = PickerWidget::new(progress_of(10), value(10), &styles).steps(false, true);

    let buf = render(widget, 31);

    assert_eq!(buf[(9, 7)].symbol(), "[");
    assert_eq!(buf[(9, 7)].fg, Color::DarkGray);
    assert_eq!(buf[(19, 7)].fg, Color::White);
}

#[test]
fn wider_spacing_spreads_ticks() {
    let styles = PickerStyles::with_color_config(ColorConfig::disabled());
    let widget = PickerWidget::new(progress_of(30), value(30), &styles).columns_per_tick(5);

    let buf = render(widget, 31);

    assert_eq!(buf[(15, 2)].symbol(), "┃");
    assert_eq!(buf[(20, 2)].symbol(), "│");
    assert_eq!(buf[(17, 2)].symbol(), " ");
}

#[test]
fn short_area_renders_what_fits() {
    let styles = PickerStyles::with_color_config(ColorConfig::disabled());
    let widget = PickerWidget::new(progress_of(10), value(10), &styles);
    let area = Rect::new(0, 0, 31, 3);
    let mut buf = Buffer::empty(area);

    widget.render(area, &mut buf);

    assert_eq!(buf[(15, 0)].symbol(), "▼");
    assert_eq!(buf[(15, 2)].symbol(), "┃");
}

#[test]
fn non_finite_progress_renders_first_slot() {
    let styles = PickerStyles::with_color_config(ColorConfig::disabled());
    let widget = PickerWidget::new(f64::NAN, value(1), &styles);

    let buf = render(widget, 31);

    assert_eq!(buf[(15, 2)].symbol(), "│");
    assert_eq!(buf[(14, 2)].symbol(), " ");
    assert_eq!(buf[(12, 2)].symbol(), " ");
}
