//! Help overlay listing the key bindings.
//!
//! Shows a centered modal over the picker. Toggled with `?`, dismissed with
//! `?` or `Esc`.

use super::styles::PickerStyles;
use crate::config::KeyBindings;
use crate::model::KeyAction;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Actions in the order they are listed.
const LISTED_ACTIONS: [KeyAction; 7] = [
    KeyAction::FlickBackward,
    KeyAction::FlickForward,
    KeyAction::StepBackward,
    KeyAction::StepForward,
    KeyAction::Confirm,
    KeyAction::Help,
    KeyAction::Quit,
];

/// Width of the key column.
const KEY_COLUMN: usize = 14;

/// Lines of the help overlay, one per action plus the mouse hints.
pub fn help_lines(bindings: &KeyBindings, styles: &PickerStyles) -> Vec<Line<'static>> {
    let key_style = styles.button;
    let mut lines: Vec<Line<'static>> = LISTED_ACTIONS
        .iter()
        .map(|action| {
            let keys = bindings.keys_for(*action).join(" ");
            Line::from(vec![
                Span::styled(format!("{keys:<KEY_COLUMN$}"), key_style),
                Span::raw(action.description()),
            ])
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(format!("{:<KEY_COLUMN$}", "drag"), key_style),
        Span::raw("Scroll the strip, snaps on release"),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<KEY_COLUMN$}", "wheel"), key_style),
        Span::raw("Flick the strip"),
    ]));
    lines
}

/// Render the help overlay centered in the frame.
pub fn render_help_overlay(frame: &mut Frame, bindings: &KeyBindings, styles: &PickerStyles) {
    let lines = help_lines(bindings, styles);
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let popup = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_style(styles.indicator),
        )
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, popup);

    let hint_area = Rect {
        x: popup.x,
        y: popup.bottom().saturating_sub(1),
        width: popup.width,
        height: popup.height.min(1),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Esc or ? to close ",
        styles.hint.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Rect of at most `width` x `height` centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
