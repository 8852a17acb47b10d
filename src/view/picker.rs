//! Tick strip widget.
//!
//! Draws the strip around a continuous position so ticks glide under the
//! fixed indicator while dragging or animating.

use super::layout::{PickerLayout, BACK_BUTTON, FORWARD_BUTTON, STEP_LABEL};
use super::styles::PickerStyles;
use crate::model::{DomainValue, ValueDomain};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthStr;

const INDICATOR: &str = "▼";
const TICK: &str = "│";
const DECADE_TICK: &str = "┃";

/// Renders the picker for one frame.
#[derive(Debug, Clone)]
pub struct PickerWidget<'a> {
    position: f64,
    selected: DomainValue,
    can_step_backward: bool,
    can_step_forward: bool,
    columns_per_tick: u16,
    styles: &'a PickerStyles,
}

impl<'a> PickerWidget<'a> {
    /// Widget for a strip at `progress` with `selected` in the readout.
    pub fn new(progress: f64, selected: DomainValue, styles: &'a PickerStyles) -> Self {
        let max = ValueDomain::count().saturating_sub(1) as f64;
        let position = if progress.is_finite() {
            progress.clamp(0.0, 1.0) * max
        } else {
            0.0
        };
        Self {
            position,
            selected,
            can_step_backward: true,
            can_step_forward: true,
            columns_per_tick: 3,
            styles,
        }
    }

    /// Enablement of the step buttons.
    pub fn steps(mut self, can_step_backward: bool, can_step_forward: bool) -> Self {
        self.can_step_backward = can_step_backward;
        self.can_step_forward = can_step_forward;
        self
    }

    /// Columns between neighbouring ticks.
    pub fn columns_per_tick(mut self, columns_per_tick: u16) -> Self {
        self.columns_per_tick = columns_per_tick.max(1);
        self
    }

    /// Screen column of slot `index`, if it is visible.
    fn column_of(&self, index: usize, area: Rect, center: u16) -> Option<u16> {
        let offset = (index as f64 - self.position) * f64::from(self.columns_per_tick);
        let column = (f64::from(center) + offset).round();
        if column >= f64::from(area.left()) && column < f64::from(area.right()) {
            Some(column as u16)
        } else {
            None
        }
    }

    fn render_strip(&self, layout: &PickerLayout, buf: &mut Buffer) {
        let center = layout.center_column();
        let center_index = self.position.round() as usize;

        for value in ValueDomain::values() {
            let index = ValueDomain::to_index(value).get();
            let Some(column) = self.column_of(index, layout.area, center) else {
                continue;
            };
            let style = self.styles.tick(index.abs_diff(center_index), value.is_decade());

            if value.is_decade() {
                put(buf, layout.decade_ticks, column, DECADE_TICK, style);
                put(buf, layout.ticks, column, DECADE_TICK, style);

                let label = value.to_string();
                let half = (label.width() / 2) as u16;
                if let Some(start) = column.checked_sub(half) {
                    put(buf, layout.labels, start, &label, self.styles.label);
                }
            } else {
                put(buf, layout.ticks, column, TICK, style);
            }
        }
    }

    fn render_buttons(&self, layout: &PickerLayout, buf: &mut Buffer) {
        let back = self.styles.button(self.can_step_backward);
        let forward = self.styles.button(self.can_step_forward);
        put(buf, layout.back_button, layout.back_button.x, BACK_BUTTON, back);
        put(buf, layout.step_label, layout.step_label.x, STEP_LABEL, self.styles.hint);
        put(buf, layout.forward_button, layout.forward_button.x, FORWARD_BUTTON, forward);
    }
}

impl Widget for PickerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = PickerLayout::compute(area);

        put(buf, layout.indicator, layout.center_column(), INDICATOR, self.styles.indicator);
        self.render_strip(&layout, buf);

        let readout = self.selected.to_string();
        let start = layout.readout.x + layout.readout.width.saturating_sub(readout.width() as u16) / 2;
        put(buf, layout.readout, start, &readout, self.styles.readout);

        self.render_buttons(&layout, buf);
    }
}

/// Write `text` at `column` on `row`, only if it fits entirely.
fn put(buf: &mut Buffer, row: Rect, column: u16, text: &str, style: ratatui::style::Style) {
    if row.height == 0 {
        return;
    }
    let end = column as usize + text.width();
    if column >= row.left() && end <= row.right() as usize {
        buf.set_string(column, row.y, text, style);
    }
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod tests;
