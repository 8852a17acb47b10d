//! Picker layout and mouse hit testing.
//!
//! Pure geometry: given the area the picker is drawn into, compute where
//! each part lands so rendering and mouse routing agree.

use ratatui::layout::Rect;

/// Rows the picker needs to render every part.
pub const PICKER_HEIGHT: u16 = 8;

/// Text of the step-backward button.
pub const BACK_BUTTON: &str = "[<]";
/// Text of the step-forward button.
pub const FORWARD_BUTTON: &str = "[>]";
/// Text between the step buttons.
pub const STEP_LABEL: &str = "±10";
/// Gap between the step buttons and the label.
const BUTTON_GAP: u16 = 2;

/// Region of the picker under a mouse position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerHit {
    /// The draggable tick strip, including labels.
    Strip,
    /// The step-backward button.
    BackButton,
    /// The step-forward button.
    ForwardButton,
}

/// Areas of the picker within its allotted rectangle.
///
/// Rows that do not fit in the allotted area come out with zero height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLayout {
    /// Whole picker area.
    pub area: Rect,
    /// Center indicator row.
    pub indicator: Rect,
    /// Row with the raised decade ticks.
    pub decade_ticks: Rect,
    /// Row with one tick per value.
    pub ticks: Rect,
    /// Row with the decade labels.
    pub labels: Rect,
    /// Selected value readout row.
    pub readout: Rect,
    /// Step-backward button.
    pub back_button: Rect,
    /// `±10` label between the buttons.
    pub step_label: Rect,
    /// Step-forward button.
    pub forward_button: Rect,
}

impl PickerLayout {
    /// Compute the layout for `area`.
    pub fn compute(area: Rect) -> Self {
        let buttons_row = row(area, 7);
        let back_width = BACK_BUTTON.chars().count() as u16;
        let label_width = STEP_LABEL.chars().count() as u16;
        let forward_width = FORWARD_BUTTON.chars().count() as u16;
        let total = back_width + BUTTON_GAP + label_width + BUTTON_GAP + forward_width;
        let start = buttons_row.x + buttons_row.width.saturating_sub(total) / 2;

        let span = |offset: u16, width: u16| {
            Rect {
                x: start + offset,
                y: buttons_row.y,
                width,
                height: buttons_row.height,
            }
            .intersection(buttons_row)
        };

        Self {
            area,
            indicator: row(area, 0),
            decade_ticks: row(area, 1),
            ticks: row(area, 2),
            labels: row(area, 3),
            readout: row(area, 5),
            back_button: span(0, back_width),
            step_label: span(back_width + BUTTON_GAP, label_width),
            forward_button: span(total - forward_width, forward_width),
        }
    }

    /// Column under the center indicator.
    pub fn center_column(&self) -> u16 {
        self.area.x + self.area.width / 2
    }

    /// Strip rows merged into one rectangle, for drag hit testing.
    pub fn strip(&self) -> Rect {
        self.decade_ticks.union(self.labels).intersection(self.area)
    }

    /// Which part of the picker, if any, contains `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> Option<PickerHit> {
        if contains(self.back_button, column, row) {
            Some(PickerHit::BackButton)
        } else if contains(self.forward_button, column, row) {
            Some(PickerHit::ForwardButton)
        } else if contains(self.strip(), column, row) {
            Some(PickerHit::Strip)
        } else {
            None
        }
    }
}

/// One-row rectangle at `offset` rows into `area`, empty when out of bounds.
fn row(area: Rect, offset: u16) -> Rect {
    if offset < area.height {
        Rect {
            x: area.x,
            y: area.y + offset,
            width: area.width,
            height: 1,
        }
    } else {
        Rect {
            x: area.x,
            y: area.bottom(),
            width: area.width,
            height: 0,
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
