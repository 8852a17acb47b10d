//! Block-of-ten jumps for the step buttons.

use crate::model::{DomainValue, ScrollIndex};

/// Size of one step, in slots.
pub const STEP: isize = 10;

/// Value at or below which the backward step is disabled.
const BACKWARD_FLOOR: u8 = 10;

/// Value at or above which the forward step is disabled.
const FORWARD_CEILING: u8 = 60;

/// Target index for a jump of `delta` slots, clamped to `[0, count - 1]`.
///
/// An empty strip always yields index 0.
pub fn step_target(current: ScrollIndex, delta: isize, count: usize) -> ScrollIndex {
    if count == 0 {
        return ScrollIndex::new(0);
    }
    let last = count - 1;
    let target = if delta.is_negative() {
        current.get().saturating_sub(delta.unsigned_abs())
    } else {
        current.get().saturating_add(delta.unsigned_abs())
    };
    ScrollIndex::new(target.min(last))
}

/// Whether the backward step button is enabled for `value`.
pub fn can_step_backward(value: DomainValue) -> bool {
    value.get() > BACKWARD_FLOOR
}

/// Whether the forward step button is enabled for `value`.
pub fn can_step_forward(value: DomainValue) -> bool {
    value.get() < FORWARD_CEILING
}
