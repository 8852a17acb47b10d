//! Snap target resolution.
//!
//! Maps a raw (possibly fractional) value and a direction hint to the decade
//! the strip should settle on. Forward travel rounds up, backward travel
//! rounds down, and with no trend the closer decade wins (ties go down).

use crate::model::{Direction, DomainValue, ValueDomain};

/// Width of one snapping block.
pub const DECADE: f64 = 10.0;

/// Resolve the snap target for a raw value.
///
/// # Behavior
/// - `raw < 10` resolves to 10, and so does NaN
/// - `raw > 60` resolves to 60
/// - otherwise `lower = floor(raw / 10) * 10`, `upper = ceil(raw / 10) * 10`:
///   - `Forward` resolves to `upper`
///   - `Backward` resolves to `lower`
///   - `Unknown` resolves to the closer of the two; `upper` must be strictly
///     closer to win
///
/// A raw value already on a decade has `lower == upper` and passes through
/// for every direction.
pub fn resolve(raw: f64, direction: Direction) -> DomainValue {
    let first = DECADE;
    let last = f64::from(ValueDomain::MAX);

    if raw.is_nan() || raw < first {
        return decade(first);
    }
    if raw > last {
        return decade(last);
    }

    let lower = (raw / DECADE).floor() * DECADE;
    let upper = (raw / DECADE).ceil() * DECADE;

    let target = match direction {
        Direction::Forward => upper,
        Direction::Backward => lower,
        Direction::Unknown => {
            if upper - raw < raw - lower {
                upper
            } else {
                lower
            }
        }
    };
    decade(target)
}

/// Resolve the snap target for a selected value.
pub fn resolve_value(value: DomainValue, direction: Direction) -> DomainValue {
    resolve(f64::from(value), direction)
}

fn decade(target: f64) -> DomainValue {
    ValueDomain::clamp(target as i64)
}
