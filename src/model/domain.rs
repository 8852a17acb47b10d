//! Value domain: the selectable integers and their scroll positions.
//!
//! Values run from 1 to 60 inclusive. Each value occupies one slot on the
//! scroll strip, so `index = value - 1`. Raw constructors are never exported;
//! use smart constructors or the clamping helpers on [`ValueDomain`].

use std::fmt;
use thiserror::Error;

/// Error returned when a raw integer lies outside the value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value {0} is outside the selectable range {min}..={max}", min = ValueDomain::MIN, max = ValueDomain::MAX)]
pub struct InvalidDomainValue(pub i64);

/// A selectable value in `[1, 60]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomainValue(u8);

impl DomainValue {
    /// Smart constructor: rejects values outside the domain.
    pub fn new(raw: i64) -> Result<Self, InvalidDomainValue> {
        if (i64::from(ValueDomain::MIN)..=i64::from(ValueDomain::MAX)).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(InvalidDomainValue(raw))
        }
    }

    /// Get the raw value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether this value sits on a decade boundary (10, 20, ...).
    pub fn is_decade(self) -> bool {
        self.0 % 10 == 0
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DomainValue> for f64 {
    fn from(value: DomainValue) -> Self {
        f64::from(value.0)
    }
}

/// Zero-based slot on the scroll strip.
///
/// Not range-checked on construction; [`ValueDomain::to_value`] clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ScrollIndex(usize);

impl ScrollIndex {
    /// Create a new ScrollIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for ScrollIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// The fixed, total domain of selectable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValueDomain;

impl ValueDomain {
    /// Smallest selectable value.
    pub const MIN: u8 = 1;
    /// Largest selectable value.
    pub const MAX: u8 = 60;
    /// Number of selectable values (and scroll slots).
    pub const COUNT: usize = 60;

    /// Number of slots on the strip.
    pub fn count() -> usize {
        Self::COUNT
    }

    /// Map a scroll index to its value. Out-of-range indices clamp to the ends.
    pub fn to_value(index: ScrollIndex) -> DomainValue {
        let clamped = index.get().min(Self::COUNT - 1);
        DomainValue(clamped as u8 + Self::MIN)
    }

    /// Map a value to its scroll index.
    pub fn to_index(value: DomainValue) -> ScrollIndex {
        ScrollIndex(usize::from(value.get() - Self::MIN))
    }

    /// Clamp an arbitrary integer into the domain.
    pub fn clamp(raw: i64) -> DomainValue {
        DomainValue(raw.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    /// Derive the current index from a scroll progress in `[0, 1]`.
    ///
    /// `round(progress * (count - 1))`, clamped to `[0, count - 1]`. NaN maps to 0.
    pub fn index_from_progress(progress: f64) -> ScrollIndex {
        let last = (Self::COUNT - 1) as f64;
        let raw = (progress * last).round();
        if raw.is_nan() {
            return ScrollIndex(0);
        }
        ScrollIndex(raw.clamp(0.0, last) as usize)
    }

    /// Scroll progress at which `index` sits under the center indicator.
    pub fn progress_of(index: ScrollIndex) -> f64 {
        let last = (Self::COUNT - 1) as f64;
        (index.get() as f64 / last).clamp(0.0, 1.0)
    }

    /// Iterate over every value in ascending order.
    pub fn values() -> impl Iterator<Item = DomainValue> {
        (Self::MIN..=Self::MAX).map(DomainValue)
    }
}
