//! Simple time-based tween animator for snapping to a target position

use std::time::{Duration, Instant};

/// Easing curve applied to normalised animation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic ease-in.
    EaseIn,
    /// Quadratic ease-out.
    #[default]
    EaseOut,
    /// Quadratic ease-in-out.
    EaseInOut,
}

impl Easing {
    /// Map `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Tween from a start position to a target over a fixed duration.
#[derive(Debug, Clone, Default)]
pub struct SnapAnimator {
    active: Option<Tween>,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    start: f64,
    target: f64,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl SnapAnimator {
    /// Idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tween is running.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the running tween, if any.
    pub fn target(&self) -> Option<f64> {
        self.active.map(|tween| tween.target)
    }

    /// Start (or restart) a tween.
    pub fn start(&mut self, current: f64, target: f64, now: Instant, duration: Duration, easing: Easing) {
        self.active = Some(Tween {
            start: current,
            target,
            started_at: now,
            duration,
            easing,
        });
    }

    /// Returns Some(next_position) when animating, or None when inactive.
    ///
    /// The tick that reaches the end returns the exact target and deactivates.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let tween = self.active?;
        let elapsed = now.saturating_duration_since(tween.started_at);
        if elapsed >= tween.duration {
            self.active = None;
            return Some(tween.target);
        }
        let t = (elapsed.as_secs_f64() / tween.duration.as_secs_f64()).clamp(0.0, 1.0);
        let eased = tween.easing.apply(t);
        Some(tween.start + (tween.target - tween.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
