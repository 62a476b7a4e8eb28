//! Timeline primitives: cancellable progress ramps.
//!
//! Two cadence mechanisms exist because different step programs use
//! different strategies: fixed-increment ramps advance one constant step
//! per frame tick (line growth, opacity fades), while timed ramps sample
//! elapsed wall-clock time against a duration (the containment scale
//! pulse). Cancellation is structural: a ramp only advances inside the
//! scheduler's tick, so dropping its runner guarantees no further commits
//! and no completion.

use web_time::{Duration, Instant};

use crate::animation::interpolation::{clamp01, lerp};
use crate::scene::ScalarField;

/// Direction a fixed-increment ramp moves its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampDirection {
    /// Grow toward 1.
    Up,
    /// Fade toward 0.
    Down,
}

impl RampDirection {
    /// The bound this direction terminates at.
    #[must_use]
    pub fn bound(self) -> f32 {
        match self {
            Self::Up => 1.0,
            Self::Down => 0.0,
        }
    }
}

/// Fixed-increment ramp: one constant step per frame tick.
///
/// All `fields` move in lockstep; the first field's committed value drives
/// the advancement so the group stays synchronized.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRamp {
    /// Scene fields committed each tick.
    pub fields: Vec<ScalarField>,
    /// Growth or fade.
    pub direction: RampDirection,
    /// Per-tick increment magnitude; larger is faster.
    pub step_size: f32,
}

impl FixedRamp {
    /// Single-field growth ramp.
    #[must_use]
    pub fn grow(field: ScalarField, step_size: f32) -> Self {
        Self {
            fields: vec![field],
            direction: RampDirection::Up,
            step_size,
        }
    }

    /// Single-field fade ramp.
    #[must_use]
    pub fn fade(field: ScalarField, step_size: f32) -> Self {
        Self {
            fields: vec![field],
            direction: RampDirection::Down,
            step_size,
        }
    }

    /// Lockstep fade over several fields.
    #[must_use]
    pub fn fade_all(fields: Vec<ScalarField>, step_size: f32) -> Self {
        Self {
            fields,
            direction: RampDirection::Down,
            step_size,
        }
    }

    /// Next committed value from the current one, and whether the bound
    /// was reached. Clamping makes the terminal value exactly 0 or 1, so
    /// completion fires exactly once.
    #[must_use]
    pub fn advance(&self, current: f32) -> (f32, bool) {
        let next = match self.direction {
            RampDirection::Up => clamp01(current + self.step_size),
            RampDirection::Down => clamp01(current - self.step_size),
        };
        (next, next == self.direction.bound())
    }
}

/// Timed ramp: progress is elapsed wall-clock time over a duration,
/// clamped to [0, 1] and sampled once per frame tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedRamp {
    /// Scene fields committed each tick.
    pub fields: Vec<ScalarField>,
    /// Value at progress 0.
    pub from: f32,
    /// Value at progress 1; committed exactly at completion.
    pub to: f32,
    /// Total ramp duration.
    pub duration: Duration,
}

impl TimedRamp {
    /// Timed ramp over several lockstep fields.
    #[must_use]
    pub fn new(
        fields: Vec<ScalarField>,
        from: f32,
        to: f32,
        duration: Duration,
    ) -> Self {
        Self {
            fields,
            from,
            to,
            duration,
        }
    }

    /// Committed value at `now` for a ramp started at `started`, and
    /// whether the ramp is complete. A zero duration completes on its
    /// first sample with the value at `to`.
    #[must_use]
    pub fn sample(&self, started: Instant, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(started);
        let t = if self.duration.is_zero() {
            1.0
        } else {
            clamp01(elapsed.as_secs_f32() / self.duration.as_secs_f32())
        };
        (lerp(self.from, self.to, t), t >= 1.0)
    }
}
