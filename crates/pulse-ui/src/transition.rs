//! Timed ease-in-out transitions between two values.
//!
//! State changes apply immediately; only the rendered value lags behind
//! and eases towards the new target.

use crate::timer::Millis;

/// Cubic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Interpolation from `from` to `to` starting at `start` and lasting `duration` ms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    start: Millis,
    duration: Millis,
}

impl Transition {
    pub fn new(from: f32, to: f32, start: Millis, duration: Millis) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// A transition that already rests at `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, 0, 0)
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Millis) -> f32 {
        if self.duration == 0 || now >= self.start.saturating_add(self.duration) {
            return 1.0;
        }
        if now <= self.start {
            return 0.0;
        }
        (now - self.start) as f32 / self.duration as f32
    }

    /// Eased value at `now`.
    pub fn value_at(&self, now: Millis) -> f32 {
        self.from + (self.to - self.from) * ease_in_out(self.progress(now))
    }

    pub fn is_active(&self, now: Millis) -> bool {
        self.progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        let d = a - b;
        d < 1e-4 && d > -1e-4
    }

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert!(approx(ease_in_out(0.0), 0.0));
        assert!(approx(ease_in_out(0.5), 0.5));
        assert!(approx(ease_in_out(1.0), 1.0));
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn transition_runs_from_start_to_target() {
        let t = Transition::new(0.4, 0.8, 2000, 400);

        assert!(approx(t.value_at(1000), 0.4));
        assert!(approx(t.value_at(2000), 0.4));
        assert!(approx(t.value_at(2200), 0.6));
        assert!(approx(t.value_at(2400), 0.8));
        assert!(t.is_active(2399));
        assert!(!t.is_active(2400));
    }

    #[test]
    fn zero_duration_is_instant() {
        let t = Transition::new(0.0, 1.0, 50, 0);
        assert!(!t.is_active(50));
        assert!(approx(t.value_at(50), 1.0));
    }

    #[test]
    fn settled_transition_never_moves() {
        let t = Transition::settled(0.75);
        assert!(!t.is_active(0));
        assert!(approx(t.value_at(123_456), 0.75));
    }
}
