//! Timed camera transitions: interpolates position and look-at target
//! between two states over a duration, with easing.

use std::str::FromStr;

use glam::Vec3;

/// Easing curves for camera transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EasingFunction {
    /// Constant speed, no acceleration.
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end: `1 - (1 - t)^3`.
    #[default]
    EaseOut,
    /// Slow start, fast middle, slow end.
    EaseInOut,
}

impl EasingFunction {
    /// Map a linear progress value (0.0..=1.0) to an eased value.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t * t,
            EasingFunction::EaseOut => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// An easing name other than `linear`, `ease_in`, `ease_out` or `ease_in_out`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing '{0}'")]
pub struct ParseEasingError(pub String);

impl FromStr for EasingFunction {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" => Ok(EasingFunction::Linear),
            "ease_in" => Ok(EasingFunction::EaseIn),
            "ease_out" => Ok(EasingFunction::EaseOut),
            "ease_in_out" => Ok(EasingFunction::EaseInOut),
            other => Err(ParseEasingError(other.to_string())),
        }
    }
}

/// An in-flight fly-to. Times are seconds on the scheduler clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Camera position captured when the transition started.
    pub from: Vec3,
    /// Destination position.
    pub to: Vec3,
    /// Look-at target captured when the transition started.
    pub from_target: Vec3,
    /// Destination look-at target.
    pub to_target: Vec3,
    /// Clock time at which the transition started.
    pub start_time: f64,
    /// Total duration. Zero completes on the first sample.
    pub duration: f64,
    /// Easing curve applied to linear progress.
    pub easing: EasingFunction,
}

/// One evaluation of a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSample {
    pub position: Vec3,
    pub target: Vec3,
    /// True once progress reached 1. The sample is then exactly the destination.
    pub finished: bool,
}

impl Transition {
    /// Linear progress in `[0, 1]` at clock time `now`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0) as f32
    }

    /// Evaluate the transition at clock time `now`.
    pub fn sample(&self, now: f64) -> TransitionSample {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return TransitionSample {
                position: self.to,
                target: self.to_target,
                finished: true,
            };
        }
        let t = self.easing.apply(progress);
        TransitionSample {
            position: self.from.lerp(self.to, t),
            target: self.from_target.lerp(self.to_target, t),
            finished: false,
        }
    }
}
