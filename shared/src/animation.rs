//! # Animation
//!
//! A [`Tween`] describes one numeric property moving from `from` to `to`
//! over a duration. The host supplies an [`Animator`] that drives it and
//! hands each interpolated value to a frame callback.

use std::f64::consts::PI;

/// Per-frame callback receiving the interpolated value
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Ease-in-out cosine curve. Maps `0 -> 0` and `1 -> 1`, monotonic in between.
pub fn swing(progress: f64) -> f64 {
    0.5 - (progress * PI).cos() / 2.0
}

/// One numeric interpolation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    /// Linear time progress in `0..=1`. Zero or negative durations finish at once.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased value after `elapsed_ms`. Returns exactly `to` once finished.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = self.progress_at(elapsed_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * swing(progress)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress_at(elapsed_ms) >= 1.0
    }
}

/// Host capability that runs a tween to completion.
///
/// Implementations call `on_frame` once per frame with the current value and
/// must deliver a final frame carrying exactly `tween.to`. Calls return
/// immediately; the animation continues on the host's own schedule.
pub trait Animator {
    fn animate(&self, tween: Tween, on_frame: FrameCallback);
}

/// Runs every tween synchronously in a fixed number of evenly spaced frames.
///
/// Useful wherever there is no frame clock: tests, static snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteppedAnimator {
    frames: u32,
}

impl SteppedAnimator {
    pub fn new(frames: u32) -> Self {
        Self {
            frames: frames.max(1),
        }
    }
}

impl Default for SteppedAnimator {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Animator for SteppedAnimator {
    fn animate(&self, tween: Tween, mut on_frame: FrameCallback) {
        for frame in 1..=self.frames {
            let elapsed = tween.duration_ms * f64::from(frame) / f64::from(self.frames);
            on_frame(tween.value_at(elapsed));
        }
    }
}
