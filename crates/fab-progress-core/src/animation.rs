//! Frame-driven animation primitives: easing curves, value animators and delays.
//!
//! Nothing here owns a clock. The host calls `update(dt)` (seconds) once per
//! frame and reacts to the returned [`AnimationEnd`], so phase transitions are
//! plain control flow instead of listener callbacks.

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start, accelerating)
    EaseIn,
    /// Ease out (slow end, decelerating)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => Self::ease_in_quad(t),
            Self::EaseOut => Self::ease_out_quad(t),
            Self::EaseInOut => Self::ease_in_out_quad(t),
        }
    }

    fn ease_in_quad(t: f64) -> f64 {
        t * t
    }

    fn ease_out_quad(t: f64) -> f64 {
        (1.0 - t).mul_add(-(1.0 - t), 1.0)
    }

    fn ease_in_out_quad(t: f64) -> f64 {
        if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
        }
    }
}

// =============================================================================
// ValueAnimator
// =============================================================================

/// How an animator behaves when it reaches the end of its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Run once and report [`AnimationEnd::Completed`].
    #[default]
    Once,
    /// Wrap back to the start forever. Never completes on its own.
    Restart,
}

/// Why an animator stopped running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// Reached the end of its duration.
    Completed,
    /// Stopped early by [`ValueAnimator::cancel`].
    Cancelled,
}

impl AnimationEnd {
    /// Whether the animation ran to the end.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Interpolates between two values over a duration, stepped by the caller.
///
/// # Examples
///
/// ```
/// use fab_progress_core::{AnimationEnd, Easing, ValueAnimator};
///
/// let mut anim = ValueAnimator::new(0.0, 100.0, 1.0).with_easing(Easing::Linear);
/// anim.start();
/// assert_eq!(anim.update(0.5), None);
/// assert!((anim.value() - 50.0).abs() < 1e-9);
/// assert_eq!(anim.update(0.5), Some(AnimationEnd::Completed));
/// assert!(!anim.is_running());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAnimator {
    from: f64,
    to: f64,
    /// Duration in seconds
    duration: f64,
    elapsed: f64,
    start_delay: f64,
    delay_remaining: f64,
    easing: Easing,
    repeat: RepeatMode,
    running: bool,
}

impl ValueAnimator {
    /// Create a stopped animator from `from` to `to` over `duration` seconds.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            start_delay: 0.0,
            delay_remaining: 0.0,
            easing: Easing::EaseInOut,
            repeat: RepeatMode::Once,
            running: false,
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set repeat mode.
    #[must_use]
    pub const fn with_repeat(mut self, repeat: RepeatMode) -> Self {
        self.repeat = repeat;
        self
    }

    /// Delay in seconds between `start()` and the first interpolated frame.
    #[must_use]
    pub fn with_start_delay(mut self, delay: f64) -> Self {
        self.start_delay = delay.max(0.0);
        self
    }

    /// Replace the value range. Takes effect on the next frame.
    pub fn set_range(&mut self, from: f64, to: f64) {
        self.from = from;
        self.to = to;
    }

    /// Replace the duration (seconds). Takes effect on the next `start()`.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration.max(0.0);
    }

    /// Start (or restart) from the beginning.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.delay_remaining = self.start_delay;
        self.running = true;
    }

    /// Stop immediately. Returns `Cancelled` if the animator was running.
    pub fn cancel(&mut self) -> Option<AnimationEnd> {
        if self.running {
            self.running = false;
            Some(AnimationEnd::Cancelled)
        } else {
            None
        }
    }

    /// Continue from the current value with a new duration and easing.
    ///
    /// The range keeps its span but is rebased on the current value, so the
    /// output does not jump when the curve changes mid-flight.
    pub fn rebase(&mut self, duration: f64, easing: Easing) {
        let current = self.value();
        let span = self.to - self.from;
        self.from = current;
        self.to = current + span;
        self.duration = duration.max(0.0);
        self.elapsed = 0.0;
        self.easing = easing;
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns `Some(Completed)` on the frame a `Once` animator reaches its
    /// end. Time left over past the end is dropped.
    pub fn update(&mut self, dt: f64) -> Option<AnimationEnd> {
        if !self.running {
            return None;
        }
        let mut dt = dt.max(0.0);
        if self.delay_remaining > 0.0 {
            let used = dt.min(self.delay_remaining);
            self.delay_remaining -= used;
            dt -= used;
            if self.delay_remaining > 0.0 {
                return None;
            }
        }

        self.elapsed += dt;
        if self.elapsed < self.duration {
            return None;
        }
        match self.repeat {
            RepeatMode::Once => {
                self.elapsed = self.duration;
                self.running = false;
                Some(AnimationEnd::Completed)
            }
            RepeatMode::Restart => {
                self.elapsed = if self.duration > 0.0 {
                    self.elapsed % self.duration
                } else {
                    0.0
                };
                None
            }
        }
    }

    /// Linear progress from 0.0 to 1.0, before easing.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else if self.running {
            0.0
        } else {
            1.0
        }
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.fraction());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether the animator is running (including its start delay).
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Start value.
    #[must_use]
    pub const fn start_value(&self) -> f64 {
        self.from
    }

    /// End value.
    #[must_use]
    pub const fn end_value(&self) -> f64 {
        self.to
    }

    /// Duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Easing function.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }
}

// =============================================================================
// Delay
// =============================================================================

/// One-shot timer. Fires once per `arm()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Delay {
    duration: f64,
    remaining: Option<f64>,
}

impl Delay {
    /// Create a disarmed delay of `duration` seconds.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            remaining: None,
        }
    }

    /// Arm (or re-arm) the timer from its full duration.
    pub fn arm(&mut self) {
        self.remaining = Some(self.duration);
    }

    /// Disarm without firing.
    pub fn disarm(&mut self) {
        self.remaining = None;
    }

    /// Whether the timer is waiting to fire.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Configured duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Advance by `dt` seconds. Returns `true` on the frame the timer fires.
    pub fn tick(&mut self, dt: f64) -> bool {
        match self.remaining {
            Some(remaining) => {
                let left = remaining - dt.max(0.0);
                if left <= 0.0 {
                    self.remaining = None;
                    true
                } else {
                    self.remaining = Some(left);
                    false
                }
            }
            None => false,
        }
    }
}
