//! Arc animation state machine.
//!
//! The controller runs four animators: an endless linear rotation plus one
//! sweep animator per phase (grow, shrink, complete). Exactly one sweep
//! animator is active at a time; phase transitions happen when it reports an
//! [`AnimationEnd`].
//!
//! ```text
//! Idle -> Growing -> Shrinking -> Growing -> ... -> Shrinking -> Completing -> Idle
//! ```

use crate::style::{ArcDurations, FabProgressStyle, SweepRange};
use fab_progress_core::{AnimationEnd, Easing, RepeatMode, ValueAnimator};
use tracing::{debug, trace};

/// The rotation slows to this multiple of the complete duration once the
/// arc starts closing.
const COMPLETE_ROTATION_FACTOR: f64 = 6.0;

/// Phase of the arc animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcPhase {
    /// Not animating
    #[default]
    Idle,
    /// Sweep expanding from min to max
    Growing,
    /// Sweep contracting from max to min
    Shrinking,
    /// Sweep closing to a full circle
    Completing,
}

/// Receives the end of the complete transition.
pub trait ArcObserver {
    /// Called once when the arc has closed into a full circle.
    fn on_arc_complete(&mut self);
}

impl<F: FnMut()> ArcObserver for F {
    fn on_arc_complete(&mut self) {
        self();
    }
}

/// Where to draw the arc, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcAngles {
    /// Start angle in `[0, 360)`
    pub start: f32,
    /// Sweep length
    pub sweep: f32,
}

/// Drives rotation and sweep of the indeterminate arc.
#[derive(Debug, Clone)]
pub struct ArcController {
    sweep_range: SweepRange,
    /// Range captured by the last `start()`; the running cycle reads only this.
    active_range: SweepRange,
    durations: ArcDurations,
    rotation: f32,
    sweep: f32,
    rotation_offset: f32,
    growing: bool,
    complete_pending: bool,
    phase: ArcPhase,
    rotate_anim: ValueAnimator,
    grow_anim: ValueAnimator,
    shrink_anim: ValueAnimator,
    complete_anim: ValueAnimator,
}

impl Default for ArcController {
    fn default() -> Self {
        Self::new(SweepRange::default(), ArcDurations::default())
    }
}

impl ArcController {
    /// Create an idle controller.
    #[must_use]
    pub fn new(sweep_range: SweepRange, durations: ArcDurations) -> Self {
        let mut controller = Self {
            sweep_range,
            active_range: sweep_range,
            durations,
            rotation: 0.0,
            sweep: 0.0,
            rotation_offset: 0.0,
            growing: true,
            complete_pending: false,
            phase: ArcPhase::Idle,
            rotate_anim: ValueAnimator::new(0.0, 360.0, 0.0),
            grow_anim: ValueAnimator::new(0.0, 0.0, 0.0),
            shrink_anim: ValueAnimator::new(0.0, 0.0, 0.0),
            complete_anim: ValueAnimator::new(0.0, 360.0, 0.0),
        };
        controller.build_animators();
        controller
    }

    /// Create an idle controller configured from a style.
    #[must_use]
    pub fn from_style(style: &FabProgressStyle) -> Self {
        Self::new(style.sweep_range(), style.durations())
    }

    fn build_animators(&mut self) {
        let min = f64::from(self.active_range.min());
        let max = f64::from(self.active_range.max());
        self.rotate_anim = ValueAnimator::new(0.0, 360.0, self.durations.rotation_secs())
            .with_easing(Easing::Linear)
            .with_repeat(RepeatMode::Restart);
        self.grow_anim =
            ValueAnimator::new(min, max, self.durations.grow_secs()).with_easing(Easing::EaseOut);
        self.shrink_anim =
            ValueAnimator::new(max, min, self.durations.shrink_secs()).with_easing(Easing::EaseOut);
        self.complete_anim = ValueAnimator::new(min, 360.0, self.durations.complete_secs())
            .with_easing(Easing::EaseOut);
    }

    /// Replace the sweep bounds. Applies from the next `start()`.
    pub fn set_sweep_range(&mut self, sweep_range: SweepRange) {
        self.sweep_range = sweep_range;
    }

    /// Replace the phase durations. Applies from the next `start()`.
    pub fn set_durations(&mut self, durations: ArcDurations) {
        self.durations = durations;
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Zero all angles and begin the indeterminate loop.
    pub fn start(&mut self) {
        self.zero_angles();
        self.complete_pending = false;
        self.active_range = self.sweep_range;
        self.build_animators();
        self.growing = true;
        self.phase = ArcPhase::Growing;
        self.rotate_anim.start();
        self.grow_anim.start();
        debug!(
            min = self.active_range.min(),
            max = self.active_range.max(),
            "arc started"
        );
    }

    /// Cancel every animator. Angles keep their last values.
    pub fn stop(&mut self) {
        let was = self.phase;
        if let Some(end) = self.grow_anim.cancel() {
            self.on_grow_end(end);
        }
        if let Some(end) = self.shrink_anim.cancel() {
            self.on_shrink_end(end);
        }
        if let Some(end) = self.complete_anim.cancel() {
            self.on_complete_end(end, &mut || {});
        }
        self.rotate_anim.cancel();
        self.complete_pending = false;
        self.phase = ArcPhase::Idle;
        if was != ArcPhase::Idle {
            debug!(from = ?was, "arc stopped");
        }
    }

    /// Stop, then start over from zeroed angles.
    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    /// Stop and zero all angles, leaving the controller idle.
    pub fn clear(&mut self) {
        self.stop();
        self.zero_angles();
        self.growing = true;
    }

    /// Latch a request to close the arc at the end of the current shrink.
    ///
    /// Returns `false` (and changes nothing) when idle, already completing or
    /// already latched.
    pub fn request_complete(&mut self) -> bool {
        if !self.is_running() || self.phase == ArcPhase::Completing || self.complete_pending {
            debug!(phase = ?self.phase, latched = self.complete_pending, "complete request ignored");
            return false;
        }
        self.complete_pending = true;
        debug!(phase = ?self.phase, "complete request latched");
        true
    }

    /// Advance all running animators by `dt` seconds.
    pub fn advance(&mut self, dt: f64, observer: &mut dyn ArcObserver) {
        if self.phase == ArcPhase::Idle {
            return;
        }

        self.rotate_anim.update(dt);
        self.rotation = normalize(self.rotate_anim.value() as f32);

        match self.phase {
            ArcPhase::Growing => {
                let end = self.grow_anim.update(dt);
                self.sweep = self.clamp_sweep(self.grow_anim.value());
                if let Some(end) = end {
                    self.on_grow_end(end);
                }
            }
            ArcPhase::Shrinking => {
                let end = self.shrink_anim.update(dt);
                self.sweep = self.clamp_sweep(self.shrink_anim.value());
                if let Some(end) = end {
                    self.on_shrink_end(end);
                }
            }
            ArcPhase::Completing => {
                let end = self.complete_anim.update(dt);
                self.sweep = self.complete_anim.value() as f32;
                if let Some(end) = end {
                    self.on_complete_end(end, observer);
                }
            }
            ArcPhase::Idle => {}
        }
        trace!(
            rotation = self.rotation,
            sweep = self.sweep,
            offset = self.rotation_offset,
            "arc frame"
        );
    }

    // =========================================================================
    // Phase transitions
    // =========================================================================

    fn on_grow_end(&mut self, end: AnimationEnd) {
        if !end.is_completed() {
            return;
        }
        self.growing = false;
        self.rotation_offset = normalize(self.rotation_offset + 360.0 - self.active_range.max());
        self.phase = ArcPhase::Shrinking;
        self.shrink_anim.start();
        debug!(offset = self.rotation_offset, "arc shrinking");
    }

    fn on_shrink_end(&mut self, end: AnimationEnd) {
        if !end.is_completed() {
            return;
        }
        self.growing = true;
        self.rotation_offset = normalize(self.rotation_offset + self.active_range.min());
        if self.complete_pending {
            self.complete_pending = false;
            self.enter_completing();
        } else {
            self.phase = ArcPhase::Growing;
            self.grow_anim.start();
            debug!(offset = self.rotation_offset, "arc growing");
        }
    }

    fn enter_completing(&mut self) {
        let complete = self.durations.complete_secs();
        self.complete_anim.set_range(f64::from(self.sweep), 360.0);
        self.complete_anim.start();
        self.rotate_anim
            .rebase(complete * COMPLETE_ROTATION_FACTOR, Easing::EaseOut);
        self.phase = ArcPhase::Completing;
        debug!(from_sweep = self.sweep, "arc completing");
    }

    fn on_complete_end(&mut self, end: AnimationEnd, observer: &mut dyn ArcObserver) {
        if !end.is_completed() {
            return;
        }
        self.rotate_anim.cancel();
        self.phase = ArcPhase::Idle;
        debug!("arc complete");
        observer.on_arc_complete();
    }

    fn zero_angles(&mut self) {
        self.rotation = 0.0;
        self.sweep = 0.0;
        self.rotation_offset = 0.0;
    }

    fn clamp_sweep(&self, value: f64) -> f32 {
        (value as f32).clamp(self.active_range.min(), self.active_range.max())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Start and sweep to draw this frame.
    ///
    /// The start trails by `360 - sweep` while shrinking so that the tail of
    /// the arc, not its head, keeps rotating.
    #[must_use]
    pub fn arc_angles(&self) -> ArcAngles {
        let mut start = self.rotation - self.rotation_offset;
        if !self.growing {
            start += 360.0 - self.sweep;
        }
        ArcAngles {
            start: normalize(start),
            sweep: self.sweep,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> ArcPhase {
        self.phase
    }

    /// Whether any phase is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase != ArcPhase::Idle
    }

    /// Rotation angle in `[0, 360)`.
    #[must_use]
    pub const fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Current sweep.
    #[must_use]
    pub const fn sweep(&self) -> f32 {
        self.sweep
    }

    /// Accumulated rotation offset in `[0, 360)`.
    #[must_use]
    pub const fn rotation_offset(&self) -> f32 {
        self.rotation_offset
    }

    /// Whether the sweep is expanding.
    #[must_use]
    pub const fn is_growing(&self) -> bool {
        self.growing
    }

    /// Whether a complete request is waiting for the end of the shrink.
    #[must_use]
    pub const fn is_complete_pending(&self) -> bool {
        self.complete_pending
    }

    /// Configured sweep bounds.
    #[must_use]
    pub const fn sweep_range(&self) -> SweepRange {
        self.sweep_range
    }

    /// Configured durations.
    #[must_use]
    pub const fn durations(&self) -> ArcDurations {
        self.durations
    }
}

fn normalize(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}
