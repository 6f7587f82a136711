//! The arc view drawn around the wrapped button.

use crate::arc_controller::{ArcAngles, ArcController};
use crate::style::FabProgressStyle;
use fab_progress_core::{
    widget::{AccessibleRole, LayoutResult},
    AnimationEnd, Canvas, Color, Constraints, Delay, Easing, Event, LineCap, Rect, Size,
    StrokeStyle, Transform2D, TypeId, ValueAnimator, Widget,
};
use std::any::Any;
use tracing::debug;

/// Wait before the arc appears so the button's own entrance can settle.
pub const SHOW_DELAY_SECS: f64 = 0.15;
/// Fade-out time of `stop()`.
pub const FADE_OUT_SECS: f64 = 0.1;
/// Length of the scale-down played when the arc completes.
pub const SCALE_DOWN_SECS: f64 = 0.15;
/// Extra gap the scaled-down arc leaves around the button.
const SCALE_DOWN_MARGIN: f32 = 5.0;

/// Something the arc view finished during `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcViewEvent {
    /// The arc closed into a full circle.
    ArcCompleted,
    /// The completion scale-down ended and the arc is transparent.
    ScaleDownFinished,
}

/// Arc view: an [`ArcController`] plus the view-level alpha and scale.
#[derive(Debug, Clone)]
pub struct ProgressArc {
    controller: ArcController,
    color: Color,
    width: f32,
    rounded: bool,
    alpha: f32,
    scale: f32,
    show_delay: Delay,
    fade_out: ValueAnimator,
    scale_down: ValueAnimator,
    bounds: Rect,
}

impl ProgressArc {
    /// Create a hidden, idle arc.
    #[must_use]
    pub fn new(style: &FabProgressStyle) -> Self {
        Self {
            controller: ArcController::from_style(style),
            color: style.arc_color(),
            width: style.arc_width(),
            rounded: style.rounded_stroke(),
            alpha: 0.0,
            scale: 1.0,
            show_delay: Delay::new(SHOW_DELAY_SECS),
            fade_out: ValueAnimator::new(1.0, 0.0, FADE_OUT_SECS),
            scale_down: ValueAnimator::new(1.0, 1.0, SCALE_DOWN_SECS).with_easing(Easing::EaseOut),
            bounds: Rect::default(),
        }
    }

    /// Push style fields into the view. Timings and sweep bounds apply on the
    /// next start.
    pub fn apply_style(&mut self, style: &FabProgressStyle) {
        self.color = style.arc_color();
        self.width = style.arc_width();
        self.rounded = style.rounded_stroke();
        self.controller.set_durations(style.durations());
        self.controller.set_sweep_range(style.sweep_range());
    }

    /// Become visible and restart the arc after the show delay.
    pub fn show(&mut self) {
        self.show_delay.arm();
    }

    /// Stop the arc and fade it out.
    pub fn stop(&mut self) {
        self.show_delay.disarm();
        self.controller.stop();
        if self.alpha > 0.0 {
            self.fade_out.set_range(f64::from(self.alpha), 0.0);
            self.fade_out.start();
        }
    }

    /// Restart the arc from zero at full scale.
    pub fn reset(&mut self) {
        self.scale_down.cancel();
        self.scale = 1.0;
        self.controller.reset();
    }

    /// Clear everything back to the hidden, idle state of a fresh view.
    pub fn reset_to_idle(&mut self) {
        self.show_delay.disarm();
        self.fade_out.cancel();
        self.scale_down.cancel();
        self.controller.clear();
        self.alpha = 0.0;
        self.scale = 1.0;
    }

    /// Forward a complete request to the controller.
    pub fn request_complete(&mut self) -> bool {
        self.controller.request_complete()
    }

    /// Shrink toward the button so the arc tucks under the overlay.
    pub fn start_scale_down(&mut self) {
        let size = self.bounds.width;
        let target = if size > 0.0 {
            size / (size + self.width + SCALE_DOWN_MARGIN)
        } else {
            1.0
        };
        self.scale_down
            .set_range(f64::from(self.scale), f64::from(target));
        self.scale_down.start();
        debug!(target, "arc scale-down");
    }

    /// Advance timers and animators by `dt` seconds.
    pub fn advance(&mut self, dt: f64) -> Option<ArcViewEvent> {
        let mut event = None;

        // The frame the delay fires draws the freshly reset arc unstepped.
        let shown = self.show_delay.tick(dt);
        if shown {
            self.fade_out.cancel();
            self.alpha = 1.0;
            self.reset();
            debug!("arc shown");
        }

        if self.fade_out.is_running() {
            self.fade_out.update(dt);
            self.alpha = self.fade_out.value() as f32;
        }

        if !shown {
            let mut completed = false;
            self.controller.advance(dt, &mut || completed = true);
            if completed {
                event = Some(ArcViewEvent::ArcCompleted);
            }
        }

        if self.scale_down.is_running() {
            let end = self.scale_down.update(dt);
            self.scale = self.scale_down.value() as f32;
            if end == Some(AnimationEnd::Completed) {
                self.alpha = 0.0;
                event = Some(ArcViewEvent::ScaleDownFinished);
            }
        }

        event
    }

    /// Whether the arc is waiting out its show delay.
    #[must_use]
    pub const fn is_show_pending(&self) -> bool {
        self.show_delay.is_armed()
    }

    /// Whether the completion scale-down is playing.
    #[must_use]
    pub const fn is_scaling_down(&self) -> bool {
        self.scale_down.is_running()
    }

    /// View alpha.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// View scale about its center.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Angles drawn this frame.
    #[must_use]
    pub fn angles(&self) -> ArcAngles {
        self.controller.arc_angles()
    }

    /// The underlying state machine.
    #[must_use]
    pub const fn controller(&self) -> &ArcController {
        &self.controller
    }

    fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color,
            width: self.width,
            cap: if self.rounded {
                LineCap::Round
            } else {
                LineCap::Butt
            },
            ..StrokeStyle::default()
        }
    }
}

impl Widget for ProgressArc {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.bounds.size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let angles = self.angles();
        if self.alpha <= 0.0 || angles.sweep <= 0.0 || self.bounds.width <= 0.0 {
            return;
        }

        let center = self.bounds.center();
        // The stroke is centered on the radius, keep it inside the bounds.
        let radius = (self.bounds.width.min(self.bounds.height) - self.width) / 2.0;

        let scaled = (self.scale - 1.0).abs() > f32::EPSILON;
        if scaled {
            canvas.push_transform(Transform2D::scale_about(center, self.scale));
        }
        canvas.push_opacity(self.alpha);
        canvas.stroke_arc(
            center,
            radius,
            angles.start,
            angles.sweep,
            &self.stroke_style(),
        );
        canvas.pop_opacity();
        if scaled {
            canvas.pop_transform();
        }
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ProgressBar
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc_controller::ArcPhase;
    use fab_progress_core::{DrawCommand, RecordingCanvas};

    const FRAME: f64 = 1.0 / 60.0;

    fn laid_out() -> ProgressArc {
        let mut arc = ProgressArc::new(&FabProgressStyle::default());
        arc.layout(Rect::new(0.0, 0.0, 60.0, 60.0));
        arc
    }

    #[test]
    fn test_new_is_hidden() {
        let arc = laid_out();
        assert_eq!(arc.alpha(), 0.0);
        assert_eq!(arc.scale(), 1.0);
        let mut canvas = RecordingCanvas::new();
        arc.paint(&mut canvas);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_show_waits_for_delay() {
        let mut arc = laid_out();
        arc.show();
        arc.advance(0.1);
        assert_eq!(arc.alpha(), 0.0);
        assert!(arc.is_show_pending());
        arc.advance(0.06);
        assert_eq!(arc.alpha(), 1.0);
        assert_eq!(arc.controller().phase(), ArcPhase::Growing);
    }

    #[test]
    fn test_first_shown_frame_starts_from_zero() {
        let mut arc = laid_out();
        arc.show();
        arc.advance(0.2);
        assert_eq!(arc.alpha(), 1.0);
        assert_eq!(arc.controller().rotation(), 0.0);
        assert_eq!(arc.angles().sweep, 0.0);

        arc.advance(FRAME);
        assert!(arc.controller().rotation() > 0.0);
        assert!(arc.angles().sweep >= 20.0);
    }

    #[test]
    fn test_paint_arc_inside_bounds() {
        let mut arc = laid_out();
        arc.show();
        arc.advance(0.2);
        arc.advance(FRAME);

        let mut canvas = RecordingCanvas::new();
        arc.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 1);
        match canvas.commands()[0].innermost() {
            DrawCommand::Arc {
                center,
                radius,
                style,
                ..
            } => {
                assert_eq!(center.x, 30.0);
                assert_eq!(*radius, 28.0);
                assert_eq!(style.width, 4.0);
                assert_eq!(style.cap, LineCap::Butt);
            }
            other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn test_stop_fades_out() {
        let mut arc = laid_out();
        arc.show();
        arc.advance(0.2);
        arc.stop();
        assert!(!arc.controller().is_running());
        arc.advance(0.05);
        assert!(arc.alpha() > 0.0 && arc.alpha() < 1.0);
        arc.advance(0.06);
        assert_eq!(arc.alpha(), 0.0);
    }

    #[test]
    fn test_stop_during_show_delay_cancels_show() {
        let mut arc = laid_out();
        arc.show();
        arc.stop();
        arc.advance(1.0);
        assert_eq!(arc.alpha(), 0.0);
        assert!(!arc.controller().is_running());
    }

    #[test]
    fn test_scale_down_ends_transparent() {
        let mut arc = laid_out();
        arc.show();
        arc.advance(0.2);
        arc.start_scale_down();
        assert!(arc.is_scaling_down());

        let mut finished = false;
        for _ in 0..20 {
            if arc.advance(FRAME) == Some(ArcViewEvent::ScaleDownFinished) {
                finished = true;
            }
        }
        assert!(finished);
        assert_eq!(arc.alpha(), 0.0);
        assert!((arc.scale() - 60.0 / 69.0).abs() < 1e-5);
    }

    #[test]
    fn test_arc_completed_event() {
        let mut arc = laid_out();
        arc.show();
        arc.advance(0.2);
        assert!(arc.request_complete());
        let events: Vec<_> = (0..600).filter_map(|_| arc.advance(FRAME)).collect();
        assert_eq!(events, vec![ArcViewEvent::ArcCompleted]);
    }

    #[test]
    fn test_reset_to_idle() {
        let mut arc = laid_out();
        arc.show();
        arc.advance(0.2);
        arc.start_scale_down();
        arc.advance(0.05);
        arc.reset_to_idle();
        assert_eq!(arc.alpha(), 0.0);
        assert_eq!(arc.scale(), 1.0);
        assert!(!arc.is_scaling_down());
        assert_eq!(arc.angles().sweep, 0.0);
    }

    #[test]
    fn test_apply_style_changes_paint() {
        let mut arc = laid_out();
        arc.apply_style(
            &FabProgressStyle::default()
                .with_rounded_stroke(true)
                .with_arc_color(Color::WHITE),
        );
        assert_eq!(arc.stroke_style().cap, LineCap::Round);
        assert_eq!(arc.stroke_style().color, Color::WHITE);
    }
}
