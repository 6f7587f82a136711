//! Completion overlay: a tinted disc with the final icon, painted above the
//! wrapped button once the arc has closed.

use crate::style::FinalIcon;
use fab_progress_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    AnimationEnd, Canvas, Color, Constraints, Easing, Event, LineCap, LineJoin, Point, Rect,
    Size, StrokeStyle, Transform2D, TypeId, ValueAnimator, Widget,
};
use std::any::Any;
use tracing::debug;

/// Overlay fade-in (and fade-out) time.
pub const FADE_SECS: f64 = 0.3;
/// Icon scale-in time.
pub const ICON_SCALE_SECS: f64 = 0.25;
/// Icon box side relative to the overlay diameter (24 of 56).
const ICON_FRACTION: f32 = 24.0 / 56.0;
const ICON_COLOR: Color = Color::WHITE;

/// Something the overlay finished during `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Fade-in and icon scale-in both ended.
    EntranceFinished,
    /// Fade-out ended and the overlay is hidden.
    Dismissed,
}

/// Tinted disc with the final icon.
#[derive(Debug, Clone)]
pub struct CompleteOverlay {
    tint: Color,
    icon: FinalIcon,
    alpha: f32,
    icon_scale: f32,
    visible: bool,
    fade_in: ValueAnimator,
    icon_scale_in: ValueAnimator,
    fade_out: ValueAnimator,
    bounds: Rect,
}

impl CompleteOverlay {
    /// Create a hidden overlay.
    #[must_use]
    pub fn new(tint: Color, icon: FinalIcon) -> Self {
        Self {
            tint,
            icon,
            alpha: 0.0,
            icon_scale: 0.0,
            visible: false,
            fade_in: ValueAnimator::new(0.0, 1.0, FADE_SECS).with_easing(Easing::EaseInOut),
            icon_scale_in: ValueAnimator::new(0.0, 1.0, ICON_SCALE_SECS)
                .with_easing(Easing::Linear),
            fade_out: ValueAnimator::new(1.0, 0.0, FADE_SECS).with_easing(Easing::EaseInOut),
            bounds: Rect::default(),
        }
    }

    /// Show and play the fade-in with the icon scaling up from zero.
    pub fn play_entrance(&mut self) {
        self.fade_out.cancel();
        self.visible = true;
        self.alpha = 0.0;
        self.icon_scale = 0.0;
        self.fade_in.start();
        self.icon_scale_in.start();
    }

    /// Fade out after `delay` seconds.
    pub fn schedule_dismiss(&mut self, delay: f64) {
        self.fade_out = ValueAnimator::new(f64::from(self.alpha), 0.0, FADE_SECS)
            .with_easing(Easing::EaseInOut)
            .with_start_delay(delay);
        self.fade_out.start();
        debug!(delay, "overlay dismiss scheduled");
    }

    /// Hide immediately, cancelling any animation.
    pub fn hide_now(&mut self) {
        self.fade_in.cancel();
        self.icon_scale_in.cancel();
        self.fade_out.cancel();
        self.visible = false;
        self.alpha = 0.0;
    }

    /// Advance animations by `dt` seconds.
    pub fn advance(&mut self, dt: f64) -> Option<OverlayEvent> {
        if !self.visible {
            return None;
        }

        let was_entering = self.is_animating();
        if self.fade_in.is_running() {
            self.fade_in.update(dt);
            self.alpha = self.fade_in.value() as f32;
        }
        if self.icon_scale_in.is_running() {
            self.icon_scale_in.update(dt);
            self.icon_scale = self.icon_scale_in.value() as f32;
        }
        if was_entering && !self.is_animating() {
            return Some(OverlayEvent::EntranceFinished);
        }

        if self.fade_out.is_running() {
            let end = self.fade_out.update(dt);
            self.alpha = self.fade_out.value() as f32;
            if end == Some(AnimationEnd::Completed) {
                self.visible = false;
                debug!("overlay dismissed");
                return Some(OverlayEvent::Dismissed);
            }
        }
        None
    }

    /// Whether the entrance is still playing.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.fade_in.is_running() || self.icon_scale_in.is_running()
    }

    /// Whether the overlay is on screen (including while fading).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a fade-out is pending or playing.
    #[must_use]
    pub const fn is_dismissing(&self) -> bool {
        self.fade_out.is_running()
    }

    /// Whether the overlay swallows `event` instead of letting it reach the
    /// button underneath.
    #[must_use]
    pub fn consumes(&self, event: &Event) -> bool {
        self.visible && event.is_pointer()
    }

    /// Overlay alpha.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Icon scale about the overlay center.
    #[must_use]
    pub const fn icon_scale(&self) -> f32 {
        self.icon_scale
    }

    /// Tint color.
    #[must_use]
    pub const fn tint(&self) -> Color {
        self.tint
    }

    /// Icon drawn in the center.
    #[must_use]
    pub const fn icon(&self) -> &FinalIcon {
        &self.icon
    }

    fn paint_icon(&self, canvas: &mut dyn Canvas, center: Point, side: f32) {
        let origin = Point::new(center.x - side / 2.0, center.y - side / 2.0);
        let to_box = |p: &Point| Point::new(origin.x + p.x * side, origin.y + p.y * side);
        let stroke = StrokeStyle {
            color: ICON_COLOR,
            width: (side / 8.0).max(1.0),
            cap: LineCap::Round,
            join: LineJoin::Round,
        };

        match &self.icon {
            FinalIcon::Checkmark => {
                let points: Vec<Point> = FinalIcon::CHECKMARK.iter().map(to_box).collect();
                canvas.draw_path(&points, &stroke);
            }
            FinalIcon::Path(unit) => {
                let points: Vec<Point> = unit.iter().map(to_box).collect();
                canvas.draw_path(&points, &stroke);
            }
            FinalIcon::Glyph(glyph) => {
                let style = TextStyle {
                    size: side,
                    color: ICON_COLOR,
                    weight: FontWeight::Bold,
                };
                canvas.draw_text(glyph, center, &style);
            }
        }
    }
}

impl Widget for CompleteOverlay {
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
        if !self.visible || self.alpha <= 0.0 {
            return;
        }
        let center = self.bounds.center();
        let diameter = self.bounds.width.min(self.bounds.height);

        canvas.push_opacity(self.alpha);
        canvas.fill_circle(center, diameter / 2.0, self.tint);
        if self.icon_scale > 0.0 {
            canvas.push_transform(Transform2D::scale_about(center, self.icon_scale));
            self.paint_icon(canvas, center, diameter * ICON_FRACTION);
            canvas.pop_transform();
        }
        canvas.pop_opacity();
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

    fn accessible_name(&self) -> Option<&str> {
        Some("Completed")
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
