//! Host container: wraps one button, draws the progress arc around it and
//! swaps in the completion overlay when the arc closes.
//!
//! # Example
//!
//! ```
//! use fab_progress_core::{Rect, Widget};
//! use fab_progress_widgets::{FabProgressCircle, FabProgressStyle, FloatingActionButton};
//!
//! let mut circle = FabProgressCircle::builder()
//!     .child(FloatingActionButton::new("+"))
//!     .style(FabProgressStyle::default().with_reusable(true))
//!     .build()
//!     .unwrap();
//! circle.layout(Rect::new(0.0, 0.0, 60.0, 60.0));
//! circle.show();
//! circle.advance(0.2);
//! assert!(circle.is_running());
//! ```

use crate::complete_overlay::{CompleteOverlay, OverlayEvent};
use crate::error::{FabProgressError, Result};
use crate::progress_arc::{ArcViewEvent, ProgressArc};
use crate::style::{ms_to_secs, ArcDurations, CircleSize, FabProgressStyle, FinalIcon, SweepRange};
use fab_progress_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Rect, Size, TypeId, Widget,
};
use std::any::Any;
use tracing::{debug, info};

/// Receives the end of each completion sequence.
pub trait FabProgressListener: Send + Sync {
    /// Called once per completion, after the overlay entrance and the arc
    /// scale-down have both finished.
    fn on_fab_progress_animation_end(&mut self);
}

impl<F: FnMut() + Send + Sync> FabProgressListener for F {
    fn on_fab_progress_animation_end(&mut self) {
        self();
    }
}

/// Which parts of the completion sequence are still playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Finale {
    arc_done: bool,
    overlay_done: bool,
}

impl Finale {
    const fn is_done(self) -> bool {
        self.arc_done && self.overlay_done
    }
}

/// Progress circle around a floating action button.
pub struct FabProgressCircle {
    children: Vec<Box<dyn Widget>>,
    style: FabProgressStyle,
    arc: ProgressArc,
    overlay: Option<CompleteOverlay>,
    listener: Option<Box<dyn FabProgressListener>>,
    finale: Option<Finale>,
    views_added: bool,
    running: bool,
    completed: bool,
    test_id_value: Option<String>,
    bounds: Rect,
}

/// Builder for [`FabProgressCircle`].
#[derive(Default)]
pub struct FabProgressCircleBuilder {
    children: Vec<Box<dyn Widget>>,
    style: FabProgressStyle,
    listener: Option<Box<dyn FabProgressListener>>,
    test_id: Option<String>,
}

impl FabProgressCircleBuilder {
    /// Add a child. Exactly one is required.
    #[must_use]
    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Set the style.
    #[must_use]
    pub fn style(mut self, style: FabProgressStyle) -> Self {
        self.style = style;
        self
    }

    /// Attach a completion listener.
    #[must_use]
    pub fn listener(mut self, listener: impl FabProgressListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<FabProgressCircle> {
        let mut circle = FabProgressCircle::new(self.children, self.style)?;
        circle.listener = self.listener;
        circle.test_id_value = self.test_id;
        Ok(circle)
    }
}

impl FabProgressCircle {
    /// Start a builder.
    #[must_use]
    pub fn builder() -> FabProgressCircleBuilder {
        FabProgressCircleBuilder::default()
    }

    /// Wrap `children`, which must hold exactly one widget.
    pub fn new(children: Vec<Box<dyn Widget>>, style: FabProgressStyle) -> Result<Self> {
        if children.len() != 1 {
            return Err(FabProgressError::ChildCount {
                found: children.len(),
            });
        }
        style.validate()?;
        Ok(Self {
            children,
            arc: ProgressArc::new(&style),
            style,
            overlay: None,
            listener: None,
            finale: None,
            views_added: false,
            running: false,
            completed: false,
            test_id_value: None,
            bounds: Rect::default(),
        })
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Set the listener notified at the end of each completion sequence.
    pub fn attach_listener(&mut self, listener: impl FabProgressListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Show the arc after a short delay and start the indeterminate loop.
    ///
    /// Ignored once a non-reusable widget has completed, while the completion
    /// sequence is playing, and while an accepted final animation request is
    /// waiting for the current cycle to end.
    pub fn show(&mut self) {
        if self.completed {
            debug!("show ignored: widget completed and not reusable");
            return;
        }
        if self.finale.is_some() {
            debug!("show ignored: completion sequence playing");
            return;
        }
        if self.arc.controller().is_complete_pending() {
            debug!("show ignored: final animation already requested");
            return;
        }
        if let Some(mut overlay) = self.overlay.take() {
            overlay.hide_now();
        }
        self.arc.show();
        self.running = true;
        debug!("progress shown");
    }

    /// Abort: stop and fade out the arc. The listener is not notified.
    ///
    /// During the completion sequence this also drops the overlay and clears
    /// the arc, so the sequence never finishes.
    pub fn hide(&mut self) {
        if self.finale.take().is_some() {
            self.arc.reset_to_idle();
            if let Some(mut overlay) = self.overlay.take() {
                overlay.hide_now();
            }
            debug!("completion sequence aborted");
        } else {
            self.arc.stop();
        }
        self.running = false;
        debug!("progress hidden");
    }

    /// Ask the arc to close on its next cycle boundary.
    ///
    /// Returns `false` when the request is a no-op (not running, already
    /// completing or already requested).
    pub fn begin_final_animation(&mut self) -> bool {
        let accepted = self.arc.request_complete();
        if !accepted {
            debug!("final animation request ignored");
        }
        accepted
    }

    /// Advance all animations by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        match self.arc.advance(dt) {
            Some(ArcViewEvent::ArcCompleted) => self.on_arc_complete(),
            Some(ArcViewEvent::ScaleDownFinished) => {
                if let Some(finale) = self.finale.as_mut() {
                    finale.arc_done = true;
                }
            }
            None => {}
        }

        let overlay_event = self.overlay.as_mut().and_then(|o| o.advance(dt));
        match overlay_event {
            Some(OverlayEvent::EntranceFinished) => {
                if let Some(finale) = self.finale.as_mut() {
                    finale.overlay_done = true;
                }
            }
            Some(OverlayEvent::Dismissed) => {
                self.overlay = None;
            }
            None => {}
        }

        if self.finale.is_some_and(Finale::is_done) {
            self.finish_sequence();
        }
    }

    fn on_arc_complete(&mut self) {
        info!(
            show_final_icon = self.style.show_final_icon(),
            "arc complete"
        );
        let overlay_done = if self.style.show_final_icon() {
            let mut overlay =
                CompleteOverlay::new(self.style.arc_color(), self.style.final_icon().clone());
            overlay.layout(self.button_rect());
            overlay.play_entrance();
            self.overlay = Some(overlay);
            false
        } else {
            true
        };
        self.finale = Some(Finale {
            arc_done: false,
            overlay_done,
        });
        self.arc.start_scale_down();
    }

    fn finish_sequence(&mut self) {
        self.finale = None;
        self.running = false;
        if self.style.reusable() {
            self.arc.reset_to_idle();
            if let Some(overlay) = self.overlay.as_mut() {
                overlay.schedule_dismiss(ms_to_secs(self.style.final_icon_duration_ms()));
            }
        } else {
            self.completed = true;
        }
        info!(reusable = self.style.reusable(), "progress sequence finished");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_fab_progress_animation_end();
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Whether the arc is shown or animating.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a non-reusable widget reached its terminal state.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the overlay entrance / arc scale-down is playing.
    #[must_use]
    pub const fn is_finale_playing(&self) -> bool {
        self.finale.is_some()
    }

    /// Whether the first layout pass has run.
    #[must_use]
    pub const fn views_added(&self) -> bool {
        self.views_added
    }

    /// The arc view.
    #[must_use]
    pub const fn arc(&self) -> &ProgressArc {
        &self.arc
    }

    /// The completion overlay, while it exists.
    #[must_use]
    pub const fn overlay(&self) -> Option<&CompleteOverlay> {
        self.overlay.as_ref()
    }

    /// The wrapped button.
    #[must_use]
    pub fn child(&self) -> &dyn Widget {
        self.children[0].as_ref()
    }

    /// Current style.
    #[must_use]
    pub const fn style(&self) -> &FabProgressStyle {
        &self.style
    }

    // =========================================================================
    // Getters / setters
    // =========================================================================

    /// Replace the whole style.
    pub fn set_style(&mut self, style: FabProgressStyle) -> Result<()> {
        style.validate()?;
        self.style = style;
        self.arc.apply_style(&self.style);
        if self.views_added {
            self.layout(self.bounds);
        }
        Ok(())
    }

    fn update_style(&mut self, f: impl FnOnce(FabProgressStyle) -> FabProgressStyle) -> Result<()> {
        let style = f(self.style.clone());
        self.set_style(style)
    }

    /// Arc color.
    #[must_use]
    pub const fn get_arc_color(&self) -> Color {
        self.style.arc_color()
    }

    /// Set arc color (also tints the next overlay).
    pub fn set_arc_color(&mut self, color: Color) {
        self.style = self.style.clone().with_arc_color(color);
        self.arc.apply_style(&self.style);
    }

    /// Arc stroke width.
    #[must_use]
    pub const fn get_arc_width(&self) -> f32 {
        self.style.arc_width()
    }

    /// Set arc stroke width.
    pub fn set_arc_width(&mut self, width: f32) -> Result<()> {
        self.update_style(|s| s.with_arc_width(width))
    }

    /// Circle size.
    #[must_use]
    pub const fn get_circle_size(&self) -> CircleSize {
        self.style.circle_size()
    }

    /// Set circle size.
    pub fn set_circle_size(&mut self, size: CircleSize) -> Result<()> {
        self.update_style(|s| s.with_circle_size(size))
    }

    /// Whether the stroke cap is round.
    #[must_use]
    pub const fn is_rounded_stroke(&self) -> bool {
        self.style.rounded_stroke()
    }

    /// Set round vs butt stroke cap.
    pub fn set_rounded_stroke(&mut self, rounded: bool) {
        self.style = self.style.clone().with_rounded_stroke(rounded);
        self.arc.apply_style(&self.style);
    }

    /// Whether the widget resets after completion.
    #[must_use]
    pub const fn is_reusable(&self) -> bool {
        self.style.reusable()
    }

    /// Set reusable.
    pub fn set_reusable(&mut self, reusable: bool) {
        self.style = self.style.clone().with_reusable(reusable);
    }

    /// Overlay icon.
    #[must_use]
    pub const fn get_final_icon(&self) -> &FinalIcon {
        self.style.final_icon()
    }

    /// Set overlay icon.
    pub fn set_final_icon(&mut self, icon: FinalIcon) -> Result<()> {
        self.update_style(|s| s.with_final_icon(icon))
    }

    /// Whether the overlay is shown on completion.
    #[must_use]
    pub const fn is_show_final_icon(&self) -> bool {
        self.style.show_final_icon()
    }

    /// Show or skip the overlay on completion.
    pub fn set_show_final_icon(&mut self, show: bool) {
        self.style = self.style.clone().with_show_final_icon(show);
    }

    /// Overlay display time (ms) before a reusable widget hides it.
    #[must_use]
    pub const fn get_final_icon_duration(&self) -> u32 {
        self.style.final_icon_duration_ms()
    }

    /// Set overlay display time (ms).
    pub fn set_final_icon_duration(&mut self, ms: u32) {
        self.style = self.style.clone().with_final_icon_duration(ms);
    }

    /// Arc timings (ms).
    #[must_use]
    pub const fn get_durations(&self) -> ArcDurations {
        self.style.durations()
    }

    /// Complete duration (ms).
    #[must_use]
    pub const fn get_complete_arc_duration(&self) -> u32 {
        self.style.durations().complete_ms
    }

    /// Set complete duration (ms). Applies on the next start.
    pub fn set_complete_arc_duration(&mut self, ms: u32) -> Result<()> {
        self.update_style(|s| s.with_complete_duration(ms))
    }

    /// Rotation period (ms).
    #[must_use]
    pub const fn get_rotation_arc_duration(&self) -> u32 {
        self.style.durations().rotation_ms
    }

    /// Set rotation period (ms). Applies on the next start.
    pub fn set_rotation_arc_duration(&mut self, ms: u32) -> Result<()> {
        self.update_style(|s| s.with_rotation_duration(ms))
    }

    /// Grow duration (ms).
    #[must_use]
    pub const fn get_grow_arc_duration(&self) -> u32 {
        self.style.durations().grow_ms
    }

    /// Set grow duration (ms). Applies on the next start.
    pub fn set_grow_arc_duration(&mut self, ms: u32) -> Result<()> {
        self.update_style(|s| s.with_grow_duration(ms))
    }

    /// Shrink duration (ms).
    #[must_use]
    pub const fn get_shrink_arc_duration(&self) -> u32 {
        self.style.durations().shrink_ms
    }

    /// Set shrink duration (ms). Applies on the next start.
    pub fn set_shrink_arc_duration(&mut self, ms: u32) -> Result<()> {
        self.update_style(|s| s.with_shrink_duration(ms))
    }

    /// Sweep bounds.
    #[must_use]
    pub const fn get_sweep_range(&self) -> SweepRange {
        self.style.sweep_range()
    }

    /// Set sweep bounds. Applies on the next start.
    pub fn set_sweep_range(&mut self, range: SweepRange) {
        self.style = self.style.clone().with_sweep_range(range);
        self.arc.apply_style(&self.style);
    }

    // =========================================================================
    // Layout helpers
    // =========================================================================

    fn button_dimension(&self) -> f32 {
        self.style.circle_size().diameter()
    }

    fn button_rect(&self) -> Rect {
        Rect::centered(
            self.bounds.center(),
            Size::square(self.button_dimension()),
        )
    }

    fn arc_rect(&self) -> Rect {
        Rect::centered(
            self.bounds.center(),
            Size::square(self.button_dimension() + self.style.arc_width()),
        )
    }
}

impl Widget for FabProgressCircle {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let child = self.children[0].measure(Constraints::unbounded());
        let side = child
            .width
            .max(child.height)
            .max(self.button_dimension())
            + self.style.arc_width();
        constraints.constrain(Size::square(side))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        if !self.views_added {
            self.views_added = true;
            debug!(
                diameter = self.button_dimension(),
                arc_width = self.style.arc_width(),
                "arc view added"
            );
        }

        let button = self.button_rect();
        let arc = self.arc_rect();
        self.children[0].layout(button);
        self.arc.layout(arc);
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.layout(button);
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        // Children are not clipped: the arc extends past the button.
        self.children[0].paint(canvas);
        if self.views_added {
            self.arc.paint(canvas);
        }
        if let Some(overlay) = &self.overlay {
            overlay.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.overlay.as_ref().is_some_and(|o| o.consumes(event)) {
            return None;
        }
        self.children[0].event(event)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn is_interactive(&self) -> bool {
        self.children[0].is_interactive()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.children[0].accessible_name()
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.running {
            AccessibleRole::ProgressBar
        } else {
            self.children[0].accessible_role()
        }
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl std::fmt::Debug for FabProgressCircle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FabProgressCircle")
            .field("style", &self.style)
            .field("running", &self.running)
            .field("completed", &self.completed)
            .field("finale", &self.finale)
            .field("views_added", &self.views_added)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
