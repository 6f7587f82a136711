//! The [`Widget`] and [`Canvas`] traits.
//!
//! A parent drives each child through `measure`, then `layout` with the
//! rectangle it granted, then `paint`. Animation is outside that cycle:
//! animated widgets expose `advance(dt)` and the host calls it once per frame
//! on the painting thread.
//!
//! ```
//! use fab_progress_core::TypeId;
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::draw::{StrokeStyle, Transform2D};
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Identifies the concrete widget type behind a `dyn Widget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// What `layout` settled on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Size actually taken
    pub size: Size,
}

/// A node in the widget tree.
pub trait Widget: Send + Sync {
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept `bounds` and place children inside them.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Paint at the bounds from the last `layout`.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle one input event. A returned message means the event was consumed.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    fn children(&self) -> &[Box<dyn Widget>];

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Whether pointer input does anything.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether the widget takes keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Label announced by assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Stable handle for tests and frame dumps.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last `layout`.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Paint target. Only the calls the progress widgets make are here.
pub trait Canvas {
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Stroke an open polyline.
    fn draw_path(&mut self, points: &[Point], style: &StrokeStyle);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Stroke an arc. Angles are degrees, clockwise from the positive x axis.
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        style: &StrokeStyle,
    );

    /// Apply `transform` to everything drawn until the matching pop.
    fn push_transform(&mut self, transform: Transform2D);

    fn pop_transform(&mut self);

    /// Push a layer opacity, multiplied into any enclosing opacity.
    fn push_opacity(&mut self, alpha: f32);

    fn pop_opacity(&mut self);
}

/// How a glyph string is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

/// Role reported to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Button
    Button,
    /// Image
    Image,
    /// Progress bar
    ProgressBar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id() {
        assert_eq!(TypeId::of::<u32>(), TypeId::of::<u32>());
        assert_ne!(TypeId::of::<u32>(), TypeId::of::<String>());
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.weight, FontWeight::Normal);
        assert_eq!(style.color, Color::BLACK);
    }

    #[test]
    fn test_accessible_role_default() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
    }

    #[test]
    fn test_layout_result_default() {
        assert_eq!(LayoutResult::default().size, Size::ZERO);
    }
}
