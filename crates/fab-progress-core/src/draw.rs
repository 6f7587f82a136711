//! Recorded paint primitives and the affine transforms applied to them.

use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// How a line or arc is stroked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// End cap
    pub cap: LineCap,
    /// Corner join
    pub join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

/// End cap of an open stroke. The progress arc switches between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Ends exactly at the endpoint
    #[default]
    Butt,
    /// Half-disc past the endpoint
    Round,
}

/// Corner join of a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    /// Pointed corner
    #[default]
    Miter,
    /// Rounded corner, used by the checkmark
    Round,
}

/// Affine 2D transform stored column-major as `[a, b, c, d, e, f]`:
///
/// ```text
/// | a c e |
/// | b d f |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// No-op transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Move by `(x, y)`.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Scale about the origin.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            matrix: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Uniform scale that leaves `pivot` fixed.
    #[must_use]
    pub fn scale_about(pivot: Point, factor: f32) -> Self {
        Self::translate(-pivot.x, -pivot.y)
            .then(&Self::scale(factor, factor))
            .then(&Self::translate(pivot.x, pivot.y))
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.matrix == Self::identity().matrix
    }

    /// `self` followed by `next`: `a.then(b).apply(p) == b.apply(a.apply(p))`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let n = next.matrix;
        let m = self.matrix;
        Self {
            matrix: [
                n[0] * m[0] + n[2] * m[1],
                n[1] * m[0] + n[3] * m[1],
                n[0] * m[2] + n[2] * m[3],
                n[1] * m[2] + n[3] * m[3],
                n[0] * m[4] + n[2] * m[5] + n[4],
                n[1] * m[4] + n[3] * m[5] + n[5],
            ],
        }
    }

    /// Map a point through the transform.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }
}

/// One recorded paint call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Open polyline
    Path {
        /// Vertices in order
        points: Vec<Point>,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Filled disc
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        fill: Color,
    },

    /// Stroked arc. Angles are degrees, clockwise from the positive x axis.
    Arc {
        /// Center point
        center: Point,
        /// Radius of the stroke centerline
        radius: f32,
        /// Start angle
        start_angle: f32,
        /// Sweep
        sweep_angle: f32,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Single line of text
    Text {
        /// Text content
        content: String,
        /// Baseline-left anchor
        position: Point,
        /// Text style
        style: crate::widget::TextStyle,
    },

    /// Children drawn under a transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform in effect
        transform: Transform2D,
    },

    /// Child drawn at reduced opacity
    Opacity {
        /// Layer alpha in [0.0, 1.0]
        alpha: f32,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, fill: Color) -> Self {
        Self::Circle {
            center,
            radius,
            fill,
        }
    }

    #[must_use]
    pub fn with_transform(self, transform: Transform2D) -> Self {
        Self::Group {
            children: vec![self],
            transform,
        }
    }

    #[must_use]
    pub fn with_opacity(self, alpha: f32) -> Self {
        Self::Opacity {
            alpha,
            child: Box::new(self),
        }
    }

    /// The primitive under any `Group`/`Opacity` wrappers.
    #[must_use]
    pub fn innermost(&self) -> &Self {
        match self {
            Self::Opacity { child, .. } => child.innermost(),
            Self::Group { children, .. } if children.len() == 1 => children[0].innermost(),
            other => other,
        }
    }

    /// Product of the wrapper alphas around the primitive.
    #[must_use]
    pub fn effective_alpha(&self) -> f32 {
        match self {
            Self::Opacity { alpha, child } => alpha * child.effective_alpha(),
            Self::Group { children, .. } if children.len() == 1 => children[0].effective_alpha(),
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_style_default() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.width, 1.0);
        assert_eq!(style.cap, LineCap::Butt);
        assert_eq!(style.join, LineJoin::Miter);
    }

    #[test]
    fn test_transform_translate() {
        let p = Transform2D::translate(10.0, 20.0).apply(Point::ORIGIN);
        assert_eq!(p, Point::new(10.0, 20.0));
    }

    #[test]
    fn test_transform_scale_about_keeps_pivot() {
        let pivot = Point::new(50.0, 50.0);
        let t = Transform2D::scale_about(pivot, 0.5);
        assert_eq!(t.apply(pivot), pivot);
        assert_eq!(t.apply(Point::new(60.0, 50.0)), Point::new(55.0, 50.0));
    }

    #[test]
    fn test_transform_identity() {
        assert!(Transform2D::identity().is_identity());
        assert!(Transform2D::default().is_identity());
        assert!(!Transform2D::scale(2.0, 2.0).is_identity());
    }

    #[test]
    fn test_innermost_and_alpha() {
        let cmd = DrawCommand::filled_circle(Point::ORIGIN, 4.0, Color::WHITE)
            .with_transform(Transform2D::scale(2.0, 2.0))
            .with_opacity(0.5)
            .with_opacity(0.5);
        assert!(matches!(cmd.innermost(), DrawCommand::Circle { radius, .. } if *radius == 4.0));
        assert!((cmd.effective_alpha() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_bare_primitive_has_full_alpha() {
        let cmd = DrawCommand::filled_circle(Point::ORIGIN, 1.0, Color::BLACK);
        assert_eq!(cmd.innermost(), &cmd);
        assert_eq!(cmd.effective_alpha(), 1.0);
    }
}
