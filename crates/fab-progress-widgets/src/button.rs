//! Circular floating action button.

use crate::style::CircleSize;
use fab_progress_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Circular action button with an icon glyph and click handling.
#[derive(Clone, Serialize, Deserialize)]
pub struct FloatingActionButton {
    /// Icon glyph drawn in the center
    icon: String,
    /// Preset diameter
    size: CircleSize,
    /// Background color (normal state)
    background: Color,
    /// Background color (hover state)
    background_hover: Color,
    /// Background color (pressed state)
    background_pressed: Color,
    /// Icon color
    icon_color: Color,
    /// Whether button is disabled
    disabled: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name: Option<String>,
    #[serde(skip)]
    hovered: bool,
    #[serde(skip)]
    pressed: bool,
    #[serde(skip)]
    bounds: Rect,
}

/// Message emitted when the button is clicked.
#[derive(Debug, Clone)]
pub struct FabClicked;

impl FloatingActionButton {
    /// Create a normal-size button with an icon glyph.
    #[must_use]
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            size: CircleSize::Normal,
            background: Color::from_hex("#ff4081").unwrap_or(Color::BLACK),
            background_hover: Color::from_hex("#f50057").unwrap_or(Color::BLACK),
            background_pressed: Color::from_hex("#c51162").unwrap_or(Color::BLACK),
            icon_color: Color::WHITE,
            disabled: false,
            test_id_value: None,
            accessible_name: None,
            hovered: false,
            pressed: false,
            bounds: Rect::default(),
        }
    }

    /// Set preset size.
    #[must_use]
    pub fn size(mut self, size: CircleSize) -> Self {
        self.size = size;
        self
    }

    /// Set background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set hover background color.
    #[must_use]
    pub fn background_hover(mut self, color: Color) -> Self {
        self.background_hover = color;
        self
    }

    /// Set pressed background color.
    #[must_use]
    pub fn background_pressed(mut self, color: Color) -> Self {
        self.background_pressed = color;
        self
    }

    /// Set icon color.
    #[must_use]
    pub fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = color;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name = Some(name.into());
        self
    }

    /// Diameter in pixels.
    #[must_use]
    pub const fn diameter(&self) -> f32 {
        self.size.diameter()
    }

    /// Whether the button is pressed.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn current_background(&self) -> Color {
        if self.disabled {
            let gray = (self.background.r + self.background.g + self.background.b) / 3.0;
            Color::rgb(gray, gray, gray)
        } else if self.pressed {
            self.background_pressed
        } else if self.hovered {
            self.background_hover
        } else {
            self.background
        }
    }

    fn radius(&self) -> f32 {
        self.bounds.width.min(self.bounds.height) / 2.0
    }

    /// Hit test against the circle, not the bounding box.
    fn hit(&self, position: &Point) -> bool {
        position.distance(&self.bounds.center()) <= self.radius()
    }
}

impl Widget for FloatingActionButton {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::square(self.diameter()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let center = self.bounds.center();
        canvas.fill_circle(center, self.radius(), self.current_background());

        let style = TextStyle {
            size: self.diameter() * 0.43,
            color: if self.disabled {
                Color::rgb(0.7, 0.7, 0.7)
            } else {
                self.icon_color
            },
            weight: FontWeight::Medium,
        };
        canvas.draw_text(&self.icon, center, &style);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseEnter => {
                self.hovered = true;
                None
            }
            Event::MouseLeave => {
                self.hovered = false;
                self.pressed = false;
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Event::TouchStart { position } => {
                if self.hit(position) {
                    self.pressed = true;
                }
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            }
            | Event::TouchEnd { position } => {
                let was_pressed = self.pressed;
                self.pressed = false;

                if was_pressed && self.hit(position) {
                    Some(Box::new(FabClicked))
                } else {
                    None
                }
            }
            Event::KeyDown {
                key: Key::Enter | Key::Space,
            } => {
                self.pressed = true;
                None
            }
            Event::KeyUp {
                key: Key::Enter | Key::Space,
            } => {
                self.pressed = false;
                Some(Box::new(FabClicked))
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name.as_deref().or(Some(&self.icon))
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fab_progress_core::{DrawCommand, RecordingCanvas};

    fn laid_out() -> FloatingActionButton {
        let mut fab = FloatingActionButton::new("+");
        fab.layout(Rect::new(0.0, 0.0, 56.0, 56.0));
        fab
    }

    fn click(fab: &mut FloatingActionButton, at: Point) -> bool {
        fab.event(&Event::MouseDown {
            position: at,
            button: MouseButton::Left,
        });
        fab.event(&Event::MouseUp {
            position: at,
            button: MouseButton::Left,
        })
        .is_some_and(|msg| msg.downcast_ref::<FabClicked>().is_some())
    }

    #[test]
    fn test_fab_builder() {
        let fab = FloatingActionButton::new("+")
            .size(CircleSize::Mini)
            .disabled(true)
            .with_test_id("upload");
        assert_eq!(fab.diameter(), 40.0);
        assert!(fab.disabled);
        assert_eq!(Widget::test_id(&fab), Some("upload"));
    }

    #[test]
    fn test_fab_measure() {
        let fab = FloatingActionButton::new("+");
        assert_eq!(fab.measure(Constraints::unbounded()), Size::square(56.0));
        assert_eq!(
            fab.measure(Constraints::loose(Size::square(30.0))),
            Size::square(30.0)
        );
    }

    #[test]
    fn test_fab_click_inside_circle() {
        let mut fab = laid_out();
        assert!(click(&mut fab, Point::new(28.0, 28.0)));
    }

    #[test]
    fn test_fab_corner_is_outside_circle() {
        let mut fab = laid_out();
        assert!(!click(&mut fab, Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_fab_right_button_does_not_click() {
        let mut fab = laid_out();
        let at = Point::new(28.0, 28.0);
        fab.event(&Event::MouseDown {
            position: at,
            button: MouseButton::Right,
        });
        assert!(fab
            .event(&Event::MouseUp {
                position: at,
                button: MouseButton::Right,
            })
            .is_none());
    }

    #[test]
    fn test_fab_touch_click() {
        let mut fab = laid_out();
        let at = Point::new(30.0, 30.0);
        fab.event(&Event::TouchStart { position: at });
        assert!(fab.is_pressed());
        let msg = fab.event(&Event::TouchEnd { position: at });
        assert!(msg.is_some());
    }

    #[test]
    fn test_fab_keyboard() {
        let mut fab = laid_out();
        fab.event(&Event::KeyDown { key: Key::Space });
        assert!(fab.is_pressed());
        assert!(fab.event(&Event::KeyUp { key: Key::Space }).is_some());
    }

    #[test]
    fn test_fab_disabled_ignores_events() {
        let mut fab = laid_out().disabled(true);
        assert!(!click(&mut fab, Point::new(28.0, 28.0)));
        assert!(!fab.is_focusable());
    }

    #[test]
    fn test_fab_paint() {
        let fab = laid_out();
        let mut canvas = RecordingCanvas::new();
        fab.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::Circle { radius, .. } if radius == 28.0
        ));
    }

    #[test]
    fn test_fab_accessible() {
        let fab = FloatingActionButton::new("+").with_accessible_name("Upload");
        assert_eq!(Widget::accessible_name(&fab), Some("Upload"));
        assert_eq!(Widget::accessible_role(&fab), AccessibleRole::Button);
    }
}
