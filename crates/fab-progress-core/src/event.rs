//! Pointer and key input delivered to widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// An input event, in the coordinates of the root widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse button pressed
    MouseDown {
        /// Where the press happened
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Where the release happened
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Pointer entered the widget
    MouseEnter,
    /// Pointer left the widget
    MouseLeave,
    /// Finger down
    TouchStart {
        /// Contact point
        position: Point,
    },
    /// Finger up
    TouchEnd {
        /// Last contact point
        position: Point,
    },
    /// Key pressed
    KeyDown {
        /// The key
        key: Key,
    },
    /// Key released
    KeyUp {
        /// The key
        key: Key,
    },
}

impl Event {
    /// Whether the event comes from a mouse or a touch screen rather than
    /// the keyboard.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        !matches!(self, Self::KeyDown { .. } | Self::KeyUp { .. })
    }
}

/// Mouse buttons. Only the primary one activates a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
}

/// Keys that activate a focused button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Space bar
    Space,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_events() {
        let down = Event::MouseDown {
            position: Point::new(1.0, 2.0),
            button: MouseButton::Right,
        };
        assert!(down.is_pointer());
        assert!(Event::MouseLeave.is_pointer());
        assert!(Event::TouchEnd {
            position: Point::ORIGIN
        }
        .is_pointer());
    }

    #[test]
    fn test_key_events_are_not_pointer() {
        assert!(!Event::KeyDown { key: Key::Enter }.is_pointer());
        assert!(!Event::KeyUp { key: Key::Space }.is_pointer());
    }
}
