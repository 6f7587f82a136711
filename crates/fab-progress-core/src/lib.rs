//! Core types and traits for the FAB progress circle widgets.
//!
//! This crate provides the foundation the widgets are built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - The [`Widget`] and [`Canvas`] traits plus [`RecordingCanvas`]
//! - Frame-driven animation: [`Easing`], [`ValueAnimator`], [`Delay`]

pub mod animation;
pub mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{AnimationEnd, Delay, Easing, RepeatMode, ValueAnimator};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, LineCap, LineJoin, StrokeStyle, Transform2D};
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget};
