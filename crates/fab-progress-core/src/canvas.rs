//! A canvas that records what was painted.

use crate::draw::{DrawCommand, StrokeStyle, Transform2D};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point};

/// Stores every paint call as a [`DrawCommand`].
///
/// A primitive drawn under a pushed transform or opacity is wrapped in
/// `Group`/`Opacity`, so one frame can be asserted on in tests or dumped as
/// JSON by the CLI.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform2D>,
    opacity_stack: Vec<f32>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded primitives with their transform/opacity wrappers stripped.
    pub fn primitives(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().map(DrawCommand::innermost)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands and state stacks.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack.clear();
        self.opacity_stack.clear();
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    /// Get the current layer opacity (1.0 if none pushed).
    #[must_use]
    pub fn current_opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    fn record(&mut self, command: DrawCommand) {
        let mut command = command;
        let transform = self.current_transform();
        if !transform.is_identity() {
            command = command.with_transform(transform);
        }
        let alpha = self.current_opacity();
        if alpha < 1.0 {
            command = command.with_opacity(alpha);
        }
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_path(&mut self, points: &[Point], style: &StrokeStyle) {
        self.record(DrawCommand::Path {
            points: points.to_vec(),
            style: style.clone(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.record(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        style: &StrokeStyle,
    ) {
        self.record(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
            style: style.clone(),
        });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let combined = transform.then(&self.current_transform());
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }

    fn push_opacity(&mut self, alpha: f32) {
        let combined = self.current_opacity() * alpha.clamp(0.0, 1.0);
        self.opacity_stack.push(combined);
    }

    fn pop_opacity(&mut self) {
        self.opacity_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new_is_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
        assert_eq!(canvas.current_opacity(), 1.0);
        assert!(canvas.current_transform().is_identity());
    }

    #[test]
    fn test_plain_command_is_unwrapped() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(5.0, 5.0), 3.0, Color::WHITE);
        assert_eq!(
            canvas.commands()[0],
            DrawCommand::filled_circle(Point::new(5.0, 5.0), 3.0, Color::WHITE)
        );
    }

    #[test]
    fn test_opacity_stack_multiplies() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_opacity(0.5);
        canvas.push_opacity(0.5);
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::BLACK);
        canvas.pop_opacity();
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::BLACK);
        canvas.pop_opacity();
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::BLACK);

        let alphas: Vec<f32> = canvas
            .commands()
            .iter()
            .map(DrawCommand::effective_alpha)
            .collect();
        assert_eq!(alphas, vec![0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_transform_is_recorded() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::scale(2.0, 2.0));
        canvas.push_transform(Transform2D::translate(1.0, 0.0));
        // Inner transform applies first.
        let p = canvas.current_transform().apply(Point::ORIGIN);
        assert_eq!(p, Point::new(2.0, 0.0));

        canvas.stroke_arc(Point::ORIGIN, 10.0, 0.0, 90.0, &StrokeStyle::default());
        assert!(matches!(canvas.commands()[0], DrawCommand::Group { .. }));
        assert!(matches!(
            canvas.primitives().next(),
            Some(DrawCommand::Arc { sweep_angle, .. }) if *sweep_angle == 90.0
        ));
    }

    #[test]
    fn test_clear_resets_commands_and_stacks() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("ok", Point::ORIGIN, &TextStyle::default());
        canvas.draw_path(&[Point::ORIGIN, Point::new(1.0, 1.0)], &StrokeStyle::default());
        assert_eq!(canvas.command_count(), 2);

        canvas.push_opacity(0.1);
        canvas.push_transform(Transform2D::translate(3.0, 3.0));
        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.current_opacity(), 1.0);
        assert!(canvas.current_transform().is_identity());
    }
}
