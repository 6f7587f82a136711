//! Integration tests for recording and serializing painted frames.

use fab_progress_core::{
    Canvas, Color, DrawCommand, Point, RecordingCanvas, StrokeStyle, TextStyle, Transform2D,
};

fn paint_frame(canvas: &mut dyn Canvas) {
    let center = Point::new(30.0, 30.0);
    canvas.fill_circle(center, 28.0, Color::WHITE);
    canvas.push_transform(Transform2D::scale_about(center, 0.5));
    canvas.push_opacity(0.5);
    canvas.stroke_arc(
        center,
        28.0,
        -90.0,
        120.0,
        &StrokeStyle {
            color: Color::rgb(0.96, 0.49, 0.0),
            width: 4.0,
            ..StrokeStyle::default()
        },
    );
    canvas.pop_opacity();
    canvas.pop_transform();
    canvas.draw_text("✓", center, &TextStyle::default());
}

#[test]
fn test_frame_records_in_paint_order() {
    let mut canvas = RecordingCanvas::new();
    paint_frame(&mut canvas);

    let kinds: Vec<&str> = canvas
        .primitives()
        .map(|cmd| match cmd {
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Arc { .. } => "arc",
            DrawCommand::Text { .. } => "text",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["circle", "arc", "text"]);
    assert!((canvas.commands()[1].effective_alpha() - 0.5).abs() < 1e-6);
    assert_eq!(canvas.commands()[2].effective_alpha(), 1.0);
}

#[test]
fn test_frame_serializes_to_json() {
    let mut canvas = RecordingCanvas::new();
    paint_frame(&mut canvas);

    let json = serde_json::to_string(canvas.commands()).unwrap();
    let back: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), canvas.command_count());
    assert!(json.contains("\"Arc\""));
    assert!(json.contains("sweep_angle"));
}
