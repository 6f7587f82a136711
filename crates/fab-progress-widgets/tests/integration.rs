//! Integration tests for fab-progress-widgets.
//!
//! These tests drive a progress circle frame by frame through its public API.

use fab_progress_core::{
    DrawCommand, Event, MouseButton, Point, RecordingCanvas, Rect, Widget,
};
use fab_progress_widgets::{
    ArcPhase, CircleSize, FabClicked, FabProgressCircle, FabProgressError, FabProgressStyle,
    FinalIcon, FloatingActionButton,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const FRAME: f64 = 1.0 / 60.0;

fn run(circle: &mut FabProgressCircle, secs: f64) {
    let frames = (secs / FRAME).ceil() as usize;
    for _ in 0..frames {
        circle.advance(FRAME);
    }
}

fn counting_circle(style: FabProgressStyle) -> (FabProgressCircle, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut circle = FabProgressCircle::builder()
        .child(FloatingActionButton::new("+").with_test_id("fab"))
        .style(style)
        .with_test_id("progress")
        .build()
        .expect("valid circle");
    circle.attach_listener(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    circle.layout(Rect::new(0.0, 0.0, 64.0, 64.0));
    (circle, calls)
}

fn click(circle: &mut FabProgressCircle) -> bool {
    let at = Point::new(32.0, 32.0);
    circle.event(&Event::MouseDown {
        position: at,
        button: MouseButton::Left,
    });
    circle
        .event(&Event::MouseUp {
            position: at,
            button: MouseButton::Left,
        })
        .is_some_and(|msg| msg.downcast_ref::<FabClicked>().is_some())
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_zero_children_fails() {
    let result = FabProgressCircle::new(Vec::new(), FabProgressStyle::default());
    assert!(matches!(
        result,
        Err(FabProgressError::ChildCount { found: 0 })
    ));
}

#[test]
fn test_two_children_fails() {
    let result = FabProgressCircle::builder()
        .child(FloatingActionButton::new("+"))
        .child(FloatingActionButton::new("-"))
        .build();
    let err = result.expect_err("two children");
    assert!(err.to_string().contains('2'));
}

#[test]
fn test_style_from_yaml_builds_circle() {
    let style = FabProgressStyle::from_yaml(
        "arcColor: \"#2196f3\"\narcWidth: 6\ncircleSize: mini\nreusable: true\n",
    )
    .expect("valid yaml");
    let (circle, _) = counting_circle(style);
    assert_eq!(circle.get_circle_size(), CircleSize::Mini);
    assert_eq!(circle.child().bounds().width, 40.0);
    assert_eq!(circle.arc().bounds().width, 46.0);
    assert_eq!(Widget::test_id(&circle), Some("progress"));
    assert_eq!(circle.child().test_id(), Some("fab"));
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_show_appears_after_delay() {
    let (mut circle, _) = counting_circle(FabProgressStyle::default());
    circle.show();
    assert!(circle.is_running());
    run(&mut circle, 0.1);
    assert_eq!(circle.arc().alpha(), 0.0);
    run(&mut circle, 0.1);
    assert_eq!(circle.arc().alpha(), 1.0);
    assert_eq!(circle.arc().controller().phase(), ArcPhase::Growing);
}

#[test]
fn test_arc_stays_inside_sweep_range_while_looping() {
    let (mut circle, _) = counting_circle(FabProgressStyle::default());
    circle.show();
    run(&mut circle, 0.2);
    for _ in 0..600 {
        circle.advance(FRAME);
        let sweep = circle.arc().angles().sweep;
        assert!((20.0..=300.0).contains(&sweep), "sweep {sweep}");
    }
}

#[test]
fn test_full_sequence_notifies_once() {
    let (mut circle, calls) = counting_circle(FabProgressStyle::default());
    circle.show();
    run(&mut circle, 0.4);
    assert!(circle.begin_final_animation());
    run(&mut circle, 6.0);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let overlay = circle.overlay().expect("overlay shown");
    assert!(overlay.is_visible());
    assert_eq!(overlay.tint(), circle.get_arc_color());
    assert_eq!(overlay.icon(), &FinalIcon::Checkmark);
    assert_eq!(overlay.bounds(), circle.child().bounds());

    // Nothing else fires however long the host keeps ticking.
    run(&mut circle, 10.0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_non_reusable_is_terminal() {
    let (mut circle, calls) = counting_circle(FabProgressStyle::default());
    circle.show();
    run(&mut circle, 0.3);
    circle.begin_final_animation();
    run(&mut circle, 6.0);
    assert!(circle.is_completed());

    circle.show();
    assert!(!circle.begin_final_animation());
    run(&mut circle, 6.0);
    assert_eq!(circle.arc().alpha(), 0.0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_reusable_runs_again() {
    let style = FabProgressStyle::default()
        .with_reusable(true)
        .with_final_icon_duration(200);
    let (mut circle, calls) = counting_circle(style);

    for round in 1..=3 {
        circle.show();
        run(&mut circle, 0.3);
        assert_eq!(circle.arc().alpha(), 1.0, "round {round}");
        assert!(circle.begin_final_animation());
        run(&mut circle, 6.0);
        assert_eq!(calls.load(Ordering::SeqCst), round);
        assert!(circle.overlay().is_none());
        assert_eq!(circle.arc().angles().sweep, 0.0);
        assert!(!circle.is_completed());
    }
}

#[test]
fn test_hide_mid_complete_is_silent() {
    let (mut circle, calls) = counting_circle(FabProgressStyle::default());
    circle.show();
    run(&mut circle, 0.3);
    circle.begin_final_animation();
    run(&mut circle, 2.5);
    assert_eq!(circle.arc().controller().phase(), ArcPhase::Completing);

    circle.hide();
    run(&mut circle, 6.0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(circle.overlay().is_none());
    assert!(!circle.is_running());
}

#[test]
fn test_custom_glyph_icon() {
    let style = FabProgressStyle::default().with_final_icon(FinalIcon::Glyph("✓".to_string()));
    let (mut circle, _) = counting_circle(style);
    circle.show();
    run(&mut circle, 0.3);
    circle.begin_final_animation();
    run(&mut circle, 6.0);

    let mut canvas = RecordingCanvas::new();
    circle.paint(&mut canvas);
    assert!(canvas
        .primitives()
        .any(|c| matches!(c, DrawCommand::Text { content, .. } if content == "✓")));
}

// =============================================================================
// Input
// =============================================================================

#[test]
fn test_clicks_reach_button_until_overlay_shows() {
    let (mut circle, _) = counting_circle(FabProgressStyle::default());
    assert!(click(&mut circle));

    circle.show();
    run(&mut circle, 0.3);
    assert!(click(&mut circle), "arc does not block the button");

    circle.begin_final_animation();
    run(&mut circle, 6.0);
    assert!(!click(&mut circle), "overlay consumes pointer events");
}

#[test]
fn test_frame_serializes() {
    let (mut circle, _) = counting_circle(FabProgressStyle::default().with_rounded_stroke(true));
    circle.show();
    run(&mut circle, 0.5);
    let mut canvas = RecordingCanvas::new();
    circle.paint(&mut canvas);
    let json = serde_json::to_string(canvas.commands()).expect("serializable");
    assert!(json.contains("Arc"));
}
