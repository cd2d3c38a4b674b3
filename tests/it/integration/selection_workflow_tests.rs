//! Full pointer sequences through the rectangle selection tool.

use crate::helpers::{assert_rect, down, drag, moved, up, TestToolBuilder};
use skyselect::host::{CursorStyle, InteractionMode};
use skyselect::input::{PixelPoint, PixelRect, PointerEvent, SelectState};
use skyselect::style::{Color, ColorSource, SelectStyle};

// ============================================================================
// Happy Path
// ============================================================================

#[test]
fn test_full_drag_sequence() {
    skyselect::logging::init();

    let (mut tool, done) = TestToolBuilder::new()
        .with_source(1, (20.0, 20.0))
        .with_source(2, (100.0, 100.0))
        .started();

    assert_eq!(tool.state(), SelectState::Start);
    assert_eq!(tool.host().mode, InteractionMode::Select);
    assert_eq!(tool.host().cursor, CursorStyle::Crosshair);

    assert!(tool.handle_pointer(down(10.0, 10.0)));
    assert_eq!(tool.state(), SelectState::MouseDown);

    assert!(tool.handle_pointer(moved(30.0, 25.0)));
    assert_eq!(tool.state(), SelectState::MouseMove);
    assert!(tool.draw());
    assert_eq!(tool.state(), SelectState::Draw);

    assert!(tool.handle_pointer(moved(50.0, 40.0)));
    assert!(tool.draw());
    assert!(tool.handle_pointer(up(50.0, 40.0)));

    // mouseup chains straight into off
    assert_eq!(tool.state(), SelectState::Off);

    let done = done.borrow();
    assert_eq!(done.len(), 1);
    let (selection, objects) = &done[0];
    assert_rect(selection, 10.0, 10.0, 40.0, 30.0);
    assert_eq!(selection.label(), "rect");
    assert_eq!(objects, &vec![1]);

    let host = tool.host();
    assert_eq!(host.mode, InteractionMode::Pan);
    assert_eq!(host.cursor, CursorStyle::Default);
    assert!(host.reticle_visible);
    assert_eq!(tool.last_selection(), Some(selection));
    assert!(tool.drag().is_none());
}

#[test]
fn test_draw_paints_current_rectangle() {
    let (mut tool, _done) = TestToolBuilder::new().started();

    tool.handle_pointer(down(10.0, 10.0));
    tool.handle_pointer(moved(30.0, 25.0));
    tool.draw();

    let host = tool.host();
    let expected = PixelRect { x: 10.0, y: 10.0, w: 20.0, h: 15.0 };
    assert_eq!(host.fills, vec![(expected, Color::GREEN.with_alpha(0x7f))]);
    assert_eq!(host.strokes, vec![(expected, Color::GREEN, 2.0)]);
}

#[test]
fn test_reversed_drag_is_normalized() {
    let (mut tool, done) = TestToolBuilder::new().started();

    drag(&mut tool, (50.0, 40.0), (10.0, 10.0));

    let done = done.borrow();
    assert_eq!(done.len(), 1);
    assert_rect(&done[0].0, 10.0, 10.0, 40.0, 30.0);

    // The overlay showed the same normalized rectangle
    let (painted, _) = tool.host().fills[0];
    assert_eq!(painted, PixelRect { x: 10.0, y: 10.0, w: 40.0, h: 30.0 });
}

#[test]
fn test_mouseout_mid_drag_matches_mouseup() {
    let (mut by_leave, left) = TestToolBuilder::new().started();
    by_leave.handle_pointer(down(10.0, 10.0));
    by_leave.handle_pointer(moved(30.0, 30.0));
    assert!(by_leave.handle_pointer(PointerEvent::Leave(None)));
    assert_eq!(by_leave.state(), SelectState::Off);

    let (mut by_release, released) = TestToolBuilder::new().started();
    by_release.handle_pointer(down(10.0, 10.0));
    by_release.handle_pointer(moved(30.0, 30.0));
    by_release.handle_pointer(up(30.0, 30.0));

    assert_eq!(left.borrow().len(), 1);
    assert_eq!(*left.borrow(), *released.borrow());
    assert_rect(&left.borrow()[0].0, 10.0, 10.0, 20.0, 20.0);
}

#[test]
fn test_mouseout_position_wins_over_last_move() {
    let (mut tool, done) = TestToolBuilder::new().started();
    tool.handle_pointer(down(10.0, 10.0));
    tool.handle_pointer(moved(30.0, 30.0));
    tool.handle_pointer(PointerEvent::Leave(Some(PixelPoint::new(60.0, 15.0))));

    assert_rect(&done.borrow()[0].0, 10.0, 10.0, 50.0, 5.0);
}

#[test]
fn test_click_without_move_gives_empty_rectangle() {
    let (mut tool, done) = TestToolBuilder::new()
        .with_source(7, (12.0, 12.0))
        .started();

    tool.handle_pointer(down(12.0, 12.0));
    // Release is not accepted in MouseDown; a move has to come first
    assert!(!tool.handle_pointer(up(12.0, 12.0)));
    tool.handle_pointer(moved(12.0, 12.0));
    tool.handle_pointer(up(12.0, 12.0));

    let done = done.borrow();
    assert_rect(&done[0].0, 12.0, 12.0, 0.0, 0.0);
    assert_eq!(done[0].1, vec![7]);
}

// ============================================================================
// Ignored and Cancelled Input
// ============================================================================

#[test]
fn test_draw_while_off_is_noop() {
    let mut tool = TestToolBuilder::new().build();

    assert!(!tool.draw());
    assert!(!tool.handle_pointer(down(1.0, 1.0)));
    assert!(!tool.handle_pointer(moved(5.0, 5.0)));

    assert_eq!(tool.state(), SelectState::Off);
    assert!(tool.host().fills.is_empty());
    assert_eq!(tool.host().redraws, 0);
}

#[test]
fn test_draw_before_move_is_ignored() {
    let (mut tool, _done) = TestToolBuilder::new().started();
    tool.handle_pointer(down(10.0, 10.0));

    assert!(!tool.draw());
    assert_eq!(tool.state(), SelectState::MouseDown);
    assert!(tool.host().fills.is_empty());
}

#[test]
fn test_off_mid_drag_cancels() {
    let (mut tool, done) = TestToolBuilder::new().started();
    tool.handle_pointer(down(10.0, 10.0));
    tool.handle_pointer(moved(40.0, 40.0));

    assert!(tool.off());
    assert_eq!(tool.state(), SelectState::Off);
    assert!(done.borrow().is_empty());
    assert!(tool.last_selection().is_none());
    assert_eq!(tool.host().mode, InteractionMode::Pan);

    // A late release is ignored
    assert!(!tool.handle_pointer(up(40.0, 40.0)));
    assert!(done.borrow().is_empty());
}

#[test]
fn test_restart_after_completion() {
    let (mut tool, done) = TestToolBuilder::new().started();
    drag(&mut tool, (0.0, 0.0), (10.0, 10.0));

    let second = crate::helpers::recorder();
    let sink = second.clone();
    assert!(tool.start(move |selection, objects| {
        sink.borrow_mut().push((*selection, objects.to_vec()));
    }));
    assert!(tool.drag().is_none());
    drag(&mut tool, (5.0, 5.0), (25.0, 15.0));

    // The new callback replaced the old one
    assert_eq!(done.borrow().len(), 1);
    assert_eq!(second.borrow().len(), 1);
    assert_rect(&second.borrow()[0].0, 5.0, 5.0, 20.0, 10.0);
}

#[test]
fn test_activate_without_callback_still_finalizes() {
    let mut tool = TestToolBuilder::new().build();
    assert!(tool.activate());
    drag(&mut tool, (1.0, 2.0), (3.0, 4.0));

    assert_eq!(tool.state(), SelectState::Off);
    assert_rect(tool.last_selection().unwrap(), 1.0, 2.0, 2.0, 2.0);
}

#[test]
fn test_color_function_sees_drag_endpoints() {
    // Red while dragging right, blue while dragging left
    let style = SelectStyle {
        color: ColorSource::from_fn(|start, current| {
            if current.x >= start.x {
                Color::rgb(0xff, 0, 0)
            } else {
                Color::rgb(0, 0, 0xff)
            }
        }),
        line_width: 1.0,
    };
    let (mut tool, _done) = TestToolBuilder::new().with_style(style).started();

    tool.handle_pointer(down(50.0, 50.0));
    tool.handle_pointer(moved(60.0, 60.0));
    tool.draw();
    tool.handle_pointer(moved(40.0, 60.0));
    tool.draw();

    let strokes: Vec<Color> = tool.host().strokes.iter().map(|s| s.1).collect();
    assert_eq!(strokes, vec![Color::rgb(0xff, 0, 0), Color::rgb(0, 0, 0xff)]);
}
