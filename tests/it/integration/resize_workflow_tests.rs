//! Wheel-resize workflow integration tests.
//!
//! Drives hover tracking plus wheel ticks through the canvas facade and
//! checks routing, constraint interplay, and the emitted events.

use crate::helpers::{TestCanvasBuilder, assert_rect_eq, rect};
use clipcanvas::CanvasEvent;
use clipcanvas::types::Point;

fn canvas_with_centered_element() -> clipcanvas::DraggableCanvas {
    TestCanvasBuilder::new()
        .with_canvas_size(1024.0, 768.0)
        .with_element(1, (400.0, 300.0, 100.0, 100.0))
        .build()
}

#[test]
fn test_wheel_without_hover_is_noop() {
    let mut canvas = canvas_with_centered_element();
    assert!(canvas.wheel(120).is_none());
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(400.0, 300.0, 100.0, 100.0));
}

#[test]
fn test_zero_delta_is_noop() {
    let mut canvas = canvas_with_centered_element();
    canvas.pointer_enter(1);
    assert!(canvas.wheel(0).is_none());
}

#[test]
fn test_wheel_grow_emits_resized_event() {
    let mut canvas = canvas_with_centered_element();
    canvas.pointer_enter(1);

    let event = canvas.wheel(120).unwrap();
    assert_eq!(
        event,
        CanvasEvent::ElementResized {
            element: 1,
            width: 110.0,
            height: 110.0,
            position: Point::new(395.0, 295.0),
        }
    );
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(395.0, 295.0, 110.0, 110.0));
}

#[test]
fn test_wheel_shrink() {
    let mut canvas = canvas_with_centered_element();
    canvas.pointer_enter(1);

    canvas.wheel(-120).unwrap();
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(405.0, 305.0, 90.0, 90.0));
}

#[test]
fn test_wheel_magnitude_is_ignored() {
    // One step per tick regardless of how coarse the device delta is
    let mut canvas = canvas_with_centered_element();
    canvas.pointer_enter(1);

    canvas.wheel(1).unwrap();
    canvas.wheel(9000).unwrap();
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(390.0, 290.0, 120.0, 120.0));
}

#[test]
fn test_twenty_ticks_cap_at_twice_original() {
    // Original 100x100 plus the +100 growth cap: 20 grow ticks settle at
    // 200x200 with the center preserved.
    let mut canvas = canvas_with_centered_element();
    canvas.pointer_enter(1);

    let mut last = None;
    for _ in 0..20 {
        last = canvas.wheel(120);
    }

    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(350.0, 250.0, 200.0, 200.0));
    match last.unwrap() {
        CanvasEvent::ElementResized { width, height, .. } => {
            assert_eq!((width, height), (200.0, 200.0));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn test_square_lock_setting() {
    let mut canvas = TestCanvasBuilder::new()
        .with_square_lock(true)
        .with_element(1, (400.0, 300.0, 100.0, 150.0))
        .build();
    canvas.pointer_enter(1);

    canvas.wheel(120).unwrap();
    // Width is the reference axis; center (450, 375) is preserved
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(395.0, 320.0, 110.0, 110.0));
}

#[test]
fn test_hover_switch_redirects_wheel() {
    let mut canvas = TestCanvasBuilder::new()
        .with_element(1, (100.0, 100.0, 100.0, 100.0))
        .with_element(2, (400.0, 400.0, 100.0, 100.0))
        .build();

    canvas.pointer_enter(1);
    canvas.pointer_enter(2);
    canvas.wheel(120).unwrap();

    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(100.0, 100.0, 100.0, 100.0));
    assert_rect_eq(canvas.element_rect(2).unwrap(), rect(395.0, 395.0, 110.0, 110.0));
}

#[test]
fn test_stale_leave_keeps_current_target() {
    let mut canvas = TestCanvasBuilder::new()
        .with_element(1, (100.0, 100.0, 100.0, 100.0))
        .with_element(2, (400.0, 400.0, 100.0, 100.0))
        .build();

    canvas.pointer_enter(1);
    canvas.pointer_enter(2);
    canvas.pointer_leave(1);

    assert_eq!(canvas.hovered_element(), Some(2));
    assert_eq!(canvas.wheel(120).unwrap().element(), 2);
}

#[test]
fn test_leave_clears_wheel_target() {
    let mut canvas = canvas_with_centered_element();
    canvas.pointer_enter(1);
    canvas.pointer_leave(1);

    assert_eq!(canvas.hovered_element(), None);
    assert!(canvas.wheel(120).is_none());
}

#[test]
fn test_degenerate_canvas_clamp_then_shrink() {
    // Canvas 50x50 holding a 100x100 element: dragging never resizes (the
    // element stays pinned at the origin, overflowing), while the next
    // wheel tick shrinks it into the available space.
    let mut canvas = TestCanvasBuilder::new()
        .with_canvas_size(50.0, 50.0)
        .with_element(1, (0.0, 0.0, 100.0, 100.0))
        .build();

    canvas.pointer_down(1, Point::new(10.0, 10.0));
    canvas.pointer_move(Point::new(15.0, 15.0));
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(0.0, 0.0, 100.0, 100.0));
    canvas.pointer_up();

    canvas.pointer_enter(1);
    canvas.wheel(-120).unwrap();
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(40.0, 40.0, 10.0, 10.0));
}

#[test]
fn test_unclipped_resize_grows_past_the_edge() {
    let mut canvas = TestCanvasBuilder::new()
        .with_clipping(false)
        .with_element(1, (960.0, 700.0, 100.0, 100.0))
        .build();
    canvas.pointer_enter(1);

    canvas.wheel(120).unwrap();
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(955.0, 695.0, 110.0, 110.0));
}

#[test]
fn test_growth_cap_anchored_to_original_not_current() {
    // Shrinking first does not lower the cap: it stays original + 100.
    let mut canvas = canvas_with_centered_element();
    canvas.pointer_enter(1);

    for _ in 0..5 {
        canvas.wheel(-120);
    }
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(425.0, 325.0, 50.0, 50.0));

    for _ in 0..30 {
        canvas.wheel(120);
    }
    assert_rect_eq(canvas.element_rect(1).unwrap(), rect(350.0, 250.0, 200.0, 200.0));
}
