//! Selection states and pointer event mapping.

use skyselect::input::{PixelPoint, PointerEvent, SelectState, SelectionDrag};

#[test]
fn test_event_names() {
    let names: Vec<&str> = SelectState::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(
        names,
        vec!["off", "start", "mousedown", "mousemove", "draw", "mouseout", "mouseup"]
    );
    assert_eq!("mouseout".parse::<SelectState>(), Ok(SelectState::MouseOut));
    assert!("mouseover".parse::<SelectState>().is_err());
}

#[test]
fn test_pointer_event_mapping() {
    let p = PixelPoint::new(3.0, 4.0);
    let cases = [
        (PointerEvent::Down(p), SelectState::MouseDown, Some(p)),
        (PointerEvent::Move(p), SelectState::MouseMove, Some(p)),
        (PointerEvent::Up(p), SelectState::MouseUp, Some(p)),
        (PointerEvent::Leave(None), SelectState::MouseOut, None),
    ];

    for (event, state, position) in cases {
        assert_eq!(event.select_event(), state);
        assert_eq!(event.position(), position);
    }
}

#[test]
fn test_drag_rect_follows_pointer() {
    let mut drag = SelectionDrag::new(PixelPoint::new(10.0, 10.0));
    assert_eq!(drag.rect().w, 0.0);

    drag.set_current(PixelPoint::new(4.0, 16.0));
    let rect = drag.rect();
    assert_eq!((rect.x, rect.y, rect.w, rect.h), (4.0, 10.0, 6.0, 6.0));
}
