//! Browser event handling - converts web events to veneer Events.

use veneer_core::{Event, MouseButton, Point};
use web_sys::MouseEvent;

/// Convert a web_sys MouseEvent to a veneer Event.
///
/// Positions are client coordinates, the space scrollbar geometry lives in.
pub fn mouse_event_to_veneer(event: &MouseEvent, event_type: &str) -> Event {
    let position = Point::new(event.client_x() as f32, event.client_y() as f32);
    let button = MouseButton::from_dom(event.button());

    match event_type {
        "mousedown" => Event::MouseDown { position, button },
        "mouseup" => Event::MouseUp { position, button },
        "mouseenter" => Event::MouseEnter,
        "mouseleave" => Event::MouseLeave,
        _ => Event::MouseMove { position },
    }
}

/// Page coordinates of a mouse event, used as the drag reference.
pub fn page_point(event: &MouseEvent) -> Point {
    Point::new(event.page_x() as f32, event.page_y() as f32)
}

/// Whether the primary button triggered the event.
pub fn is_primary(event: &MouseEvent) -> bool {
    MouseButton::from_dom(event.button()) == MouseButton::Left
}
