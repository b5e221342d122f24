//! The pointer event contract consumed by the gesture core.

use serde::{Deserialize, Serialize};

/// A point in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One active contact of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// What the gesture core needs from a host event.
///
/// Touch events expose their active contacts through [`touches`]; mouse and
/// pen events return `None` and report their own [`client_position`]. The
/// two side effects take `&self` because hosts deliver events by shared
/// reference (DOM events, winit events wrapped in a cell, and so on).
///
/// [`touches`]: PointerInput::touches
/// [`client_position`]: PointerInput::client_position
pub trait PointerInput {
    /// Active touch points, if this is a touch event.
    fn touches(&self) -> Option<&[TouchPoint]>;

    /// The event's own coordinates.
    fn client_position(&self) -> Point2D;

    /// Stop the event from reaching further listeners.
    fn stop_propagation(&self);

    /// Suppress the host's default handling of the event.
    fn prevent_default(&self);

    /// Number of simultaneous touch points (0 for non-touch events).
    fn touch_count(&self) -> usize {
        self.touches().map_or(0, <[TouchPoint]>::len)
    }

    /// Whether more than one finger is down.
    fn is_multi_touch(&self) -> bool {
        self.touch_count() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Mouse {
        at: Point2D,
        stopped: Cell<bool>,
    }

    impl PointerInput for Mouse {
        fn touches(&self) -> Option<&[TouchPoint]> {
            None
        }

        fn client_position(&self) -> Point2D {
            self.at
        }

        fn stop_propagation(&self) {
            self.stopped.set(true);
        }

        fn prevent_default(&self) {}
    }

    #[test]
    fn test_non_touch_event_has_no_touches() {
        let mouse = Mouse {
            at: Point2D::new(4.0, 2.0),
            stopped: Cell::new(false),
        };
        assert_eq!(mouse.touch_count(), 0);
        assert!(!mouse.is_multi_touch());

        mouse.stop_propagation();
        assert!(mouse.stopped.get());
    }
}
