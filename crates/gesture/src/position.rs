//! Position extraction, frame rotation, and per-event motion samples.

use std::fmt;

use serde::{Deserialize, Serialize};
use swipeable_pointer_model::input::{Point2D, PointerInput};

/// Swipe direction, named from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.pad(name)
    }
}

/// Position of an event: the first touch point if any, else the event's own
/// coordinates.
pub fn get_position(event: &dyn PointerInput) -> Point2D {
    match event.touches().and_then(|touches| touches.first()) {
        Some(touch) => touch.position(),
        None => event.client_position(),
    }
}

/// Rotate the coordinate frame by `angle` degrees.
///
/// An angle of exactly zero returns `pos` untouched.
pub fn rotate_by_angle(pos: Point2D, angle: f64) -> Point2D {
    if angle == 0.0 {
        return pos;
    }

    let (sin, cos) = angle.to_radians().sin_cos();
    Point2D {
        x: pos.x * cos + pos.y * sin,
        y: pos.y * cos - pos.x * sin,
    }
}

/// Motion of the current event relative to the gesture origin.
///
/// Deltas are origin minus current, so a positive `delta_x` is movement to
/// the left and a positive `delta_y` is movement up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    pub delta_x: f64,
    pub delta_y: f64,
    pub abs_x: f64,
    pub abs_y: f64,
    /// Straight-line distance over elapsed time, in pixels per millisecond.
    /// Infinite or NaN when no time has elapsed.
    pub velocity: f64,
}

impl PositionSample {
    pub fn new(origin: Point2D, current: Point2D, elapsed_ms: u64) -> Self {
        let delta_x = origin.x - current.x;
        let delta_y = origin.y - current.y;
        let abs_x = delta_x.abs();
        let abs_y = delta_y.abs();
        let velocity = (abs_x * abs_x + abs_y * abs_y).sqrt() / elapsed_ms as f64;

        Self {
            delta_x,
            delta_y,
            abs_x,
            abs_y,
            velocity,
        }
    }

    /// Whether both axes moved less than `delta`.
    pub fn within(&self, delta: f64) -> bool {
        self.abs_x < delta && self.abs_y < delta
    }

    /// Direction of the dominant axis. Ties resolve to the vertical axis.
    pub fn direction(&self) -> Direction {
        if self.abs_x > self.abs_y {
            if self.delta_x > 0.0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if self.delta_y > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Absolute movement along the dominant axis.
    pub fn distance(&self) -> f64 {
        if self.direction().is_horizontal() {
            self.abs_x
        } else {
            self.abs_y
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipeable_pointer_model::event::{PointerEvent, PointerPhase};
    use swipeable_pointer_model::input::TouchPoint;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_get_position_prefers_first_touch() {
        let event = PointerEvent::touch(
            0,
            PointerPhase::Start,
            vec![TouchPoint::new(7.0, 8.0), TouchPoint::new(100.0, 100.0)],
        );
        assert_eq!(get_position(&event), Point2D::new(7.0, 8.0));
    }

    #[test]
    fn test_get_position_falls_back_to_client_coordinates() {
        let mouse = PointerEvent::start(0, 3.0, 4.0);
        assert_eq!(get_position(&mouse), Point2D::new(3.0, 4.0));

        let mut empty_touch = PointerEvent::touch(0, PointerPhase::End, vec![]);
        empty_touch.x = 9.0;
        assert_eq!(get_position(&empty_touch), Point2D::new(9.0, 0.0));
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let p = Point2D::new(12.5, -3.0);
        assert_eq!(rotate_by_angle(p, 0.0), p);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = rotate_by_angle(Point2D::new(10.0, 0.0), 90.0);
        assert_close(rotated.x, 0.0);
        assert_close(rotated.y, -10.0);

        let rotated = rotate_by_angle(Point2D::new(0.0, 10.0), 90.0);
        assert_close(rotated.x, 10.0);
        assert_close(rotated.y, 0.0);
    }

    #[test]
    fn test_sample_sign_convention() {
        let sample = PositionSample::new(Point2D::new(0.0, 0.0), Point2D::new(-30.0, 5.0), 100);
        assert_eq!(sample.delta_x, 30.0);
        assert_eq!(sample.delta_y, -5.0);
        assert_eq!(sample.direction(), Direction::Left);
        assert_eq!(sample.distance(), 30.0);
    }

    #[test]
    fn test_sample_velocity() {
        let sample = PositionSample::new(Point2D::new(0.0, 0.0), Point2D::new(30.0, 40.0), 100);
        assert_close(sample.velocity, 0.5);

        let instant = PositionSample::new(Point2D::new(0.0, 0.0), Point2D::new(30.0, 40.0), 0);
        assert!(instant.velocity.is_infinite());
    }

    #[test]
    fn test_tie_goes_vertical() {
        let sample = PositionSample::new(Point2D::new(0.0, 0.0), Point2D::new(15.0, 15.0), 10);
        assert_eq!(sample.direction(), Direction::Down);

        let sample = PositionSample::new(Point2D::new(0.0, 0.0), Point2D::new(-15.0, -15.0), 10);
        assert_eq!(sample.direction(), Direction::Up);
    }

    #[test]
    fn test_within_threshold_is_exclusive() {
        let sample = PositionSample::new(Point2D::new(0.0, 0.0), Point2D::new(9.9, 0.0), 10);
        assert!(sample.within(10.0));
        let sample = PositionSample::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0), 10);
        assert!(!sample.within(10.0));
    }
}
