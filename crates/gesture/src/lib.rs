//! Swipeable Gesture Recognition
//!
//! Converts raw pointer events (touch or mouse) into swipe, flick, and tap
//! callbacks. A [`GestureTracker`] receives the three phases of one pointer
//! interaction and invokes whichever handlers are registered in its
//! [`SwipeHandlers`]:
//!
//! - **Swiping:** on every move once movement passes `delta` pixels
//! - **Swiped:** once on release, with flick classification by velocity
//! - **Tap:** on release when movement never passed `delta`
//!
//! Multi-touch input is ignored. Recorded streams can be fed through a
//! tracker with [`replay()`], and the results written with
//! [`GestureLogWriter`].

pub mod handlers;
pub mod position;
pub mod replay;
pub mod tracker;
pub mod writer;

pub use handlers::{DirectionHandlers, SwipeHandlers, SwipeSummary};
pub use position::{get_position, rotate_by_angle, Direction, PositionSample};
pub use replay::{replay, GestureRecord, RecognizedGesture, ReplayReport};
pub use swipeable_common::config::TrackerConfig;
pub use tracker::{ActiveGesture, GestureState, GestureTracker};
pub use writer::{GestureLogHeader, GestureLogWriter};
