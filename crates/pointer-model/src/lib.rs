//! Swipeable Pointer Model
//!
//! Defines the boundary between an event source and the gesture core:
//! - **Input:** the [`PointerInput`] contract every host event satisfies
//! - **Events:** a concrete, serializable [`PointerEvent`] and the JSONL
//!   stream format used for recorded interactions
//!
//! Coordinates are in client pixels; timestamps are milliseconds.

pub mod event;
pub mod input;

pub use event::*;
pub use input::*;
