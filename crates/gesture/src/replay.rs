//! Drive a tracker from a recorded event stream.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use swipeable_common::clock::{Clock, ManualClock, TimestampMs};
use swipeable_common::config::TrackerConfig;
use swipeable_common::error::{SwipeableError, SwipeableResult};
use swipeable_pointer_model::event::PointerEvent;
use swipeable_pointer_model::input::PointerInput;

use crate::handlers::SwipeHandlers;
use crate::position::{get_position, Direction};
use crate::tracker::GestureTracker;

/// A handler invocation observed during replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecognizedGesture {
    Swiping {
        delta_x: f64,
        delta_y: f64,
        abs_x: f64,
        abs_y: f64,
        velocity: f64,
    },
    SwipingDirection {
        direction: Direction,
        distance: f64,
    },
    Swiped {
        delta_x: f64,
        delta_y: f64,
        is_flick: bool,
        velocity: f64,
    },
    SwipedDirection {
        direction: Direction,
        distance: f64,
        is_flick: bool,
    },
    Tap {
        x: f64,
        y: f64,
    },
}

/// A recognized gesture stamped with the time of the event that caused it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureRecord {
    #[serde(rename = "t")]
    pub timestamp_ms: TimestampMs,

    #[serde(flatten)]
    pub gesture: RecognizedGesture,
}

/// Outcome of replaying a stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    /// Every handler invocation, in order.
    pub gestures: Vec<GestureRecord>,
    /// Events fed to the tracker.
    pub events: usize,
    /// Events carrying more than one touch point.
    pub multi_touch_events: usize,
    /// Events the tracker asked to stop propagating.
    pub propagation_stopped: usize,
    /// Events the tracker asked to prevent default handling for.
    pub default_prevented: usize,
}

impl ReplayReport {
    /// Completed swipes (one per generic swiped invocation).
    pub fn swipes(&self) -> impl Iterator<Item = &GestureRecord> {
        self.gestures
            .iter()
            .filter(|r| matches!(r.gesture, RecognizedGesture::Swiped { .. }))
    }

    /// Completed swipes in one direction.
    pub fn swipes_in(&self, direction: Direction) -> usize {
        self.gestures
            .iter()
            .filter(|r| {
                matches!(
                    r.gesture,
                    RecognizedGesture::SwipedDirection { direction: d, .. } if d == direction
                )
            })
            .count()
    }

    pub fn taps(&self) -> usize {
        self.gestures
            .iter()
            .filter(|r| matches!(r.gesture, RecognizedGesture::Tap { .. }))
            .count()
    }

    pub fn flicks(&self) -> usize {
        self.gestures
            .iter()
            .filter(|r| matches!(r.gesture, RecognizedGesture::Swiped { is_flick: true, .. }))
            .count()
    }
}

/// Feed `events` through a fresh tracker configured with `config`.
///
/// Every handler is registered, so each directional branch counts as
/// cancelable. Time comes from the events' own timestamps, which must not go
/// backwards. Events are dispatched through [`GestureTracker::handle`], so a
/// disabled config yields an empty report.
pub fn replay(events: &[PointerEvent], config: &TrackerConfig) -> SwipeableResult<ReplayReport> {
    config.validate()?;

    let clock = ManualClock::new(events.first().map_or(0, |e| e.timestamp_ms));
    let log: Rc<RefCell<Vec<GestureRecord>>> = Rc::default();
    let mut tracker =
        GestureTracker::with_clock(config.clone(), recording_handlers(&log, &clock), clock.clone());

    let mut report = ReplayReport::default();
    let mut last_ms: Option<TimestampMs> = None;

    for (index, event) in events.iter().enumerate() {
        if let Some(prev) = last_ms {
            if event.timestamp_ms < prev {
                return Err(SwipeableError::replay(format!(
                    "event {index} at t={} precedes previous event at t={prev}",
                    event.timestamp_ms
                )));
            }
        }
        last_ms = Some(event.timestamp_ms);

        clock.set(event.timestamp_ms);
        event.reset_effects();
        tracker.handle(event.phase, event);

        report.events += 1;
        if event.is_multi_touch() {
            report.multi_touch_events += 1;
        }
        if event.propagation_stopped() {
            report.propagation_stopped += 1;
        }
        if event.default_prevented() {
            report.default_prevented += 1;
        }
    }

    if tracker.is_active() {
        tracing::warn!("Stream ended with a gesture still in progress");
    }

    drop(tracker);
    report.gestures = Rc::try_unwrap(log)
        .map(RefCell::into_inner)
        .unwrap_or_else(|shared| shared.borrow().clone());

    tracing::info!(
        events = report.events,
        gestures = report.gestures.len(),
        "Replay finished"
    );
    Ok(report)
}

fn recording_handlers(log: &Rc<RefCell<Vec<GestureRecord>>>, clock: &ManualClock) -> SwipeHandlers {
    let record = {
        let log = log.clone();
        let clock = clock.clone();
        move |gesture: RecognizedGesture| {
            log.borrow_mut().push(GestureRecord {
                timestamp_ms: clock.now_ms(),
                gesture,
            });
        }
    };

    let r = record.clone();
    let mut handlers = SwipeHandlers::new().on_swiping(move |_, s| {
        r(RecognizedGesture::Swiping {
            delta_x: s.delta_x,
            delta_y: s.delta_y,
            abs_x: s.abs_x,
            abs_y: s.abs_y,
            velocity: s.velocity,
        })
    });

    let r = record.clone();
    handlers = handlers.on_swiped(move |_, s| {
        r(RecognizedGesture::Swiped {
            delta_x: s.delta_x,
            delta_y: s.delta_y,
            is_flick: s.is_flick,
            velocity: s.velocity,
        })
    });

    for direction in Direction::ALL {
        let r = record.clone();
        handlers = handlers.on_swiping_direction(direction, move |_, distance| {
            r(RecognizedGesture::SwipingDirection {
                direction,
                distance,
            })
        });
        let r = record.clone();
        handlers = handlers.on_swiped_direction(direction, move |_, distance, is_flick| {
            r(RecognizedGesture::SwipedDirection {
                direction,
                distance,
                is_flick,
            })
        });
    }

    handlers.on_tap(move |event: &dyn PointerInput| {
        let at = get_position(event);
        record(RecognizedGesture::Tap { x: at.x, y: at.y })
    })
}
