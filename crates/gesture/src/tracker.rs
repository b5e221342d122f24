//! The gesture state machine.

use swipeable_common::clock::{elapsed_ms, Clock, SystemClock, TimestampMs};
use swipeable_common::config::TrackerConfig;
use swipeable_pointer_model::event::PointerPhase;
use swipeable_pointer_model::input::{Point2D, PointerInput};

use crate::handlers::{SwipeHandlers, SwipeSummary};
use crate::position::{get_position, rotate_by_angle, PositionSample};

/// Per-gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No pointer interaction in progress.
    #[default]
    Idle,
    /// A single pointer is down.
    Active(ActiveGesture),
}

/// A gesture between start and end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveGesture {
    /// Start position in the rotated frame.
    pub origin: Point2D,
    /// Set once movement exceeds the configured delta; never cleared.
    pub swiping: bool,
    pub start_ms: TimestampMs,
    /// Rotation in effect when the gesture started.
    pub rotation_angle: f64,
}

impl ActiveGesture {
    fn sample(&self, event: &dyn PointerInput, now: TimestampMs) -> PositionSample {
        let current = rotate_by_angle(get_position(event), self.rotation_angle);
        PositionSample::new(self.origin, current, elapsed_ms(self.start_ms, now))
    }
}

/// Turns start/move/end pointer events into swipe and tap callbacks.
///
/// One tracker follows one pointer interaction at a time. Events must be
/// delivered in order: a start, any number of moves, then an end. A new
/// start replaces whatever gesture was in flight.
pub struct GestureTracker<C: Clock = SystemClock> {
    config: TrackerConfig,
    handlers: SwipeHandlers,
    clock: C,
    state: GestureState,
}

impl GestureTracker<SystemClock> {
    /// Create a tracker reading wall-clock time.
    pub fn new(config: TrackerConfig, handlers: SwipeHandlers) -> Self {
        Self::with_clock(config, handlers, SystemClock)
    }
}

impl<C: Clock> GestureTracker<C> {
    pub fn with_clock(config: TrackerConfig, handlers: SwipeHandlers, clock: C) -> Self {
        Self {
            config,
            handlers,
            clock,
            state: GestureState::Idle,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active(_))
    }

    pub fn is_swiping(&self) -> bool {
        matches!(self.state, GestureState::Active(ActiveGesture { swiping: true, .. }))
    }

    /// Host entry point: route an event by phase.
    ///
    /// This is where `disabled` is honored; the phase methods themselves
    /// always process what they are given.
    pub fn handle(&mut self, phase: PointerPhase, event: &dyn PointerInput) {
        if self.config.disabled {
            tracing::trace!(?phase, "Tracker disabled, event dropped");
            return;
        }

        match phase {
            PointerPhase::Start => self.on_start(event),
            PointerPhase::Move => self.on_move(event),
            PointerPhase::End => self.on_end(event),
        }
    }

    /// Begin tracking a gesture. Multi-touch events are ignored.
    pub fn on_start(&mut self, event: &dyn PointerInput) {
        if event.is_multi_touch() {
            tracing::debug!(touches = event.touch_count(), "Ignoring multi-touch start");
            return;
        }

        let rotation_angle = self.config.rotation_angle;
        let origin = rotate_by_angle(get_position(event), rotation_angle);

        if self.config.stop_propagation {
            event.stop_propagation();
        }

        let start_ms = self.clock.now_ms();
        if self.is_active() {
            tracing::trace!("New start supersedes gesture in flight");
        }
        tracing::trace!(x = origin.x, y = origin.y, start_ms, "Gesture started");

        self.state = GestureState::Active(ActiveGesture {
            origin,
            swiping: false,
            start_ms,
            rotation_angle,
        });
    }

    /// Track movement; fires swiping handlers once past the delta threshold.
    pub fn on_move(&mut self, event: &dyn PointerInput) {
        let GestureState::Active(active) = &mut self.state else {
            return;
        };
        if event.is_multi_touch() {
            tracing::debug!(touches = event.touch_count(), "Ignoring multi-touch move");
            return;
        }

        let sample = active.sample(event, self.clock.now_ms());

        if sample.within(self.config.delta) && !active.swiping {
            return;
        }

        if self.config.stop_propagation {
            event.stop_propagation();
        }

        let cancelable = self.handlers.emit_swiping(event, &sample);

        if !active.swiping {
            tracing::debug!(direction = %sample.direction(), "Swipe recognized");
        }
        active.swiping = true;

        tracing::trace!(
            delta_x = sample.delta_x,
            delta_y = sample.delta_y,
            velocity = sample.velocity,
            cancelable,
            "Swiping"
        );

        if cancelable && self.config.prevent_default_touchmove_event {
            event.prevent_default();
        }
    }

    /// Finish the gesture: swiped handlers if it became a swipe, else tap.
    ///
    /// Always returns the tracker to idle. An end with no preceding start is
    /// reported as a tap.
    pub fn on_end(&mut self, event: &dyn PointerInput) {
        let state = std::mem::take(&mut self.state);

        match state {
            GestureState::Active(active) if active.swiping => {
                let sample = active.sample(event, self.clock.now_ms());

                if self.config.stop_propagation {
                    event.stop_propagation();
                }

                let summary = SwipeSummary {
                    delta_x: sample.delta_x,
                    delta_y: sample.delta_y,
                    is_flick: sample.velocity > self.config.flick_threshold,
                    velocity: sample.velocity,
                };

                tracing::debug!(
                    direction = %sample.direction(),
                    distance = sample.distance(),
                    velocity = summary.velocity,
                    is_flick = summary.is_flick,
                    "Swiped"
                );

                self.handlers.emit_swiped(event, &sample, &summary);
            }
            GestureState::Active(_) => {
                tracing::debug!("Tap");
                self.handlers.emit_tap(event);
            }
            GestureState::Idle => {
                tracing::debug!("End without start, reporting tap");
                self.handlers.emit_tap(event);
            }
        }
    }
}

impl<C: Clock> std::fmt::Debug for GestureTracker<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureTracker")
            .field("config", &self.config)
            .field("handlers", &self.handlers)
            .field("state", &self.state)
            .finish()
    }
}
