//! The optional callback bundle a tracker dispatches to.

use swipeable_pointer_model::input::PointerInput;

use crate::position::{Direction, PositionSample};

/// Summary passed to the generic swiped handler when a swipe ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSummary {
    pub delta_x: f64,
    pub delta_y: f64,
    /// `velocity > flick_threshold`.
    pub is_flick: bool,
    pub velocity: f64,
}

/// Called on every qualifying move with the full motion sample.
pub type SwipingHandler = Box<dyn FnMut(&dyn PointerInput, &PositionSample)>;
/// Called once when a swipe ends.
pub type SwipedHandler = Box<dyn FnMut(&dyn PointerInput, &SwipeSummary)>;
/// Called on qualifying moves in one direction, with the distance moved.
pub type DirectionalSwipingHandler = Box<dyn FnMut(&dyn PointerInput, f64)>;
/// Called once when a swipe ends in one direction: distance, is-flick.
pub type DirectionalSwipedHandler = Box<dyn FnMut(&dyn PointerInput, f64, bool)>;
/// Called when a gesture ends without ever crossing the swipe threshold.
pub type TapHandler = Box<dyn FnMut(&dyn PointerInput)>;

/// Swiping/swiped handlers for a single direction.
#[derive(Default)]
pub struct DirectionHandlers {
    pub swiping: Option<DirectionalSwipingHandler>,
    pub swiped: Option<DirectionalSwipedHandler>,
}

impl DirectionHandlers {
    /// Whether either phase cares about this direction.
    pub fn is_registered(&self) -> bool {
        self.swiping.is_some() || self.swiped.is_some()
    }
}

/// All handlers a tracker may invoke. Every entry is optional.
///
/// ```ignore
/// let handlers = SwipeHandlers::new()
///     .on_swiped_left(|_, distance, flick| println!("left {distance} flick={flick}"))
///     .on_tap(|_| println!("tap"));
/// ```
#[derive(Default)]
pub struct SwipeHandlers {
    swiping: Option<SwipingHandler>,
    swiped: Option<SwipedHandler>,
    left: DirectionHandlers,
    right: DirectionHandlers,
    up: DirectionHandlers,
    down: DirectionHandlers,
    tap: Option<TapHandler>,
}

impl SwipeHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_swiping(
        mut self,
        handler: impl FnMut(&dyn PointerInput, &PositionSample) + 'static,
    ) -> Self {
        self.swiping = Some(Box::new(handler));
        self
    }

    pub fn on_swiped(
        mut self,
        handler: impl FnMut(&dyn PointerInput, &SwipeSummary) + 'static,
    ) -> Self {
        self.swiped = Some(Box::new(handler));
        self
    }

    pub fn on_swiping_direction(
        mut self,
        direction: Direction,
        handler: impl FnMut(&dyn PointerInput, f64) + 'static,
    ) -> Self {
        self.direction_mut(direction).swiping = Some(Box::new(handler));
        self
    }

    pub fn on_swiped_direction(
        mut self,
        direction: Direction,
        handler: impl FnMut(&dyn PointerInput, f64, bool) + 'static,
    ) -> Self {
        self.direction_mut(direction).swiped = Some(Box::new(handler));
        self
    }

    pub fn on_swiping_left(self, handler: impl FnMut(&dyn PointerInput, f64) + 'static) -> Self {
        self.on_swiping_direction(Direction::Left, handler)
    }

    pub fn on_swiping_right(self, handler: impl FnMut(&dyn PointerInput, f64) + 'static) -> Self {
        self.on_swiping_direction(Direction::Right, handler)
    }

    pub fn on_swiping_up(self, handler: impl FnMut(&dyn PointerInput, f64) + 'static) -> Self {
        self.on_swiping_direction(Direction::Up, handler)
    }

    pub fn on_swiping_down(self, handler: impl FnMut(&dyn PointerInput, f64) + 'static) -> Self {
        self.on_swiping_direction(Direction::Down, handler)
    }

    pub fn on_swiped_left(
        self,
        handler: impl FnMut(&dyn PointerInput, f64, bool) + 'static,
    ) -> Self {
        self.on_swiped_direction(Direction::Left, handler)
    }

    pub fn on_swiped_right(
        self,
        handler: impl FnMut(&dyn PointerInput, f64, bool) + 'static,
    ) -> Self {
        self.on_swiped_direction(Direction::Right, handler)
    }

    pub fn on_swiped_up(self, handler: impl FnMut(&dyn PointerInput, f64, bool) + 'static) -> Self {
        self.on_swiped_direction(Direction::Up, handler)
    }

    pub fn on_swiped_down(
        self,
        handler: impl FnMut(&dyn PointerInput, f64, bool) + 'static,
    ) -> Self {
        self.on_swiped_direction(Direction::Down, handler)
    }

    pub fn on_tap(mut self, handler: impl FnMut(&dyn PointerInput) + 'static) -> Self {
        self.tap = Some(Box::new(handler));
        self
    }

    pub fn direction(&self, direction: Direction) -> &DirectionHandlers {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    fn direction_mut(&mut self, direction: Direction) -> &mut DirectionHandlers {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    /// Dispatch the move-phase handlers for `sample`.
    ///
    /// Returns whether the move is cancelable: a generic handler of either
    /// phase is registered, or the sample's direction has either of its
    /// handlers registered.
    pub(crate) fn emit_swiping(&mut self, event: &dyn PointerInput, sample: &PositionSample) -> bool {
        if let Some(handler) = self.swiping.as_mut() {
            handler(event, sample);
        }

        let mut cancelable = self.swiping.is_some() || self.swiped.is_some();

        let distance = sample.distance();
        let pair = self.direction_mut(sample.direction());
        if pair.is_registered() {
            if let Some(handler) = pair.swiping.as_mut() {
                handler(event, distance);
            }
            cancelable = true;
        }

        cancelable
    }

    /// Dispatch the end-phase handlers for a completed swipe.
    pub(crate) fn emit_swiped(
        &mut self,
        event: &dyn PointerInput,
        sample: &PositionSample,
        summary: &SwipeSummary,
    ) {
        if let Some(handler) = self.swiped.as_mut() {
            handler(event, summary);
        }

        let distance = sample.distance();
        if let Some(handler) = self.direction_mut(sample.direction()).swiped.as_mut() {
            handler(event, distance, summary.is_flick);
        }
    }

    pub(crate) fn emit_tap(&mut self, event: &dyn PointerInput) {
        if let Some(handler) = self.tap.as_mut() {
            handler(event);
        }
    }
}

impl std::fmt::Debug for SwipeHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut registered: Vec<String> = Vec::new();
        if self.swiping.is_some() {
            registered.push("swiping".into());
        }
        if self.swiped.is_some() {
            registered.push("swiped".into());
        }
        for direction in Direction::ALL {
            let pair = self.direction(direction);
            if pair.swiping.is_some() {
                registered.push(format!("swiping_{direction}"));
            }
            if pair.swiped.is_some() {
                registered.push(format!("swiped_{direction}"));
            }
        }
        if self.tap.is_some() {
            registered.push("tap".into());
        }
        f.debug_struct("SwipeHandlers")
            .field("registered", &registered)
            .finish()
    }
}
