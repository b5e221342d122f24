//! Pointer events and the recorded event stream format.
//!
//! A recorded interaction is stored as JSONL: an optional `# {header}` line
//! followed by one [`PointerEvent`] per line, in delivery order.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
pub use swipeable_common::clock::TimestampMs;

use crate::input::{Point2D, PointerInput, TouchPoint};

/// Schema version written into stream headers.
pub const STREAM_SCHEMA_VERSION: &str = "1.0";

/// Which phase of a pointer interaction an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Finger down / button press.
    Start,
    /// Finger or pointer moved.
    Move,
    /// Finger up / button release.
    End,
}

/// Kind of device that produced a recorded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PointerDevice {
    Touch,
    Mouse,
    Pen,
    /// Streams that interleave several device kinds, or did not say.
    #[default]
    Mixed,
}

/// A single pointer event.
///
/// Side effects requested by the gesture core are recorded in interior
/// flags so the host (or a replay) can inspect them after dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Milliseconds on the host's clock.
    #[serde(rename = "t")]
    pub timestamp_ms: TimestampMs,

    #[serde(rename = "type")]
    pub phase: PointerPhase,

    /// Client X coordinate (ignored when touches are present).
    #[serde(default)]
    pub x: f64,

    /// Client Y coordinate (ignored when touches are present).
    #[serde(default)]
    pub y: f64,

    /// Active touch points; absent for mouse and pen events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touches: Option<Vec<TouchPoint>>,

    #[serde(skip)]
    propagation_stopped: Cell<bool>,

    #[serde(skip)]
    default_prevented: Cell<bool>,
}

/// Metadata written as the first (comment) line of a recorded stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Device that produced the events.
    #[serde(default)]
    pub device: PointerDevice,

    /// Viewport dimensions in client pixels, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<(u32, u32)>,
}

impl Default for EventStreamHeader {
    fn default() -> Self {
        Self {
            schema_version: STREAM_SCHEMA_VERSION.to_string(),
            device: PointerDevice::default(),
            viewport: None,
        }
    }
}

impl PointerEvent {
    /// Create a mouse/pen event at `(x, y)`.
    pub fn new(timestamp_ms: TimestampMs, phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            timestamp_ms,
            phase,
            x,
            y,
            touches: None,
            propagation_stopped: Cell::new(false),
            default_prevented: Cell::new(false),
        }
    }

    /// Create a touch event with the given active contacts.
    pub fn touch(timestamp_ms: TimestampMs, phase: PointerPhase, touches: Vec<TouchPoint>) -> Self {
        Self {
            touches: Some(touches),
            ..Self::new(timestamp_ms, phase, 0.0, 0.0)
        }
    }

    pub fn start(timestamp_ms: TimestampMs, x: f64, y: f64) -> Self {
        Self::new(timestamp_ms, PointerPhase::Start, x, y)
    }

    pub fn moved(timestamp_ms: TimestampMs, x: f64, y: f64) -> Self {
        Self::new(timestamp_ms, PointerPhase::Move, x, y)
    }

    pub fn end(timestamp_ms: TimestampMs, x: f64, y: f64) -> Self {
        Self::new(timestamp_ms, PointerPhase::End, x, y)
    }

    /// Whether a listener asked to stop propagation.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    /// Whether a listener asked to prevent default handling.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Clear both side-effect flags, e.g. before re-dispatching.
    pub fn reset_effects(&self) {
        self.propagation_stopped.set(false);
        self.default_prevented.set(false);
    }
}

impl PointerInput for PointerEvent {
    fn touches(&self) -> Option<&[TouchPoint]> {
        self.touches.as_deref()
    }

    fn client_position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

/// Parse events from JSONL content (one JSON object per line).
///
/// Blank lines and `#` comment lines (including the header) are skipped.
pub fn parse_events(jsonl: &str) -> Result<Vec<PointerEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Parse a full recorded stream: the optional header plus all events.
///
/// Only a `#` line on the first non-blank line is read as the header.
pub fn parse_stream(
    content: &str,
) -> Result<(Option<EventStreamHeader>, Vec<PointerEvent>), serde_json::Error> {
    let header = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .and_then(|line| line.strip_prefix('#'))
        .map(|raw| serde_json::from_str::<EventStreamHeader>(raw.trim()))
        .transpose()?;

    Ok((header, parse_events(content)?))
}

/// Serialize events to JSONL format.
pub fn serialize_events(events: &[PointerEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}

/// Serialize a header line followed by the events.
pub fn serialize_stream(
    header: &EventStreamHeader,
    events: &[PointerEvent],
) -> Result<String, serde_json::Error> {
    let mut output = format!("# {}\n", serde_json::to_string(header)?);
    output.push_str(&serialize_events(events)?);
    Ok(output)
}
