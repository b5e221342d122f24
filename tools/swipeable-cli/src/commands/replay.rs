//! Replay a recorded pointer stream through the gesture tracker.

use std::path::PathBuf;

use swipeable_common::config::TrackerConfig;
use swipeable_gesture::{
    replay, Direction, GestureLogHeader, GestureLogWriter, GestureRecord, RecognizedGesture,
};
use swipeable_pointer_model::event::parse_stream;

pub fn run(
    path: PathBuf,
    tracker: &TrackerConfig,
    all: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("Replaying events from: {}", path.display());

    tracker
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid tracker options: {e}"))?;

    let content = std::fs::read_to_string(&path)
        .map_err(|_| anyhow::anyhow!("Events file not found: {}", path.display()))?;
    let (header, events) =
        parse_stream(&content).map_err(|e| anyhow::anyhow!("Failed to parse events: {e}"))?;

    if let Some(header) = &header {
        print!("  Stream: schema {}, device {:?}", header.schema_version, header.device);
        if let Some((w, h)) = header.viewport {
            print!(", viewport {w}x{h}");
        }
        println!();
    }
    tracing::debug!(path = %path.display(), events = events.len(), "Loaded event stream");
    println!("  Loaded {} events", events.len());

    if events.is_empty() {
        println!("  No events to replay.");
        return Ok(());
    }
    if tracker.disabled {
        println!("  Tracker is disabled in configuration; no gestures will be recognized.");
    }

    let report = replay(&events, tracker)?;

    println!();
    for record in &report.gestures {
        if all || !is_progress(&record.gesture) {
            println!("  {}", describe(record));
        }
    }

    println!();
    println!("Summary:");
    println!("  Taps: {}", report.taps());
    println!(
        "  Swipes: {} ({} flick)",
        report.swipes().count(),
        report.flicks()
    );
    for direction in Direction::ALL {
        let count = report.swipes_in(direction);
        if count > 0 {
            println!("    {direction}: {count}");
        }
    }
    if report.multi_touch_events > 0 {
        println!(
            "  Ignored multi-touch events: {}",
            report.multi_touch_events
        );
    }
    if tracker.stop_propagation {
        println!("  Propagation stopped: {}", report.propagation_stopped);
    }
    if tracker.prevent_default_touchmove_event {
        println!("  Default prevented: {}", report.default_prevented);
    }

    if let Some(output) = output {
        let header = GestureLogHeader::new(path.display().to_string(), tracker.clone());
        let mut writer = GestureLogWriter::new(&output, &header)
            .map_err(|e| anyhow::anyhow!("Failed to create gesture log: {e}"))?;
        for record in &report.gestures {
            writer.write_record(record)?;
        }
        writer.flush()?;
        println!();
        println!(
            "Wrote {} gestures to {}",
            writer.records_written(),
            output.display()
        );
    }

    Ok(())
}

fn is_progress(gesture: &RecognizedGesture) -> bool {
    matches!(
        gesture,
        RecognizedGesture::Swiping { .. } | RecognizedGesture::SwipingDirection { .. }
    )
}

fn describe(record: &GestureRecord) -> String {
    let t = record.timestamp_ms;
    match &record.gesture {
        RecognizedGesture::Swiping {
            delta_x,
            delta_y,
            velocity,
            ..
        } => format!("[{t:>8}ms] swiping     dx={delta_x:.1} dy={delta_y:.1} v={velocity:.3}"),
        RecognizedGesture::SwipingDirection {
            direction,
            distance,
        } => format!("[{t:>8}ms] swiping {direction:<5} {distance:.1}px"),
        RecognizedGesture::Swiped {
            delta_x,
            delta_y,
            is_flick,
            velocity,
        } => format!(
            "[{t:>8}ms] swiped      dx={delta_x:.1} dy={delta_y:.1} v={velocity:.3}{}",
            if *is_flick { " (flick)" } else { "" }
        ),
        RecognizedGesture::SwipedDirection {
            direction,
            distance,
            is_flick,
        } => format!(
            "[{t:>8}ms] swiped {direction:<5}  {distance:.1}px{}",
            if *is_flick { " (flick)" } else { "" }
        ),
        RecognizedGesture::Tap { x, y } => format!("[{t:>8}ms] tap         at ({x:.1}, {y:.1})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_marks_flicks() {
        let record = GestureRecord {
            timestamp_ms: 2064,
            gesture: RecognizedGesture::SwipedDirection {
                direction: Direction::Left,
                distance: 160.0,
                is_flick: true,
            },
        };
        let line = describe(&record);
        assert!(line.contains("swiped left"));
        assert!(line.contains("160.0px"));
        assert!(line.ends_with("(flick)"));
    }

    #[test]
    fn test_progress_records_are_hidden_by_default() {
        assert!(is_progress(&RecognizedGesture::SwipingDirection {
            direction: Direction::Up,
            distance: 12.0,
        }));
        assert!(!is_progress(&RecognizedGesture::Tap { x: 0.0, y: 0.0 }));
    }
}
