//! Append-only JSONL writer for recognized gestures.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use swipeable_common::config::TrackerConfig;
use swipeable_common::error::{SwipeableError, SwipeableResult};

use crate::replay::GestureRecord;

/// Schema version written into gesture log headers.
pub const GESTURE_LOG_SCHEMA_VERSION: &str = "1.0";

/// First line of a gesture log: where the gestures came from and the
/// options they were recognized with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureLogHeader {
    pub schema_version: String,
    /// Path or label of the source event stream.
    pub source: String,
    pub tracker: TrackerConfig,
}

impl GestureLogHeader {
    pub fn new(source: impl Into<String>, tracker: TrackerConfig) -> Self {
        Self {
            schema_version: GESTURE_LOG_SCHEMA_VERSION.to_string(),
            source: source.into(),
            tracker,
        }
    }
}

/// Writes gesture records to a JSONL file.
pub struct GestureLogWriter {
    writer: BufWriter<File>,
    records_written: u64,
}

impl GestureLogWriter {
    /// Create a new writer, writing the header as the first line.
    pub fn new(path: &Path, header: &GestureLogHeader) -> SwipeableResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        let mut writer = BufWriter::new(file);

        // Header goes in a comment line so readers can skip it.
        let header_json = serde_json::to_string(header)?;
        writeln!(writer, "# {header_json}")
            .map_err(|e| SwipeableError::stream(format!("Failed to write header: {e}")))?;

        Ok(Self {
            writer,
            records_written: 0,
        })
    }

    /// Write a single record as a JSONL line.
    pub fn write_record(&mut self, record: &GestureRecord) -> SwipeableResult<()> {
        let json = serde_json::to_string(record)?;
        writeln!(self.writer, "{json}")
            .map_err(|e| SwipeableError::stream(format!("Failed to write gesture: {e}")))?;
        self.records_written += 1;
        Ok(())
    }

    /// Flush buffered writes to disk.
    pub fn flush(&mut self) -> SwipeableResult<()> {
        self.writer
            .flush()
            .map_err(|e| SwipeableError::stream(format!("Failed to flush gestures: {e}")))?;
        Ok(())
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }
}

impl Drop for GestureLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
