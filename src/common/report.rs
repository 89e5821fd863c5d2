//! Serializable summaries of `stego` runs, printed with `--json`.

use serde::Serialize;

use crate::codec;
use crate::processing::{NotFoundReason, PixelBuffer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    pub samples: usize,
    pub max_message_bytes: usize,
}

impl CapacityReport {
    pub fn for_pixels(pixels: &PixelBuffer) -> Self {
        let samples = pixels.samples().len();
        Self {
            width: pixels.width(),
            height: pixels.height(),
            samples,
            max_message_bytes: codec::capacity(samples),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodeReport {
    pub output: String,
    pub message_bytes: usize,
    pub samples_written: usize,
    pub capacity: CapacityReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeReport {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<NotFoundReason>,
}

/// Pretty JSON for any report.
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
