use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Wound dimensions in centimetres. Any dimension may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WoundMeasurement {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub depth: Option<f64>,
}

impl WoundMeasurement {
    pub fn new(length: Option<f64>, width: Option<f64>) -> Self {
        Self {
            length,
            width,
            depth: None,
        }
    }

    /// `length × width` in cm² when both are present. Negative dimensions
    /// count as zero.
    pub fn area(&self) -> Option<f64> {
        match (self.length, self.width) {
            (Some(l), Some(w)) => Some(l.max(0.0) * w.max(0.0)),
            _ => None,
        }
    }
}

/// One point of the wound-size trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WoundTrendPoint {
    pub label: String,
    pub size: f64,
}

impl WoundTrendPoint {
    pub fn new(label: impl Into<String>, size: f64) -> Self {
        Self {
            label: label.into(),
            size,
        }
    }
}
