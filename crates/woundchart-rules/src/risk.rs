use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use woundchart_core::fields::to_fixed;

pub const LOW_THRESHOLD: f64 = 0.33;
pub const MEDIUM_THRESHOLD: f64 = 0.66;

/// Gauge geometry in the fixed 200×120 viewBox.
pub const GAUGE_CENTER: (f64, f64) = (100.0, 100.0);
pub const NEEDLE_LENGTH: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets a normalized 0–1 score.
    pub fn from_normalized(normalized: f64) -> Self {
        if normalized <= LOW_THRESHOLD {
            RiskLevel::Low
        } else if normalized <= MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

/// Clamp to 0–100 and scale to 0–1. NaN counts as 0.
pub fn normalize(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0) / 100.0
}

/// Two-decimal normalized score, e.g. "0.33".
pub fn normalized_display(score: f64) -> String {
    to_fixed(normalize(score), 2)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskGauge {
    pub score: f64,
    pub normalized: f64,
    /// Two-decimal display, e.g. "0.33".
    pub display: String,
    pub level: RiskLevel,
    pub label: String,
    /// Radians; π at score 0, 0 at score 100.
    pub needle_angle: f64,
    pub needle_end: (f64, f64),
}

impl RiskGauge {
    pub fn new(score: f64) -> Self {
        let normalized = normalize(score);
        let score = if score.is_finite() { score } else { normalized * 100.0 };
        let level = RiskLevel::from_normalized(normalized);
        let needle_angle = PI - normalized * PI;
        let (cx, cy) = GAUGE_CENTER;
        Self {
            score,
            normalized,
            display: normalized_display(score),
            level,
            label: level.label().to_string(),
            needle_angle,
            needle_end: (
                cx + NEEDLE_LENGTH * needle_angle.cos(),
                cy - NEEDLE_LENGTH * needle_angle.sin(),
            ),
        }
    }
}
