use serde::{Deserialize, Serialize};
use ts_rs::TS;
use woundchart_core::error::CoreError;
use woundchart_core::fields::is_blank;
use woundchart_core::models::catalog;
use woundchart_core::models::wound::{WoundMeasurement, WoundTrendPoint};
use woundchart_core::steps::WorkflowStep;

use crate::{Gate, MissingItem};

/// Interpolation factors for weeks 2 and 3 of the trend line.
const WEEK_2_FACTOR: f64 = 0.88;
const WEEK_3_FACTOR: f64 = 0.68;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct StructuredNote {
    pub patient_name: String,
    pub date_of_birth: String,
    pub mrn: String,
    pub encounter_date: String,
    pub wound_length: Option<f64>,
    pub wound_width: Option<f64>,
    pub procedure: Option<String>,
    pub procedure_location: String,
    /// cm², four weeks ago.
    pub initial_size: Option<f64>,
    /// cm²
    pub current_size: Option<f64>,
}

impl StructuredNote {
    pub fn select_procedure(&mut self, value: &str) -> Result<(), CoreError> {
        self.procedure = catalog::procedures().select(value)?;
        Ok(())
    }

    pub fn procedure_identified(&self) -> bool {
        self.procedure
            .as_deref()
            .is_some_and(|p| catalog::procedures().contains(p))
    }

    pub fn wound(&self) -> WoundMeasurement {
        WoundMeasurement::new(self.wound_length, self.wound_width)
    }

    /// Whole-percent size reduction since the initial measurement, 0 when
    /// either size is missing or zero.
    pub fn reduction_percentage(&self) -> i64 {
        match (self.initial_size, self.current_size) {
            (Some(initial), Some(current)) if initial != 0.0 && current != 0.0 => {
                ((initial - current) / initial * 100.0).round() as i64
            }
            _ => 0,
        }
    }

    /// Four weekly points; weeks 2 and 3 are interpolated from the
    /// initial size.
    pub fn wound_trend(&self) -> Vec<WoundTrendPoint> {
        let initial = self.initial_size.unwrap_or(0.0);
        vec![
            WoundTrendPoint::new("Week 1", initial),
            WoundTrendPoint::new("Week 2", initial * WEEK_2_FACTOR),
            WoundTrendPoint::new("Week 3", initial * WEEK_3_FACTOR),
            WoundTrendPoint::new("Week 4", self.current_size.unwrap_or(0.0)),
        ]
    }
}

impl Gate for StructuredNote {
    fn step(&self) -> WorkflowStep {
        WorkflowStep::StructuredNote
    }

    fn missing(&self) -> Vec<MissingItem> {
        let fields = [
            ("patient_name", "Patient name", &self.patient_name),
            ("date_of_birth", "Date of birth", &self.date_of_birth),
            ("mrn", "MRN", &self.mrn),
            ("encounter_date", "Encounter date", &self.encounter_date),
        ];
        let mut missing: Vec<MissingItem> = fields
            .iter()
            .filter(|(_, _, value)| is_blank(value))
            .map(|(field, label, _)| MissingItem::new(*field, *label))
            .collect();
        if !self.procedure_identified() {
            missing.push(MissingItem::new("procedure", "Procedure type"));
        }
        missing
    }
}
