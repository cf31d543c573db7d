use serde::{Deserialize, Serialize};
use ts_rs::TS;
use woundchart_core::error::CoreError;
use woundchart_core::fields::{Badge, BadgeStatus};
use woundchart_core::models::catalog;
use woundchart_core::steps::WorkflowStep;

use crate::{Gate, MissingItem};

pub const OFFLOADING_REQUIRED: &str = "This field is required to proceed";

/// Display-only values retrieved from patient history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AutofilledFindings {
    pub abi: f64,
    pub abi_exam_date: String,
    pub abi_result: String,
    pub abi_source: String,
    pub infection_status: String,
    pub badge: Badge,
}

impl Default for AutofilledFindings {
    fn default() -> Self {
        Self {
            abi: 0.72,
            abi_exam_date: "12/10/2024".to_string(),
            abi_result: "Adequate perfusion (\u{2265}0.6 required)".to_string(),
            abi_source: "Vascular lab study performed by Dr. Martinez".to_string(),
            infection_status: "No Active Infection".to_string(),
            badge: Badge::new(BadgeStatus::Autofilled, "Autofilled"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AutofillConfirm {
    pub offloading_method: String,
}

impl AutofillConfirm {
    pub fn findings(&self) -> AutofilledFindings {
        AutofilledFindings::default()
    }

    pub fn select_offloading(&mut self, value: &str) -> Result<(), CoreError> {
        self.offloading_method =
            catalog::offloading_methods().toggle(&self.offloading_method, value)?;
        Ok(())
    }

    pub fn offloading_selected(&self) -> bool {
        catalog::offloading_methods().contains(&self.offloading_method)
    }

    pub fn offloading_error(&self) -> Option<&'static str> {
        (!self.offloading_selected()).then_some(OFFLOADING_REQUIRED)
    }
}

impl Gate for AutofillConfirm {
    fn step(&self) -> WorkflowStep {
        WorkflowStep::AutofillConfirm
    }

    fn missing(&self) -> Vec<MissingItem> {
        if !self.offloading_selected() {
            vec![MissingItem::new("offloading_method", "Offloading method")]
        } else {
            Vec::new()
        }
    }

    fn gates_continue(&self) -> bool {
        true
    }
}
