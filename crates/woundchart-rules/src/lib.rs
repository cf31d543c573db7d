//! woundchart-rules
//!
//! The workflow rules behind each wizard page. Pure data and arithmetic, no
//! I/O. Every page is a view-model struct that owns its fields and re-derives
//! its own completeness flags; nothing is carried between pages.

pub mod actions;
pub mod cms;
pub mod error;
pub mod fda;
pub mod lcd;
pub mod pages;
pub mod risk;
pub mod wastage;
pub mod wiser;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use woundchart_core::steps::WorkflowStep;

/// A required field that is blank. "Invalid" is not distinguished from
/// "missing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MissingItem {
    pub field: String,
    pub message: String,
}

impl MissingItem {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Back/next links for a page footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Navigation {
    pub back: Option<String>,
    pub next: Option<String>,
    pub can_continue: bool,
}

/// Implemented by every page view-model.
pub trait Gate {
    /// The workflow step this page renders.
    fn step(&self) -> WorkflowStep;

    /// Required fields that are still blank, in display order.
    fn missing(&self) -> Vec<MissingItem>;

    /// Whether an incomplete page disables its Continue button. Most pages
    /// only report what is missing.
    fn gates_continue(&self) -> bool {
        false
    }

    fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    fn can_continue(&self) -> bool {
        !self.gates_continue() || self.is_complete()
    }

    fn navigation(&self) -> Navigation {
        let step = self.step();
        Navigation {
            back: step.previous().map(WorkflowStep::path),
            next: step.next().map(WorkflowStep::path),
            can_continue: self.can_continue(),
        }
    }
}
