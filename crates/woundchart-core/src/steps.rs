//! Workflow step table and path conventions.
//!
//! Pure data: the nine steps of the documentation pipeline, in order.
//! Navigation is linear and carries no state between steps.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum WorkflowStep {
    NoteCapture,
    StructuredNote,
    LcdCompliance,
    AutofillConfirm,
    CmsValidation,
    WiserAudit,
    FdaLanguage,
    JwWastage,
    FinalNote,
}

/// Serializable summary of a step, as listed on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StepSummary {
    pub step: WorkflowStep,
    pub number: u8,
    pub title: String,
    pub description: String,
    pub path: String,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl WorkflowStep {
    pub const ALL: [WorkflowStep; 9] = [
        WorkflowStep::NoteCapture,
        WorkflowStep::StructuredNote,
        WorkflowStep::LcdCompliance,
        WorkflowStep::AutofillConfirm,
        WorkflowStep::CmsValidation,
        WorkflowStep::WiserAudit,
        WorkflowStep::FdaLanguage,
        WorkflowStep::JwWastage,
        WorkflowStep::FinalNote,
    ];

    /// 1-based position in the workflow.
    pub fn number(self) -> u8 {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .map(|i| i as u8 + 1)
            .unwrap_or(0)
    }

    pub fn slug(self) -> &'static str {
        match self {
            WorkflowStep::NoteCapture => "note-capture",
            WorkflowStep::StructuredNote => "structured-note",
            WorkflowStep::LcdCompliance => "lcd-compliance",
            WorkflowStep::AutofillConfirm => "autofill-confirm",
            WorkflowStep::CmsValidation => "cms-validation",
            WorkflowStep::WiserAudit => "wiser-audit",
            WorkflowStep::FdaLanguage => "fda-language",
            WorkflowStep::JwWastage => "jw-wastage",
            WorkflowStep::FinalNote => "final-note",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn title(self) -> &'static str {
        match self {
            WorkflowStep::NoteCapture => "Raw Note Capture",
            WorkflowStep::StructuredNote => "Structured Preview",
            WorkflowStep::LcdCompliance => "LCD Compliance",
            WorkflowStep::AutofillConfirm => "Autofill & Confirm",
            WorkflowStep::CmsValidation => "CMS Validation",
            WorkflowStep::WiserAudit => "WISER Audit Risk",
            WorkflowStep::FdaLanguage => "FDA Language",
            WorkflowStep::JwWastage => "JW Wastage",
            WorkflowStep::FinalNote => "Final Note",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WorkflowStep::NoteCapture => "Write or dictate clinical encounter",
            WorkflowStep::StructuredNote => "System-generated first draft",
            WorkflowStep::LcdCompliance => "Coverage rules check",
            WorkflowStep::AutofillConfirm => "Fix missing information",
            WorkflowStep::CmsValidation => "Billing requirements check",
            WorkflowStep::WiserAudit => "Audit risk simulation",
            WorkflowStep::FdaLanguage => "Clinical wording compliance",
            WorkflowStep::JwWastage => "Product usage calculation",
            WorkflowStep::FinalNote => "Export & send to EMR",
        }
    }

    pub fn next(self) -> Option<WorkflowStep> {
        Self::ALL.get(self.number() as usize).copied()
    }

    pub fn previous(self) -> Option<WorkflowStep> {
        let idx = (self.number() as usize).checked_sub(2)?;
        Self::ALL.get(idx).copied()
    }

    /// Accepts either `/slug` or a bare `slug`.
    pub fn from_path(path: &str) -> Result<WorkflowStep, CoreError> {
        let slug = path.strip_prefix('/').unwrap_or(path);
        Self::ALL
            .into_iter()
            .find(|s| s.slug() == slug)
            .ok_or_else(|| CoreError::UnknownStep(path.to_string()))
    }

    pub fn summary(self) -> StepSummary {
        StepSummary {
            step: self,
            number: self.number(),
            title: self.title().to_string(),
            description: self.description().to_string(),
            path: self.path(),
            next: self.next().map(WorkflowStep::path),
            previous: self.previous().map(WorkflowStep::path),
        }
    }
}

pub fn all_steps() -> Vec<StepSummary> {
    WorkflowStep::ALL.iter().map(|s| s.summary()).collect()
}
