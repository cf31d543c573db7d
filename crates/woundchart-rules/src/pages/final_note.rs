use serde::{Deserialize, Serialize};
use ts_rs::TS;
use woundchart_core::models::checklist::{export_checklist, ChecklistItem};
use woundchart_core::steps::WorkflowStep;

use crate::error::RuleError;
use crate::{Gate, MissingItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FinalNoteTab {
    #[default]
    Narrative,
    Json,
    Fhir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FinalNote {
    pub note_submitted: bool,
    pub active_tab: FinalNoteTab,
    pub narrative_note: String,
    pub checklist: Vec<ChecklistItem>,
}

impl Default for FinalNote {
    fn default() -> Self {
        Self {
            note_submitted: false,
            active_tab: FinalNoteTab::Narrative,
            narrative_note: String::new(),
            checklist: export_checklist(),
        }
    }
}

impl FinalNote {
    pub fn toggle_item(&mut self, id: u32) -> Result<(), RuleError> {
        let item = self
            .checklist
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(RuleError::UnknownChecklistItem(id))?;
        item.checked = !item.checked;
        Ok(())
    }

    pub fn all_checked(&self) -> bool {
        self.checklist.iter().all(|i| i.checked)
    }

    /// Mark the note as sent. Returns `false` if it had already been sent.
    pub fn send(&mut self) -> bool {
        if self.note_submitted {
            return false;
        }
        self.note_submitted = true;
        tracing::info!("final note marked as submitted");
        true
    }
}

impl Gate for FinalNote {
    fn step(&self) -> WorkflowStep {
        WorkflowStep::FinalNote
    }

    fn missing(&self) -> Vec<MissingItem> {
        self.checklist
            .iter()
            .filter(|i| !i.checked)
            .map(|i| MissingItem::new(format!("checklist_{}", i.id), i.label.clone()))
            .collect()
    }
}
