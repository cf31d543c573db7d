//! Edit actions a page can receive alongside its record.
//!
//! Each page has a tagged action enum; [`Apply::apply`] routes the action to
//! the page's own edit method so catalogue and index checks always run.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use woundchart_core::models::claim_line::ClaimLineField;
use woundchart_core::models::phrase::PhraseField;

use crate::cms::CmsValidation;
use crate::error::RuleError;
use crate::fda::FdaLanguage;
use crate::lcd::{ComplianceChecklist, RuleStatus};
use crate::pages::autofill_confirm::AutofillConfirm;
use crate::pages::final_note::{FinalNote, FinalNoteTab};
use crate::pages::note_capture::NoteCapture;
use crate::pages::structured_note::StructuredNote;
use crate::wiser::WiserAudit;

pub trait Apply {
    type Action;

    fn apply(&mut self, action: Self::Action) -> Result<(), RuleError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum NoteCaptureAction {
    ToggleRecording,
    SelectPatient { value: String },
    SelectEncounter { value: String },
}

impl Apply for NoteCapture {
    type Action = NoteCaptureAction;

    fn apply(&mut self, action: NoteCaptureAction) -> Result<(), RuleError> {
        match action {
            NoteCaptureAction::ToggleRecording => self.toggle_recording(),
            NoteCaptureAction::SelectPatient { value } => self.select_patient(&value)?,
            NoteCaptureAction::SelectEncounter { value } => self.select_encounter(&value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum StructuredNoteAction {
    SelectProcedure { value: String },
}

impl Apply for StructuredNote {
    type Action = StructuredNoteAction;

    fn apply(&mut self, action: StructuredNoteAction) -> Result<(), RuleError> {
        match action {
            StructuredNoteAction::SelectProcedure { value } => self.select_procedure(&value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum LcdAction {
    ToggleExpand { id: u32 },
    SetStatus { id: u32, status: RuleStatus },
    SetEvidence { id: u32, evidence: String },
}

impl Apply for ComplianceChecklist {
    type Action = LcdAction;

    fn apply(&mut self, action: LcdAction) -> Result<(), RuleError> {
        match action {
            LcdAction::ToggleExpand { id } => self.toggle_expand(id),
            LcdAction::SetStatus { id, status } => self.set_status(id, status),
            LcdAction::SetEvidence { id, evidence } => self.set_evidence(id, evidence),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum AutofillConfirmAction {
    SelectOffloading { value: String },
}

impl Apply for AutofillConfirm {
    type Action = AutofillConfirmAction;

    fn apply(&mut self, action: AutofillConfirmAction) -> Result<(), RuleError> {
        match action {
            AutofillConfirmAction::SelectOffloading { value } => self.select_offloading(&value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CmsAction {
    AddClaimLine,
    RemoveClaimLine {
        index: usize,
    },
    UpdateClaimLine {
        index: usize,
        field: ClaimLineField,
        value: String,
    },
}

impl Apply for CmsValidation {
    type Action = CmsAction;

    fn apply(&mut self, action: CmsAction) -> Result<(), RuleError> {
        match action {
            CmsAction::AddClaimLine => {
                self.claim_lines.add();
            }
            CmsAction::RemoveClaimLine { index } => {
                self.claim_lines.remove(index)?;
            }
            CmsAction::UpdateClaimLine {
                index,
                field,
                value,
            } => self.claim_lines.update(index, field, value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum WiserAction {
    SelectState { value: String },
    SelectWastageTrend { value: String },
    AddStateRule,
    RemoveStateRule { index: usize },
    UpdateStateRule { index: usize, value: String },
}

impl Apply for WiserAudit {
    type Action = WiserAction;

    fn apply(&mut self, action: WiserAction) -> Result<(), RuleError> {
        match action {
            WiserAction::SelectState { value } => self.select_state(&value)?,
            WiserAction::SelectWastageTrend { value } => self.select_wastage_trend(&value)?,
            WiserAction::AddStateRule => {
                self.add_state_rule();
            }
            WiserAction::RemoveStateRule { index } => {
                self.remove_state_rule(index)?;
            }
            WiserAction::UpdateStateRule { index, value } => {
                self.update_state_rule(index, value)?
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FdaAction {
    AddPhrase,
    RemovePhrase {
        id: Uuid,
    },
    UpdatePhrase {
        id: Uuid,
        field: PhraseField,
        value: String,
    },
    ToggleHighlight,
}

impl Apply for FdaLanguage {
    type Action = FdaAction;

    fn apply(&mut self, action: FdaAction) -> Result<(), RuleError> {
        match action {
            FdaAction::AddPhrase => {
                self.add_phrase();
            }
            FdaAction::RemovePhrase { id } => {
                self.remove_phrase(id)?;
            }
            FdaAction::UpdatePhrase { id, field, value } => self.update_phrase(id, field, value)?,
            FdaAction::ToggleHighlight => self.toggle_highlight(),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FinalNoteAction {
    ToggleItem { id: u32 },
    SelectTab { tab: FinalNoteTab },
}

impl Apply for FinalNote {
    type Action = FinalNoteAction;

    fn apply(&mut self, action: FinalNoteAction) -> Result<(), RuleError> {
        match action {
            FinalNoteAction::ToggleItem { id } => self.toggle_item(id)?,
            FinalNoteAction::SelectTab { tab } => self.active_tab = tab,
        }
        Ok(())
    }
}
