use serde::{Deserialize, Serialize};
use ts_rs::TS;
use woundchart_core::error::CoreError;
use woundchart_core::fields::{is_blank, CharacterCounter};
use woundchart_core::models::catalog;
use woundchart_core::steps::WorkflowStep;

use crate::{Gate, MissingItem};

pub const MAX_NOTE_CHARS: usize = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct NoteCapture {
    pub note_text: String,
    pub is_recording: bool,
    pub selected_patient: String,
    pub selected_encounter: String,
    pub provider_name: String,
    pub provider_npi: String,
    pub facility_name: String,
    pub encounter_date: String,
    pub encounter_time: String,
}

impl NoteCapture {
    pub fn character_count(&self) -> CharacterCounter {
        CharacterCounter::of(&self.note_text, MAX_NOTE_CHARS)
    }

    pub fn toggle_recording(&mut self) {
        self.is_recording = !self.is_recording;
    }

    pub fn select_patient(&mut self, value: &str) -> Result<(), CoreError> {
        self.selected_patient = catalog::patients().toggle(&self.selected_patient, value)?;
        Ok(())
    }

    pub fn select_encounter(&mut self, value: &str) -> Result<(), CoreError> {
        self.selected_encounter = catalog::encounters().toggle(&self.selected_encounter, value)?;
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.can_continue()
    }
}

impl Gate for NoteCapture {
    fn step(&self) -> WorkflowStep {
        WorkflowStep::NoteCapture
    }

    fn missing(&self) -> Vec<MissingItem> {
        let mut missing = Vec::new();
        // Values outside the catalogues count as unselected.
        if !catalog::patients().contains(&self.selected_patient) {
            missing.push(MissingItem::new("patient", "Select a patient"));
        }
        if !catalog::encounters().contains(&self.selected_encounter) {
            missing.push(MissingItem::new("encounter", "Select an encounter"));
        }
        if is_blank(&self.note_text) {
            missing.push(MissingItem::new("note_text", "Clinical note"));
        }
        missing
    }

    fn gates_continue(&self) -> bool {
        true
    }
}
