use serde::{Deserialize, Serialize};
use woundchart_rules::cms::CmsValidation;
use woundchart_rules::fda::FdaLanguage;
use woundchart_rules::lcd::ComplianceChecklist;
use woundchart_rules::pages::final_note::FinalNote;
use woundchart_rules::pages::note_capture::NoteCapture;
use woundchart_rules::pages::structured_note::StructuredNote;
use woundchart_rules::wastage::JwWastage;
use woundchart_rules::wiser::WiserAudit;

/// The page records a final note is exported from. Every page is optional;
/// an absent page exports as its blank record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteBundle {
    pub note_capture: NoteCapture,
    pub structured_note: StructuredNote,
    pub lcd_compliance: Option<ComplianceChecklist>,
    pub cms_validation: CmsValidation,
    pub wiser_audit: WiserAudit,
    pub fda_language: FdaLanguage,
    pub jw_wastage: JwWastage,
    pub final_note: FinalNote,
}

impl NoteBundle {
    /// Encounter date from the structured preview, falling back to the
    /// capture page.
    pub fn encounter_date(&self) -> &str {
        if self.structured_note.encounter_date.trim().is_empty() {
            &self.note_capture.encounter_date
        } else {
            &self.structured_note.encounter_date
        }
    }
}
