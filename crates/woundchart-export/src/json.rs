//! The ClinicalNote JSON export.
//!
//! Field names are fixed by the downstream consumer, so the structs here
//! keep snake_case keys. A blank bundle exports the empty / zero / false
//! placeholder document.

use serde::{Deserialize, Serialize};
use woundchart_core::fields::is_blank;
use woundchart_core::models::catalog;
use woundchart_core::models::claim_line::ClaimLine;
use woundchart_rules::lcd::RuleStatus;

use crate::bundle::NoteBundle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalNote {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub status: String,
    pub patient: PatientSection,
    pub encounter: EncounterSection,
    pub procedure: ProcedureSection,
    pub wound: WoundSection,
    pub compliance: ComplianceSection,
    pub billing: BillingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSection {
    pub identifier: String,
    pub name: String,
    pub dob: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterSection {
    pub date: String,
    pub provider: String,
    pub facility: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureSection {
    pub code: String,
    pub description: String,
    pub modifiers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoundSection {
    pub location: String,
    pub size_cm2: f64,
    pub healing_progress: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSection {
    pub lcd_l36377: String,
    pub cms_validated: bool,
    pub fda_compliant: bool,
    pub wiser_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSection {
    pub claim_lines: Vec<ClaimLine>,
    pub jw_modifier: bool,
    pub wastage_documented: bool,
}

/// "pass" once every rule passed, "fail" if any rule failed, otherwise
/// "pending". An absent checklist is pending.
fn lcd_status(bundle: &NoteBundle) -> &'static str {
    match &bundle.lcd_compliance {
        Some(checklist) if checklist.all_passed() => "pass",
        Some(checklist) if checklist.rules.iter().any(|r| r.status == RuleStatus::Fail) => {
            "fail"
        }
        _ => "pending",
    }
}

pub fn clinical_note(bundle: &NoteBundle) -> ClinicalNote {
    let structured = &bundle.structured_note;
    let cms = &bundle.cms_validation;
    let wastage = bundle.jw_wastage.calculation();

    let mut modifiers = Vec::new();
    if !is_blank(&cms.kx_modifier_justification) {
        modifiers.push("KX".to_string());
    }
    if wastage.jw_modifier_needed {
        modifiers.push("JW".to_string());
    }

    let description = structured
        .procedure
        .as_deref()
        .and_then(|value| catalog::procedures().get(value))
        .map(|option| option.label.clone())
        .unwrap_or_default();

    let reduction = structured.reduction_percentage();
    let healing_progress = if reduction > 0 {
        format!("{reduction}% reduction")
    } else {
        String::new()
    };

    ClinicalNote {
        resource_type: "ClinicalNote".to_string(),
        status: "final".to_string(),
        patient: PatientSection {
            identifier: structured.mrn.clone(),
            name: structured.patient_name.clone(),
            dob: structured.date_of_birth.clone(),
        },
        encounter: EncounterSection {
            date: bundle.encounter_date().to_string(),
            provider: bundle.note_capture.provider_name.clone(),
            facility: bundle.note_capture.facility_name.clone(),
        },
        procedure: ProcedureSection {
            code: bundle.jw_wastage.hcpcs_code.clone(),
            description,
            modifiers,
        },
        wound: WoundSection {
            location: structured.procedure_location.clone(),
            size_cm2: structured.wound().area().unwrap_or(0.0),
            healing_progress,
        },
        compliance: ComplianceSection {
            lcd_l36377: lcd_status(bundle).to_string(),
            cms_validated: cms.all_passed(),
            fda_compliant: bundle.fda_language.all_compliant(),
            wiser_score: bundle.wiser_audit.risk_score.unwrap_or(0.0),
        },
        billing: BillingSection {
            claim_lines: cms.claim_lines.lines().to_vec(),
            jw_modifier: wastage.jw_modifier_needed,
            wastage_documented: wastage.jw_modifier_needed
                && !is_blank(&bundle.jw_wastage.product_name)
                && !is_blank(&bundle.jw_wastage.hcpcs_code),
        },
    }
}

/// Pretty-printed preview as shown on the JSON tab.
pub fn clinical_note_json(bundle: &NoteBundle) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&clinical_note(bundle))
}
