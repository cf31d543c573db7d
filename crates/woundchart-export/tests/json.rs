use woundchart_export::bundle::NoteBundle;
use woundchart_export::json::{clinical_note, clinical_note_json};
use woundchart_rules::lcd::{ComplianceChecklist, RuleStatus};

fn filled_bundle() -> NoteBundle {
    let mut bundle = NoteBundle::default();
    bundle.structured_note.patient_name = "John Smith".to_string();
    bundle.structured_note.date_of_birth = "03/15/1958".to_string();
    bundle.structured_note.mrn = "MRN-4471".to_string();
    bundle.structured_note.encounter_date = "01/15/2025".to_string();
    bundle.structured_note.wound_length = Some(5.0);
    bundle.structured_note.wound_width = Some(4.0);
    bundle.structured_note.procedure_location = "Left plantar forefoot".to_string();
    bundle.structured_note.initial_size = Some(25.0);
    bundle.structured_note.current_size = Some(20.0);
    bundle.structured_note.select_procedure("cellular-graft").unwrap();
    bundle.note_capture.provider_name = "Dr. Lee".to_string();
    bundle.note_capture.facility_name = "Westside Wound Center".to_string();
    bundle.cms_validation.kx_modifier_justification = "Criteria met".to_string();
    bundle.jw_wastage.wound_length = Some(5.0);
    bundle.jw_wastage.wound_width = Some(4.0);
    bundle.jw_wastage.product_size = Some(48.0);
    bundle.jw_wastage.product_name = "Apligraf".to_string();
    bundle.jw_wastage.hcpcs_code = "Q4101".to_string();
    bundle.wiser_audit.risk_score = Some(42.0);
    bundle
}

#[test]
fn blank_bundle_exports_placeholders() {
    let value = serde_json::to_value(clinical_note(&NoteBundle::default())).unwrap();
    assert_eq!(value["resourceType"], "ClinicalNote");
    assert_eq!(value["status"], "final");
    assert_eq!(value["patient"]["identifier"], "");
    assert_eq!(value["encounter"]["provider"], "");
    assert_eq!(value["procedure"]["modifiers"], serde_json::json!([]));
    assert_eq!(value["wound"]["size_cm2"], 0.0);
    assert_eq!(value["wound"]["healing_progress"], "");
    assert_eq!(value["compliance"]["lcd_l36377"], "pending");
    assert_eq!(value["compliance"]["cms_validated"], false);
    assert_eq!(value["compliance"]["fda_compliant"], false);
    assert_eq!(value["compliance"]["wiser_score"], 0.0);
    assert_eq!(value["billing"]["claim_lines"], serde_json::json!([]));
    assert_eq!(value["billing"]["jw_modifier"], false);
    assert_eq!(value["billing"]["wastage_documented"], false);
}

#[test]
fn filled_bundle_carries_page_values() {
    let note = clinical_note(&filled_bundle());
    assert_eq!(note.patient.name, "John Smith");
    assert_eq!(note.patient.identifier, "MRN-4471");
    assert_eq!(note.encounter.date, "01/15/2025");
    assert_eq!(note.encounter.facility, "Westside Wound Center");
    assert_eq!(note.procedure.code, "Q4101");
    assert_eq!(note.procedure.description, "Cellular Skin Graft Application");
    assert_eq!(note.procedure.modifiers, vec!["KX".to_string(), "JW".to_string()]);
    assert_eq!(note.wound.size_cm2, 20.0);
    assert_eq!(note.wound.healing_progress, "20% reduction");
    assert_eq!(note.compliance.wiser_score, 42.0);
    assert!(note.billing.jw_modifier);
    assert!(note.billing.wastage_documented);
}

#[test]
fn encounter_date_falls_back_to_capture_page() {
    let mut bundle = NoteBundle::default();
    bundle.note_capture.encounter_date = "2025-01-10".to_string();
    assert_eq!(clinical_note(&bundle).encounter.date, "2025-01-10");
}

#[test]
fn lcd_status_reflects_checklist() {
    let mut bundle = NoteBundle::default();
    let mut checklist = ComplianceChecklist::seeded();
    checklist.set_status(2, RuleStatus::Fail).unwrap();
    bundle.lcd_compliance = Some(checklist.clone());
    assert_eq!(clinical_note(&bundle).compliance.lcd_l36377, "fail");

    checklist.set_status(2, RuleStatus::Pending).unwrap();
    checklist.autofill_missing();
    bundle.lcd_compliance = Some(checklist);
    assert_eq!(clinical_note(&bundle).compliance.lcd_l36377, "pass");
}

#[test]
fn pretty_json_parses_back() {
    let text = clinical_note_json(&filled_bundle()).unwrap();
    assert!(text.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["patient"]["name"], "John Smith");
}
