use woundchart_core::models::claim_line::ClaimLineField;
use woundchart_core::models::phrase::PhraseField;
use woundchart_rules::actions::{
    Apply, CmsAction, FdaAction, FinalNoteAction, LcdAction, NoteCaptureAction, WiserAction,
};
use woundchart_rules::cms::CmsValidation;
use woundchart_rules::fda::FdaLanguage;
use woundchart_rules::lcd::{ComplianceChecklist, RuleStatus};
use woundchart_rules::pages::final_note::{FinalNote, FinalNoteTab};
use woundchart_rules::pages::note_capture::NoteCapture;
use woundchart_rules::wiser::WiserAudit;
use woundchart_rules::Gate;

#[test]
fn note_capture_actions_go_through_the_catalogue() {
    let mut page = NoteCapture::default();
    page.apply(NoteCaptureAction::SelectPatient {
        value: "pt-002".to_string(),
    })
    .unwrap();
    assert_eq!(page.selected_patient, "pt-002");

    let err = page
        .apply(NoteCaptureAction::SelectEncounter {
            value: "enc-999".to_string(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("enc-999"));
    assert!(page.selected_encounter.is_empty());

    page.apply(NoteCaptureAction::ToggleRecording).unwrap();
    assert!(page.is_recording);
}

#[test]
fn lcd_actions_edit_one_rule() {
    let mut checklist = ComplianceChecklist::seeded();
    checklist
        .apply(LcdAction::SetStatus {
            id: 2,
            status: RuleStatus::Fail,
        })
        .unwrap();
    checklist
        .apply(LcdAction::SetEvidence {
            id: 2,
            evidence: "No vascular study on file".to_string(),
        })
        .unwrap();
    checklist.apply(LcdAction::ToggleExpand { id: 2 }).unwrap();

    let rule = checklist.rule(2).unwrap();
    assert_eq!(rule.status, RuleStatus::Fail);
    assert_eq!(rule.evidence, "No vascular study on file");
    assert!(rule.expanded);
    assert_eq!(checklist.fail_count(), 1);

    assert!(checklist.apply(LcdAction::ToggleExpand { id: 42 }).is_err());
}

#[test]
fn cms_actions_edit_claim_lines_by_index() {
    let mut page = CmsValidation::default();
    page.apply(CmsAction::AddClaimLine).unwrap();
    page.apply(CmsAction::UpdateClaimLine {
        index: 0,
        field: ClaimLineField::Code,
        value: "15275".to_string(),
    })
    .unwrap();
    assert_eq!(page.claim_lines.lines()[0].code, "15275");

    assert!(page.apply(CmsAction::RemoveClaimLine { index: 3 }).is_err());
    page.apply(CmsAction::RemoveClaimLine { index: 0 }).unwrap();
    assert!(page.claim_lines.is_empty());
}

#[test]
fn wiser_actions_reject_unknown_options() {
    let mut audit = WiserAudit::default();
    audit
        .apply(WiserAction::SelectWastageTrend {
            value: "decreasing".to_string(),
        })
        .unwrap();
    assert_eq!(audit.jw_wastage_trend.as_deref(), Some("decreasing"));
    assert!(audit
        .apply(WiserAction::SelectState {
            value: "ZZ".to_string()
        })
        .is_err());

    audit.apply(WiserAction::AddStateRule).unwrap();
    audit
        .apply(WiserAction::UpdateStateRule {
            index: 0,
            value: "Photo documentation each visit".to_string(),
        })
        .unwrap();
    assert_eq!(audit.state_rules, vec!["Photo documentation each visit"]);
    audit.apply(WiserAction::RemoveStateRule { index: 0 }).unwrap();
    assert!(audit.state_rules.is_empty());
}

#[test]
fn fda_actions_manage_the_phrase_dictionary() {
    let mut page = FdaLanguage::default();
    page.apply(FdaAction::AddPhrase).unwrap();
    let id = page.phrases[0].id;
    page.apply(FdaAction::UpdatePhrase {
        id,
        field: PhraseField::Forbidden,
        value: "cures".to_string(),
    })
    .unwrap();
    page.apply(FdaAction::ToggleHighlight).unwrap();
    assert!(page.highlight_diffs);
    assert_eq!(page.phrases[0].forbidden, "cures");

    page.apply(FdaAction::RemovePhrase { id }).unwrap();
    assert!(page.apply(FdaAction::RemovePhrase { id }).is_err());
}

#[test]
fn final_note_actions_toggle_items_and_tabs() {
    let mut page = FinalNote::default();
    page.apply(FinalNoteAction::ToggleItem { id: 1 }).unwrap();
    assert!(page.checklist[0].checked);
    page.apply(FinalNoteAction::SelectTab {
        tab: FinalNoteTab::Fhir,
    })
    .unwrap();
    assert_eq!(page.active_tab, FinalNoteTab::Fhir);
    assert!(page.apply(FinalNoteAction::ToggleItem { id: 99 }).is_err());
}
