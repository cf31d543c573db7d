use woundchart_core::steps::{all_steps, WorkflowStep};

#[test]
fn nine_steps_in_order() {
    let steps = all_steps();
    assert_eq!(steps.len(), 9);
    assert_eq!(steps[0].path, "/note-capture");
    assert_eq!(steps[8].path, "/final-note");
    for (i, s) in steps.iter().enumerate() {
        assert_eq!(s.number as usize, i + 1);
    }
}

#[test]
fn navigation_is_linear() {
    assert_eq!(WorkflowStep::NoteCapture.previous(), None);
    assert_eq!(WorkflowStep::NoteCapture.next(), Some(WorkflowStep::StructuredNote));
    assert_eq!(WorkflowStep::JwWastage.next(), Some(WorkflowStep::FinalNote));
    assert_eq!(WorkflowStep::FinalNote.next(), None);
    assert_eq!(WorkflowStep::FinalNote.previous(), Some(WorkflowStep::JwWastage));
}

#[test]
fn from_path_accepts_leading_slash_or_bare_slug() {
    assert_eq!(
        WorkflowStep::from_path("/cms-validation").unwrap(),
        WorkflowStep::CmsValidation
    );
    assert_eq!(
        WorkflowStep::from_path("wiser-audit").unwrap(),
        WorkflowStep::WiserAudit
    );
    assert!(WorkflowStep::from_path("/checkout").is_err());
}

#[test]
fn summary_links_neighbours() {
    let summary = WorkflowStep::LcdCompliance.summary();
    assert_eq!(summary.number, 3);
    assert_eq!(summary.previous.as_deref(), Some("/structured-note"));
    assert_eq!(summary.next.as_deref(), Some("/autofill-confirm"));
}
