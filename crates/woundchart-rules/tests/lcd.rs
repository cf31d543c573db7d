use woundchart_rules::lcd::{ComplianceChecklist, RuleStatus, RuleTone, Severity};
use woundchart_rules::Gate;

#[test]
fn seeded_with_seven_pending_rules() {
    let checklist = ComplianceChecklist::seeded();
    assert_eq!(checklist.rules.len(), 7);
    assert!(checklist.rules.iter().all(|r| r.status == RuleStatus::Pending));
    assert!(checklist.rules.iter().all(|r| r.evidence.is_empty() && !r.expanded));

    let summary = checklist.summary();
    assert_eq!(summary.pass_count, 0);
    assert_eq!(summary.pending_must_fix, 5);
    assert_eq!(summary.total, 7);
    assert!(!summary.all_passed);
}

#[test]
fn severities_match_seed_order() {
    let checklist = ComplianceChecklist::seeded();
    let severities: Vec<Severity> = checklist.rules.iter().map(|r| r.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::MustFix,
            Severity::MustFix,
            Severity::MustFix,
            Severity::MustFix,
            Severity::MustFix,
            Severity::Recommended,
            Severity::Info,
        ]
    );
    assert_eq!(checklist.rule(2).unwrap().title, "<50% wound reduction");
}

#[test]
fn autofill_leaves_failed_rules_failed() {
    let mut checklist = ComplianceChecklist::seeded();
    checklist.set_status(3, RuleStatus::Fail).unwrap();
    checklist.set_evidence(3, "ABI 0.4").unwrap();

    let filled = checklist.autofill_missing();
    assert_eq!(filled, 6);

    let failed = checklist.rule(3).unwrap();
    assert_eq!(failed.status, RuleStatus::Fail);
    assert_eq!(failed.evidence, "ABI 0.4");

    let run_in = checklist.rule(1).unwrap();
    assert_eq!(run_in.status, RuleStatus::Pass);
    assert_eq!(
        run_in.evidence,
        "Auto-filled: 4-week run-in requirement has been verified from patient records."
    );

    assert_eq!(checklist.pass_count(), 6);
    assert_eq!(checklist.fail_count(), 1);
    assert_eq!(checklist.pending_must_fix(), 1);
    assert!(!checklist.all_passed());
}

#[test]
fn autofill_does_not_overwrite_passed_evidence() {
    let mut checklist = ComplianceChecklist::seeded();
    checklist.set_status(5, RuleStatus::Pass).unwrap();
    checklist.set_evidence(5, "TCC applied").unwrap();
    checklist.autofill_missing();
    assert_eq!(checklist.rule(5).unwrap().evidence, "TCC applied");
    assert!(checklist.all_passed());
    assert!(checklist.is_complete());
}

#[test]
fn unknown_rule_is_an_error() {
    let mut checklist = ComplianceChecklist::seeded();
    assert!(checklist.set_status(8, RuleStatus::Pass).is_err());
    assert!(checklist.toggle_expand(0).is_err());
}

#[test]
fn toggle_expand_flips() {
    let mut checklist = ComplianceChecklist::seeded();
    checklist.toggle_expand(4).unwrap();
    assert!(checklist.rule(4).unwrap().expanded);
    checklist.toggle_expand(4).unwrap();
    assert!(!checklist.rule(4).unwrap().expanded);
}

#[test]
fn tone_follows_status_then_severity() {
    let mut checklist = ComplianceChecklist::seeded();
    assert_eq!(checklist.rule(1).unwrap().tone(), RuleTone::MustFix);
    assert_eq!(checklist.rule(6).unwrap().tone(), RuleTone::Recommended);
    assert_eq!(checklist.rule(7).unwrap().tone(), RuleTone::Info);
    checklist.set_status(7, RuleStatus::Pass).unwrap();
    assert_eq!(checklist.rule(7).unwrap().tone(), RuleTone::Passed);
}

#[test]
fn missing_lists_unpassed_must_fix_rules() {
    let mut checklist = ComplianceChecklist::seeded();
    checklist.set_status(1, RuleStatus::Pass).unwrap();
    let missing = checklist.missing();
    assert_eq!(missing.len(), 4);
    assert_eq!(missing[0].message, "<50% wound reduction");
    // The checklist reports but does not block navigation.
    assert!(checklist.can_continue());
}

#[test]
fn statuses_serialize_lowercase_and_kebab() {
    let checklist = ComplianceChecklist::seeded();
    let json = serde_json::to_value(&checklist).unwrap();
    assert_eq!(json["rules"][0]["status"], "pending");
    assert_eq!(json["rules"][0]["severity"], "must-fix");
    assert_eq!(json["rules"][6]["severity"], "info");
}
