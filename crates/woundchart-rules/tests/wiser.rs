use woundchart_core::fields::BadgeStatus;
use woundchart_rules::risk::RiskLevel;
use woundchart_rules::wiser::{OutlierCheck, WiserAudit, TEXAS_PILOT_NOTE};
use woundchart_rules::Gate;

fn completed() -> WiserAudit {
    let mut audit = WiserAudit {
        risk_score: Some(25.0),
        graft_type: "Apligraf".to_string(),
        graft_uses_this_month: Some(3.0),
        documentation_similarity: Some(40.0),
        jw_wastage_pattern: "Mostly small wounds".to_string(),
        ..Default::default()
    };
    audit.select_wastage_trend("stable").unwrap();
    audit
}

#[test]
fn empty_audit_has_three_pending_checks() {
    let audit = WiserAudit::default();
    let checks = audit.outlier_checks();
    assert_eq!(checks.len(), 3);
    assert!(checks.iter().all(|c| !c.complete));
    assert!(checks.iter().all(|c| c.badge.text == "Pending"));
    assert_eq!(audit.missing().len(), 3);
    assert_eq!(audit.normalized_display(), "0.00");
    assert!(audit.gauge().is_none());
    assert!(!audit.acceptable_banner());
}

#[test]
fn acceptable_banner_needs_all_checks_and_low_score() {
    let mut audit = completed();
    assert!(audit.all_checks_complete());
    assert!(audit.acceptable_banner());
    assert!(audit.is_complete());

    audit.risk_score = Some(34.0);
    assert!(!audit.acceptable_banner());

    audit.risk_score = Some(33.0);
    audit.jw_wastage_pattern.clear();
    assert!(!audit.acceptable_banner());
}

#[test]
fn high_similarity_raises_cloned_alert() {
    let mut audit = completed();
    audit.documentation_similarity = Some(80.0);
    assert!(!audit.cloned_alert());

    audit.documentation_similarity = Some(85.0);
    assert!(audit.cloned_alert());
    assert_eq!(
        audit.cloned_warning().as_deref(),
        Some("Warning: High similarity (85%) may indicate cloned documentation.")
    );

    let similarity = audit
        .outlier_checks()
        .into_iter()
        .find(|c| c.check == OutlierCheck::DocumentationSimilarity)
        .unwrap();
    assert!(similarity.complete);
    assert_eq!(similarity.badge.status, BadgeStatus::Required);
}

#[test]
fn gauge_follows_risk_score() {
    let mut audit = completed();
    audit.risk_score = Some(72.0);
    let gauge = audit.gauge().unwrap();
    assert_eq!(gauge.level, RiskLevel::High);
    assert_eq!(audit.normalized_display(), "0.72");
}

#[test]
fn normalized_display_matches_the_gauge_when_out_of_range() {
    let mut audit = completed();
    audit.risk_score = Some(150.0);
    assert_eq!(audit.normalized_display(), "1.00");
    assert_eq!(audit.gauge().unwrap().display, "1.00");

    audit.risk_score = Some(-10.0);
    assert_eq!(audit.normalized_display(), "0.00");
}

#[test]
fn unknown_wastage_trend_leaves_jw_check_open() {
    let mut audit = completed();
    audit.jw_wastage_trend = Some("sideways".to_string());
    assert!(!audit.jw_complete());
    assert!(audit.missing().iter().any(|m| m.field == "jw_usage_pattern"));
}

#[test]
fn texas_shows_pilot_note() {
    let mut audit = WiserAudit::default();
    assert_eq!(audit.state_note(), None);
    audit.select_state("TX").unwrap();
    assert_eq!(audit.state_note(), Some(TEXAS_PILOT_NOTE));
    audit.select_state("CA").unwrap();
    assert_eq!(audit.state_note(), None);
    assert!(audit.select_state("ZZ").is_err());
}

#[test]
fn state_rules_can_be_edited_by_index() {
    let mut audit = WiserAudit::default();
    assert_eq!(audit.add_state_rule(), 0);
    assert_eq!(audit.add_state_rule(), 1);
    audit.update_state_rule(1, "Prior auth for >4 grafts").unwrap();
    let removed = audit.remove_state_rule(0).unwrap();
    assert!(removed.is_empty());
    assert_eq!(audit.state_rules, vec!["Prior auth for >4 grafts".to_string()]);

    assert!(audit.update_state_rule(5, "x").is_err());
    assert!(audit.remove_state_rule(1).is_err());
}
