use woundchart_core::fields::{
    is_blank, parse_number_input, to_fixed, Badge, BadgeIcon, BadgeStatus, CardVariant,
    CharacterCounter, NumberInput,
};
use woundchart_core::models::catalog;

#[test]
fn whitespace_only_counts_as_blank() {
    assert!(is_blank(""));
    assert!(is_blank("   \n\t"));
    assert!(!is_blank(" KX justified "));
}

#[test]
fn number_input_clears_on_empty_or_minus() {
    assert_eq!(parse_number_input(""), NumberInput::Cleared);
    assert_eq!(parse_number_input("-"), NumberInput::Cleared);
    assert_eq!(parse_number_input("4.5"), NumberInput::Value(4.5));
    assert_eq!(parse_number_input("abc"), NumberInput::Ignored);
}

#[test]
fn ignored_number_input_keeps_previous_value() {
    assert_eq!(parse_number_input("x").apply(Some(3.0)), Some(3.0));
    assert_eq!(parse_number_input("").apply(Some(3.0)), None);
    assert_eq!(parse_number_input("7").apply(None), Some(7.0));
}

#[test]
fn fixed_point_ties_round_away_from_zero() {
    assert_eq!(to_fixed(6.25, 1), "6.3");
    assert_eq!(to_fixed(0.125, 2), "0.13");
    assert_eq!(to_fixed(-0.125, 2), "-0.13");
    assert_eq!(to_fixed(2.5, 0), "3");
    assert_eq!(to_fixed(58.333333, 1), "58.3");
    assert_eq!(to_fixed(600.0, 2), "600.00");
}

#[test]
fn fixed_point_near_ties_follow_the_stored_value() {
    // 1.005 is stored just below the tie.
    assert_eq!(to_fixed(1.005, 2), "1.00");
    assert_eq!(to_fixed(f64::NAN, 2), "NaN");
}

#[test]
fn search_select_toggles_off_when_reselected() {
    let patients = catalog::patients();
    let selected = patients.toggle("", "pt-002").unwrap();
    assert_eq!(selected, "pt-002");
    assert_eq!(patients.toggle(&selected, "pt-002").unwrap(), "");
}

#[test]
fn search_select_rejects_unknown_value() {
    assert!(catalog::encounters().toggle("", "enc-999").is_err());
}

#[test]
fn search_select_filters_case_insensitively() {
    let hits = catalog::patients().filter("smith");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].value, "pt-001");
    assert_eq!(catalog::patients().filter("").len(), 5);
}

#[test]
fn display_label_falls_back_to_placeholder() {
    let offloading = catalog::offloading_methods();
    assert_eq!(offloading.display_label("tcc"), "Total Contact Cast (TCC)");
    assert_eq!(offloading.display_label(""), "Search offloading methods...");
}

#[test]
fn plain_select_replaces_value() {
    let trends = catalog::wastage_trends();
    assert_eq!(trends.select("stable").unwrap(), Some("stable".to_string()));
    assert!(trends.select("rising").is_err());
}

#[test]
fn version_and_step_badges_have_no_icon() {
    assert_eq!(BadgeStatus::Version.default_icon(), None);
    assert_eq!(BadgeStatus::Step.default_icon(), None);
    assert_eq!(BadgeStatus::Autofilled.default_icon(), Some(BadgeIcon::Sparkles));
    assert_eq!(Badge::completeness(true).status, BadgeStatus::Missing);
    assert_eq!(Badge::completeness(false).text, "Complete");
}

#[test]
fn card_variant_tracks_missing_flag() {
    assert_eq!(CardVariant::for_missing(true), CardVariant::Destructive);
    assert_eq!(CardVariant::for_missing(false), CardVariant::Success);
}

#[test]
fn character_counter_groups_thousands() {
    let text = "a".repeat(1234);
    let counter = CharacterCounter::of(&text, 10_000);
    assert_eq!(counter.display(), "1,234 / 10,000 characters");
    assert!(!counter.over_limit());
    assert_eq!(CharacterCounter::of("", 10_000).display(), "0 / 10,000 characters");
}
