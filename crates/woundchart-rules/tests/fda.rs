use woundchart_core::models::phrase::{PhraseField, PhraseMapping};
use woundchart_rules::fda::{apply_replacements, highlight_phrases, FdaLanguage, MARK_CLOSE, MARK_OPEN};
use woundchart_rules::Gate;

fn marked(s: &str) -> String {
    format!("{MARK_OPEN}{s}{MARK_CLOSE}")
}

#[test]
fn highlights_case_insensitively() {
    let phrases = vec![PhraseMapping::new("cures", "supports healing of")];
    let out = highlight_phrases("This graft CURES ulcers and cures pain.", &phrases);
    assert_eq!(
        out,
        format!("This graft {} ulcers and {} pain.", marked("CURES"), marked("cures"))
    );
}

#[test]
fn phrases_are_matched_literally() {
    let phrases = vec![PhraseMapping::new("100% (guaranteed)", "expected")];
    let out = highlight_phrases("Results 100% (guaranteed) here; 100% guaranteed not.", &phrases);
    assert_eq!(out.matches(MARK_OPEN).count(), 1);
    assert!(out.contains(&marked("100% (guaranteed)")));
}

#[test]
fn surrounding_text_is_escaped() {
    let phrases = vec![PhraseMapping::new("heals", "supports")];
    let out = highlight_phrases("<b>heals</b> & more", &phrases);
    assert_eq!(
        out,
        format!("&lt;b&gt;{}&lt;&#x2F;b&gt; &amp; more", marked("heals"))
    );
}

#[test]
fn overlapping_phrases_prefer_the_longer_one() {
    let phrases = vec![
        PhraseMapping::new("heal", "support"),
        PhraseMapping::new("heal completely", "improve"),
    ];
    let out = highlight_phrases("will heal completely", &phrases);
    assert_eq!(out, format!("will {}", marked("heal completely")));

    assert_eq!(apply_replacements("will heal completely", &phrases), "will improve");
}

#[test]
fn empty_phrases_are_ignored() {
    let phrases = vec![PhraseMapping::blank()];
    assert_eq!(highlight_phrases("plain", &phrases), "plain");
    assert_eq!(apply_replacements("plain", &phrases), "plain");
}

#[test]
fn highlighted_requires_toggle_text_and_phrases() {
    let mut page = FdaLanguage {
        original_narrative: "The graft cures ulcers.".to_string(),
        ..Default::default()
    };
    assert!(page.highlighted().is_none());

    page.toggle_highlight();
    assert!(page.highlighted().is_none());

    let id = page.add_phrase();
    page.update_phrase(id, PhraseField::Forbidden, "cures").unwrap();
    page.update_phrase(id, PhraseField::Approved, "supports healing of").unwrap();

    let html = page.highlighted().unwrap();
    assert!(html.contains(&marked("cures")));
    assert_eq!(page.suggest_rewrite(), "The graft supports healing of ulcers.");
}

#[test]
fn phrase_dictionary_edits_by_id() {
    let mut page = FdaLanguage::default();
    let first = page.add_phrase();
    let second = page.add_phrase();
    assert_ne!(first, second);

    let removed = page.remove_phrase(first).unwrap();
    assert_eq!(removed.id, first);
    assert_eq!(page.phrases.len(), 1);
    assert!(page.remove_phrase(first).is_err());
    assert!(page.update_phrase(first, PhraseField::Approved, "x").is_err());
}

#[test]
fn compliance_needs_both_narratives() {
    let mut page = FdaLanguage::default();
    assert!(!page.all_compliant());
    assert_eq!(page.missing().len(), 2);

    page.original_narrative = "original".to_string();
    page.fda_safe_narrative = "safe".to_string();
    assert!(page.all_compliant());
    assert!(page.is_complete());
}

#[test]
fn quotes_outside_marks_are_escaped() {
    let phrases = vec![PhraseMapping::new("cures", "supports")];
    let out = highlight_phrases(r#"It "cures" it's said"#, &phrases);
    assert_eq!(
        out,
        format!("It &quot;{}&quot; it&#x27;s said", marked("cures"))
    );
}
