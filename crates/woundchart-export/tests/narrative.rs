use woundchart_export::bundle::NoteBundle;
use woundchart_export::docx::{final_note_docx, narrative_docx};
use woundchart_export::error::ExportError;
use woundchart_export::render::{render_narrative, render_template};
use woundchart_export::styles::DocumentStyles;

#[test]
fn blank_bundle_renders_not_documented() {
    let text = render_narrative(&NoteBundle::default()).unwrap();
    assert!(text.starts_with("# Wound Care Progress Note"));
    assert!(text.contains("**Patient:** Not documented"));
    assert!(text.contains("No procedure identified."));
    assert!(text.contains("- LCD L36377: pending"));
    assert!(text.contains("- WISER audit risk: Not assessed"));
    assert!(!text.contains("## Product Wastage"));
    assert!(!text.contains("## Narrative"));
}

#[test]
fn wastage_and_narrative_sections_appear_when_present() {
    let mut bundle = NoteBundle::default();
    bundle.jw_wastage.wound_length = Some(5.0);
    bundle.jw_wastage.wound_width = Some(4.0);
    bundle.jw_wastage.product_size = Some(48.0);
    bundle.jw_wastage.product_name = "Apligraf".to_string();
    bundle.wiser_audit.risk_score = Some(72.0);
    bundle.fda_language.fda_safe_narrative = "Graft applied to support healing.".to_string();

    let text = render_narrative(&bundle).unwrap();
    assert!(text.contains("**Product:** Apligraf"));
    assert!(text.contains("**Discarded:** 28.0 cm² (58.3%), JW modifier applied"));
    assert!(text.contains("- WISER audit risk: 0.72 (High Risk)"));
    assert!(text.contains("## Narrative\nGraft applied to support healing."));
}

#[test]
fn typed_narrative_wins_over_fda_rewrite() {
    let mut bundle = NoteBundle::default();
    bundle.fda_language.fda_safe_narrative = "rewrite".to_string();
    bundle.final_note.narrative_note = "Final typed note.".to_string();
    let text = render_narrative(&bundle).unwrap();
    assert!(text.contains("Final typed note."));
    assert!(!text.contains("rewrite"));
}

#[test]
fn render_template_reports_parse_errors() {
    let err = render_template("bad.md", "{% if %}", &serde_json::json!({})).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn render_template_uses_struct_fields() {
    let out = render_template("t.md", "Hello {{ name }}", &serde_json::json!({"name": "Ana"}))
        .unwrap();
    assert_eq!(out, "Hello Ana");
}

#[test]
fn docx_is_a_zip_package() {
    let bytes = narrative_docx(
        "# Title\n\n\n## Section\n- **Bold:** item\nplain text",
        &DocumentStyles::default(),
    )
    .unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn final_note_docx_renders_bundle() {
    let bytes = final_note_docx(&NoteBundle::default(), &DocumentStyles::default()).unwrap();
    assert!(bytes.len() > 100);
    assert!(bytes.starts_with(b"PK"));
}
