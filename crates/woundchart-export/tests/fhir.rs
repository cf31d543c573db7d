use jiff::Timestamp;
use woundchart_export::bundle::NoteBundle;
use woundchart_export::fhir::{document_reference, document_reference_at, PROGRESS_NOTE_CODE};

#[test]
fn document_reference_shape() {
    let date: Timestamp = "2025-01-15T14:30:00Z".parse().unwrap();
    let value = serde_json::to_value(document_reference_at(&NoteBundle::default(), date)).unwrap();

    assert_eq!(value["resourceType"], "DocumentReference");
    assert_eq!(value["status"], "current");
    assert_eq!(value["type"]["coding"][0]["system"], "http://loinc.org");
    assert_eq!(value["type"]["coding"][0]["code"], PROGRESS_NOTE_CODE);
    assert_eq!(value["type"]["coding"][0]["display"], "Progress note");
    assert_eq!(value["subject"]["reference"], "Patient/");
    assert_eq!(value["date"], "2025-01-15T14:30:00Z");
    assert_eq!(value["author"][0]["reference"], "Practitioner/");
    assert_eq!(value["content"][0]["attachment"]["contentType"], "text/plain");
    assert_eq!(value["content"][0]["attachment"]["data"], "");
}

#[test]
fn references_use_mrn_and_npi() {
    let mut bundle = NoteBundle::default();
    bundle.structured_note.mrn = "MRN-4471".to_string();
    bundle.note_capture.provider_npi = "1234567890".to_string();
    let doc = document_reference(&bundle);
    assert_eq!(doc.subject.reference, "Patient/MRN-4471");
    assert_eq!(doc.author[0].reference, "Practitioner/1234567890");
}

#[test]
fn date_is_stamped_now() {
    let before = Timestamp::now();
    let doc = document_reference(&NoteBundle::default());
    assert!(doc.date >= before);
    assert!(doc.date <= Timestamp::now());
}
