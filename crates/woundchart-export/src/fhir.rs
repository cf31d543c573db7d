//! FHIR `DocumentReference` preview for the final note.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::bundle::NoteBundle;

pub const LOINC_SYSTEM: &str = "http://loinc.org";
pub const PROGRESS_NOTE_CODE: &str = "11506-3";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    pub resource_type: String,
    pub status: String,
    #[serde(rename = "type")]
    pub doc_type: CodeableConcept,
    pub subject: Reference,
    pub date: Timestamp,
    pub author: Vec<Reference>,
    pub content: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub attachment: Attachment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    pub data: String,
}

/// The document reference stamped with the current time.
pub fn document_reference(bundle: &NoteBundle) -> DocumentReference {
    document_reference_at(bundle, Timestamp::now())
}

pub fn document_reference_at(bundle: &NoteBundle, date: Timestamp) -> DocumentReference {
    DocumentReference {
        resource_type: "DocumentReference".to_string(),
        status: "current".to_string(),
        doc_type: CodeableConcept {
            coding: vec![Coding {
                system: LOINC_SYSTEM.to_string(),
                code: PROGRESS_NOTE_CODE.to_string(),
                display: "Progress note".to_string(),
            }],
        },
        subject: Reference {
            reference: format!("Patient/{}", bundle.structured_note.mrn.trim()),
        },
        date,
        author: vec![Reference {
            reference: format!("Practitioner/{}", bundle.note_capture.provider_npi.trim()),
        }],
        content: vec![Content {
            attachment: Attachment {
                content_type: "text/plain".to_string(),
                // Base64 payload is filled in by the sending system.
                data: String::new(),
            },
        }],
    }
}

pub fn document_reference_json(bundle: &NoteBundle) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&document_reference(bundle))
}
