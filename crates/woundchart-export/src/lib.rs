//! woundchart-export
//!
//! Final-note outputs: ClinicalNote JSON, FHIR DocumentReference, a
//! Tera-rendered narrative with its DOCX download, and SVG renderings of the
//! page charts.

pub mod bundle;
pub mod docx;
pub mod error;
pub mod fhir;
pub mod json;
pub mod render;
pub mod styles;
pub mod svg;
