//! View-models for the pages that carry no rule engine of their own.

pub mod autofill_confirm;
pub mod final_note;
pub mod note_capture;
pub mod structured_note;
