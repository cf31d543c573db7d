pub mod catalog;
pub mod checklist;
pub mod claim_line;
pub mod phrase;
pub mod wound;
