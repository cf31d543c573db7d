//! woundchart-core
//!
//! Form primitives, domain models, and the workflow step table.
//! No I/O; this is the shared vocabulary of the woundchart system.

pub mod error;
pub mod fields;
pub mod models;
pub mod steps;
