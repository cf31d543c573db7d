//! woundchart-api
//!
//! Stateless HTTP surface over the workflow rules. Every page endpoint takes
//! the page record as JSON and answers with the derived view; nothing is
//! stored server-side.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
