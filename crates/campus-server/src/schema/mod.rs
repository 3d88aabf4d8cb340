//! API schema types for request/response definitions.
//!
//! The search and sort response bodies are the reports defined in
//! `campus_trace::report`; this module holds the remaining request and
//! response types.

pub mod campus;
pub mod queries;
