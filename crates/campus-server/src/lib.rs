//! HTTP/JSON API server for the campus navigation visualizer.
//!
//! Serves traced binary search and quicksort runs over a read-only campus
//! graph. This crate contains the server configuration, API schema types,
//! error handling, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
