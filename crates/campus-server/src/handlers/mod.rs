//! HTTP handler modules for the campus visualizer API.
//!
//! Each sub-module implements thin handlers that parse requests, delegate to
//! [`CampusService`](crate::service::CampusService), and return JSON
//! responses. No algorithm logic lives in handlers.

pub mod campus;
pub mod search;
pub mod sort;
