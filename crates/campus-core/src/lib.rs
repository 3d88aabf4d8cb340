pub mod dataset;
pub mod error;
pub mod graph;
pub mod id;
pub mod location;

// Re-export commonly used types
pub use dataset::CampusDataset;
pub use error::CoreError;
pub use graph::CampusGraph;
pub use id::LocationId;
pub use location::{Location, Walkway};
