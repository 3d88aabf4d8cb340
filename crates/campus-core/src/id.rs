//! Stable ID newtype for campus locations.
//!
//! Location ids are dense and assigned in insertion order, so the id of a
//! location is also its position in [`CampusGraph::locations`](crate::graph::CampusGraph::locations).

use std::fmt;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Stable location identifier. Maps to a petgraph `NodeIndex<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Bridge between LocationId and petgraph's NodeIndex<u32>.

impl From<NodeIndex<u32>> for LocationId {
    fn from(idx: NodeIndex<u32>) -> Self {
        LocationId(idx.index() as u32)
    }
}

impl From<LocationId> for NodeIndex<u32> {
    fn from(id: LocationId) -> Self {
        NodeIndex::new(id.0 as usize)
    }
}
