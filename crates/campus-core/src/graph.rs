//! CampusGraph: the location graph the visualizer algorithms read from.
//!
//! [`CampusGraph`] wraps an undirected `StableGraph` of [`Location`] nodes
//! connected by [`Walkway`] edges. Locations are never removed, so ids stay
//! dense (`0..len`) and double as positions in [`CampusGraph::locations`].
//!
//! Location names are unique within a graph. Binary search over names relies
//! on this to give a single, well-defined answer.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Undirected;

use crate::dataset::CampusDataset;
use crate::error::CoreError;
use crate::id::LocationId;
use crate::location::{Location, Walkway};

/// The campus location graph.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    graph: StableGraph<Location, Walkway, Undirected, u32>,
    /// Name -> id index, used for duplicate detection and dataset wiring.
    names: HashMap<String, LocationId>,
}

impl CampusGraph {
    /// Creates an empty campus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a parsed dataset.
    ///
    /// Locations are added in dataset order, so the first dataset entry gets
    /// `LocationId(0)`. Walkways reference locations by name.
    pub fn from_dataset(dataset: &CampusDataset) -> Result<Self, CoreError> {
        let mut campus = CampusGraph::new();
        for entry in &dataset.locations {
            campus.add_location(&entry.name, &entry.kind, entry.x, entry.y)?;
        }
        for walkway in &dataset.walkways {
            let from = campus.id_of(&walkway.from)?;
            let to = campus.id_of(&walkway.to)?;
            campus.connect(from, to)?;
        }
        Ok(campus)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Adds a location and returns its id.
    pub fn add_location(
        &mut self,
        name: &str,
        kind: &str,
        x: f64,
        y: f64,
    ) -> Result<LocationId, CoreError> {
        if self.names.contains_key(name) {
            return Err(CoreError::DuplicateLocationName {
                name: name.to_string(),
            });
        }

        let id = LocationId(self.graph.node_count() as u32);
        let idx = self.graph.add_node(Location {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            x,
            y,
        });
        debug_assert_eq!(LocationId::from(idx), id);

        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Connects two locations with a walkway whose length is their
    /// straight-line distance.
    pub fn connect(&mut self, a: LocationId, b: LocationId) -> Result<(), CoreError> {
        if a == b {
            return Err(CoreError::InvalidWalkway {
                reason: format!("walkway from location {a} to itself"),
            });
        }
        let length = self.location(a)?.distance_to(self.location(b)?);
        self.graph.update_edge(a.into(), b.into(), Walkway { length });
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// Returns a copy of every location, ordered by id.
    pub fn locations(&self) -> Vec<Location> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].clone())
            .collect()
    }

    /// Looks up a single location.
    pub fn location(&self, id: LocationId) -> Result<&Location, CoreError> {
        self.graph
            .node_weight(NodeIndex::from(id))
            .ok_or(CoreError::LocationNotFound { id })
    }

    /// Resolves a location name to its id.
    pub fn id_of(&self, name: &str) -> Result<LocationId, CoreError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::Dataset {
                reason: format!("unknown location name '{name}'"),
            })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns every walkway as `(from, to, length)`.
    pub fn walkways(&self) -> Vec<(LocationId, LocationId, f64)> {
        (&self.graph)
            .edge_references()
            .map(|e| (e.source().into(), e.target().into(), e.weight().length))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_campus() -> (CampusGraph, LocationId, LocationId) {
        let mut campus = CampusGraph::new();
        let gym = campus.add_location("Gym", "sports", 0.0, 0.0).unwrap();
        let lib = campus.add_location("Library", "academic", 3.0, 4.0).unwrap();
        (campus, gym, lib)
    }

    #[test]
    fn ids_are_dense_in_insertion_order() {
        let (campus, gym, lib) = small_campus();
        assert_eq!(gym, LocationId(0));
        assert_eq!(lib, LocationId(1));
        assert_eq!(campus.len(), 2);

        let names: Vec<_> = campus.locations().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Gym", "Library"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let (mut campus, _, _) = small_campus();
        let err = campus.add_location("Gym", "sports", 9.0, 9.0).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateLocationName { .. }));
        assert_eq!(campus.len(), 2);
    }

    #[test]
    fn missing_location_is_an_error() {
        let (campus, _, _) = small_campus();
        let err = campus.location(LocationId(5)).unwrap_err();
        assert!(matches!(err, CoreError::LocationNotFound { id } if id == LocationId(5)));
    }

    #[test]
    fn connect_records_walkway_length() {
        let (mut campus, gym, lib) = small_campus();
        campus.connect(gym, lib).unwrap();
        // Reconnecting updates rather than duplicating.
        campus.connect(lib, gym).unwrap();

        let walkways = campus.walkways();
        assert_eq!(walkways.len(), 1);
        assert_eq!(walkways[0].2, 5.0);
    }

    #[test]
    fn self_walkway_is_invalid() {
        let (mut campus, gym, _) = small_campus();
        assert!(matches!(
            campus.connect(gym, gym),
            Err(CoreError::InvalidWalkway { .. })
        ));
    }

    #[test]
    fn connect_to_unknown_location_fails() {
        let (mut campus, gym, _) = small_campus();
        assert!(matches!(
            campus.connect(gym, LocationId(99)),
            Err(CoreError::LocationNotFound { .. })
        ));
    }

    #[test]
    fn empty_graph() {
        let campus = CampusGraph::new();
        assert!(campus.is_empty());
        assert!(campus.locations().is_empty());
        assert!(campus.walkways().is_empty());
    }
}
