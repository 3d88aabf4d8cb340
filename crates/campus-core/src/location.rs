//! Location and walkway payloads stored in the campus graph.

use serde::{Deserialize, Serialize};

use crate::id::LocationId;

/// A named, positioned place on campus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// Category label such as "academic" or "dining".
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
}

impl Location {
    /// Straight-line distance to `other`.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An undirected path between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Walkway {
    /// Euclidean length between the two endpoints.
    pub length: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(id: u32, x: f64, y: f64) -> Location {
        Location {
            id: LocationId(id),
            name: format!("L{id}"),
            kind: "test".into(),
            x,
            y,
        }
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(at(0, 0.0, 0.0).distance_to(&at(1, 3.0, 4.0)), 5.0);
    }

    #[test]
    fn kind_serializes_as_type() {
        let json = serde_json::to_value(at(2, 1.5, -2.0)).unwrap();
        assert_eq!(json["type"], "test");
        assert_eq!(json["id"], 2);
        assert!(json.get("kind").is_none());
    }
}
