//! JSON dataset format for campus maps, plus the built-in sample campus.
//!
//! ```json
//! {
//!   "locations": [{ "name": "Library", "type": "academic", "x": 120, "y": 80 }],
//!   "walkways":  [{ "from": "Library", "to": "Gym" }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One location entry in a dataset file. Ids are assigned on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
}

/// A walkway between two locations, referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkwayEntry {
    pub from: String,
    pub to: String,
}

/// A complete campus description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusDataset {
    pub locations: Vec<LocationEntry>,
    #[serde(default)]
    pub walkways: Vec<WalkwayEntry>,
}

impl CampusDataset {
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::Dataset {
            reason: e.to_string(),
        })
    }

    /// Reads and parses a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CoreError::Dataset {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&json)
    }

    /// The demo campus shipped with the visualizer.
    pub fn sample() -> Self {
        let locations = [
            ("Main Gate", "entrance", 50.0, 300.0),
            ("Administration", "office", 150.0, 250.0),
            ("Library", "academic", 300.0, 200.0),
            ("Science Building", "academic", 450.0, 150.0),
            ("Engineering Hall", "academic", 500.0, 300.0),
            ("Cafeteria", "dining", 250.0, 350.0),
            ("Student Center", "social", 350.0, 400.0),
            ("Gym", "sports", 600.0, 450.0),
            ("Dormitory A", "housing", 150.0, 500.0),
            ("Dormitory B", "housing", 300.0, 550.0),
            ("Parking Lot", "parking", 50.0, 450.0),
            ("Auditorium", "event", 550.0, 100.0),
        ];
        let walkways = [
            ("Main Gate", "Administration"),
            ("Main Gate", "Parking Lot"),
            ("Administration", "Library"),
            ("Administration", "Cafeteria"),
            ("Library", "Science Building"),
            ("Library", "Cafeteria"),
            ("Science Building", "Auditorium"),
            ("Science Building", "Engineering Hall"),
            ("Engineering Hall", "Gym"),
            ("Cafeteria", "Student Center"),
            ("Student Center", "Gym"),
            ("Student Center", "Dormitory B"),
            ("Dormitory A", "Dormitory B"),
            ("Dormitory A", "Parking Lot"),
        ];

        CampusDataset {
            locations: locations
                .into_iter()
                .map(|(name, kind, x, y)| LocationEntry {
                    name: name.to_string(),
                    kind: kind.to_string(),
                    x,
                    y,
                })
                .collect(),
            walkways: walkways
                .into_iter()
                .map(|(from, to)| WalkwayEntry {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }
}
