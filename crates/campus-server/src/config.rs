//! Server configuration read from environment variables.
//!
//! - `CAMPUS_BIND`: listen address (default: "0.0.0.0")
//! - `CAMPUS_PORT`: listen port (default: "3000")
//! - `CAMPUS_DATASET`: path to a JSON campus dataset (default: built-in sample)

use std::path::PathBuf;

use campus_core::{CampusDataset, CampusGraph, CoreError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CAMPUS_PORT '{value}': {reason}")]
    InvalidPort { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub dataset: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "0.0.0.0".to_string(),
            port: 3000,
            dataset: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();

        let port = match lookup("CAMPUS_PORT") {
            Some(value) => value.parse::<u16>().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidPort {
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };

        Ok(ServerConfig {
            bind: lookup("CAMPUS_BIND").unwrap_or(defaults.bind),
            port,
            dataset: lookup("CAMPUS_DATASET")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Loads the configured dataset, or the sample campus when none is set.
    pub fn load_campus(&self) -> Result<CampusGraph, CoreError> {
        let dataset = match &self.dataset {
            Some(path) => CampusDataset::from_path(path)?,
            None => CampusDataset::sample(),
        };
        CampusGraph::from_dataset(&dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("CAMPUS_BIND", "127.0.0.1"),
            ("CAMPUS_PORT", "8080"),
            ("CAMPUS_DATASET", "/tmp/campus.json"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.dataset, Some(PathBuf::from("/tmp/campus.json")));
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("CAMPUS_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn default_dataset_is_the_sample_campus() {
        let campus = ServerConfig::default().load_campus().unwrap();
        assert_eq!(campus.len(), CampusDataset::sample().locations.len());
    }
}
