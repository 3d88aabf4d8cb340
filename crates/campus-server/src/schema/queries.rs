//! Query-string parameters for the algorithm endpoints.

use serde::Deserialize;

/// `GET /search?query=...`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Location name to look for. Missing means the empty string.
    #[serde(default)]
    pub query: String,
}

/// `GET /sort?reference=...`
#[derive(Debug, Clone, Deserialize)]
pub struct SortParams {
    /// Id of the location distances are measured from.
    pub reference: u32,
}
