//! # Platform Snapshots
//!
//! Immutable views of a database and its instances, fetched once per invocation.

use serde::Deserialize;

/// A managed logical database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Database {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "DbId", alias = "dbId", alias = "id")]
    pub id: String,
    #[serde(rename = "Hostname", alias = "hostname")]
    pub hostname: String,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(rename = "primaryRegion", default)]
    pub primary_region: Option<String>,
}

impl Database {
    /// Region codes in lexicographic order; the stored order is left untouched.
    pub fn sorted_regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.regions.clone();
        regions.sort();
        regions
    }
}

/// One running replica of a [`Database`], located in a single region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Instance {
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    /// Role tag reported by the platform, e.g. `primary` or `replica`.
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    #[serde(default)]
    pub hostname: Option<String>,
}
