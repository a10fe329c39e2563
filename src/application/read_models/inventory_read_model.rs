use crate::inventory::domain::{Coordinate, Ecosystem};

/// One reconciled (identity, version) pair with its download statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsRow {
    /// `[groupId, artifactId]` for Maven, `[name]` otherwise
    pub namespace: Vec<String>,
    pub version: String,
    /// The `simple` rendering of the coordinate
    pub package_version: String,
    pub last_downloaded: String,
    pub download_count: u64,
}

/// Query-side view of one inventory run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReadModel {
    pub ecosystem: Ecosystem,
    /// Coordinates selected for the rendered listing, in output order
    pub coordinates: Vec<Coordinate>,
    /// Every reconciled version, sorted by (namespace, version); empty without stats
    pub statistics: Vec<StatisticsRow>,
}

impl InventoryReadModel {
    pub fn empty(ecosystem: Ecosystem) -> Self {
        Self {
            ecosystem,
            coordinates: Vec::new(),
            statistics: Vec::new(),
        }
    }
}
