//! Builder for constructing InventoryReadModel from the aggregated set

use super::inventory_read_model::{InventoryReadModel, StatisticsRow};
use crate::inventory::domain::{Coordinate, CoordinateSet, DownloadStats, Ecosystem};
use crate::inventory::services::{CoordinateRenderer, VersionResolver};

/// Builder for constructing InventoryReadModel
pub struct InventoryReadModelBuilder {
    ecosystem: Ecosystem,
    resolver: VersionResolver,
}

impl InventoryReadModelBuilder {
    pub fn new(ecosystem: Ecosystem, resolver: VersionResolver) -> Self {
        Self {
            ecosystem,
            resolver,
        }
    }

    /// Builds the read model
    ///
    /// # Arguments
    /// * `reconciled` - Every aggregated coordinate, source of the statistics rows
    /// * `listed` - Coordinates eligible for the rendered listing (date filter applied)
    /// * `all_versions` - List every version instead of only the latest
    pub fn build(
        &self,
        reconciled: &CoordinateSet,
        listed: &CoordinateSet,
        all_versions: bool,
    ) -> InventoryReadModel {
        InventoryReadModel {
            ecosystem: self.ecosystem,
            coordinates: self.select_coordinates(listed, all_versions),
            statistics: Self::build_statistics(reconciled),
        }
    }

    /// Every version in ascending raw-string order, or the resolved latest
    fn select_coordinates(&self, listed: &CoordinateSet, all_versions: bool) -> Vec<Coordinate> {
        let mut coordinates = Vec::new();
        for (identity, versions) in listed.iter() {
            if all_versions {
                coordinates.extend(
                    versions
                        .keys()
                        .map(|version| Coordinate::new(identity.clone(), version.clone())),
                );
            } else if let Some(latest) = self.resolver.latest(versions.keys()) {
                coordinates.push(Coordinate::new(identity.clone(), latest.clone()));
            }
        }
        coordinates
    }

    fn build_statistics(reconciled: &CoordinateSet) -> Vec<StatisticsRow> {
        if !reconciled.tracks_stats() {
            return Vec::new();
        }

        let mut rows: Vec<StatisticsRow> = reconciled
            .iter()
            .flat_map(|(identity, versions)| {
                versions.iter().map(move |(version, stats)| {
                    let coordinate = Coordinate::new(identity.clone(), version.clone());
                    let stats = stats.clone().unwrap_or_else(DownloadStats::never);
                    StatisticsRow {
                        namespace: identity.namespace_fields(),
                        version: version.to_string(),
                        package_version: CoordinateRenderer::simple(&coordinate),
                        last_downloaded: stats.last_downloaded.to_string(),
                        download_count: stats.download_count,
                    }
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            a.namespace
                .cmp(&b.namespace)
                .then_with(|| a.version.cmp(&b.version))
        });
        rows
    }
}
