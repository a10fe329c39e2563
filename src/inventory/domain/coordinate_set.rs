use super::{DownloadStats, PackageIdentity, Version};
use std::collections::BTreeMap;

/// Versions observed for one identity, each with its retained statistics
/// (`None` when the run does not track statistics)
pub type VersionMap = BTreeMap<Version, Option<DownloadStats>>;

/// Every coordinate extracted from one repository listing
///
/// Identity and version uniqueness are enforced by the maps. In stats mode each
/// version carries exactly one retained [`DownloadStats`]; choosing which one is
/// the reconciler's concern, not the container's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateSet {
    tracks_stats: bool,
    entries: BTreeMap<PackageIdentity, VersionMap>,
}

impl CoordinateSet {
    pub fn new(tracks_stats: bool) -> Self {
        Self {
            tracks_stats,
            entries: BTreeMap::new(),
        }
    }

    pub fn tracks_stats(&self) -> bool {
        self.tracks_stats
    }

    /// Statistics currently retained for a coordinate
    pub fn retained_stats(&self, identity: &PackageIdentity, version: &Version) -> Option<&DownloadStats> {
        self.entries
            .get(identity)
            .and_then(|versions| versions.get(version))
            .and_then(Option::as_ref)
    }

    /// Stores a coordinate, replacing whatever was retained for it
    pub fn record(&mut self, identity: PackageIdentity, version: Version, stats: Option<DownloadStats>) {
        let stats = if self.tracks_stats { stats } else { None };
        self.entries.entry(identity).or_default().insert(version, stats);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct identities
    pub fn package_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of distinct (identity, version) pairs
    pub fn version_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn versions(&self, identity: &PackageIdentity) -> Option<&VersionMap> {
        self.entries.get(identity)
    }

    /// Identities in display order with their versions
    pub fn iter(&self) -> impl Iterator<Item = (&PackageIdentity, &VersionMap)> {
        self.entries.iter()
    }

    /// Keeps only identities accepted by `keep`
    pub fn retain_identities<F>(&mut self, mut keep: F)
    where
        F: FnMut(&PackageIdentity) -> bool,
    {
        self.entries.retain(|identity, _| keep(identity));
    }

    /// Keeps only versions accepted by `keep`; identities left without versions are dropped
    pub fn retain_versions<F>(&mut self, mut keep: F)
    where
        F: FnMut(&PackageIdentity, &Version, Option<&DownloadStats>) -> bool,
    {
        self.entries.retain(|identity, versions| {
            versions.retain(|version, stats| keep(identity, version, stats.as_ref()));
            !versions.is_empty()
        });
    }
}
