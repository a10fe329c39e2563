use crate::inventory::domain::Ecosystem;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// Kind of a stored item in a repository listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Folder,
}

/// Download statistics exactly as the repository manager reports them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawStats {
    /// Last download instant, absent when never downloaded
    pub downloaded: Option<String>,
    pub downloads: u64,
}

/// One stored item returned by a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub path: String,
    pub name: String,
    pub entry_type: EntryType,
    pub stats: Option<RawStats>,
}

impl ListingEntry {
    pub fn file(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            entry_type: EntryType::File,
            stats: None,
        }
    }

    pub fn with_stats(mut self, stats: RawStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }
}

/// What to list from one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Physical repository name (already resolved)
    pub repository: String,
    pub ecosystem: Ecosystem,
    /// Ask for per-item download statistics
    pub include_stats: bool,
    /// Server-side "downloaded at or after" filter
    pub downloaded_since: Option<DateTime<Utc>>,
    /// Inspection mode: no name filters, item types included, result capped
    pub debug: bool,
}

/// ArtifactListing port for enumerating cached artifacts
///
/// This port abstracts the repository manager so the extraction pipeline can
/// be driven by a real HTTP client or by an in-memory fixture.
pub trait ArtifactListing {
    /// Maps a requested repository name to the physical one holding the cache
    ///
    /// Implementations fall back to `requested` when no mapping is available.
    fn resolve_repository(&self, requested: &str) -> String;

    /// Lists every stored item matching the query
    ///
    /// # Errors
    /// Returns an error if the listing cannot be obtained at all (transport
    /// failure, authentication failure, malformed response). A partial
    /// listing is never returned.
    fn list_artifacts(&self, query: &ListingQuery) -> Result<Vec<ListingEntry>>;
}
