use cache_inventory::ports::outbound::RawStats;
use cache_inventory::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ArtifactListing for testing that serves a fixed listing
#[derive(Default, Clone)]
pub struct MockArtifactListing {
    entries: Vec<ListingEntry>,
    physical_name: Option<String>,
    should_fail: bool,
    pub queries: Arc<Mutex<Vec<ListingQuery>>>,
}

impl MockArtifactListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file entry without statistics
    pub fn with_file(mut self, path: &str, name: &str) -> Self {
        self.entries.push(ListingEntry::file(path, name));
        self
    }

    /// Adds a file entry with statistics
    pub fn with_downloaded_file(
        mut self,
        path: &str,
        name: &str,
        downloaded: Option<&str>,
        downloads: u64,
    ) -> Self {
        self.entries.push(ListingEntry::file(path, name).with_stats(RawStats {
            downloaded: downloaded.map(str::to_string),
            downloads,
        }));
        self
    }

    /// Maps every requested repository name to `name`
    pub fn with_physical_name(mut self, name: &str) -> Self {
        self.physical_name = Some(name.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_queries(&self) -> Vec<ListingQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl ArtifactListing for MockArtifactListing {
    fn resolve_repository(&self, requested: &str) -> String {
        self.physical_name
            .clone()
            .unwrap_or_else(|| requested.to_string())
    }

    fn list_artifacts(&self, query: &ListingQuery) -> Result<Vec<ListingEntry>> {
        self.queries.lock().unwrap().push(query.clone());
        if self.should_fail {
            anyhow::bail!("Mock listing failure");
        }
        Ok(self.entries.clone())
    }
}
