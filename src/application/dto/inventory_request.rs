use crate::inventory::domain::Ecosystem;
use crate::inventory::policies::ComparatorStrategy;
use crate::inventory::services::DownloadWindow;
use crate::shared::error::InventoryError;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// InventoryRequest - Internal request DTO for the inventory use case
#[derive(Debug, Clone)]
pub struct InventoryRequest {
    /// Repository name as given in the URL (before physical-name resolution)
    pub repository: String,
    pub ecosystem: Ecosystem,
    /// List every cached version instead of only the latest
    pub all_versions: bool,
    /// Restrict output to one package
    pub package: Option<String>,
    /// Inspection mode: echo raw listing items, render nothing
    pub debug: bool,
    /// Only versions downloaded in the last N days
    pub since_days: Option<u32>,
    /// Per-version download statistics are wanted (CSV output)
    pub statistics: bool,
    pub comparator: ComparatorStrategy,
    /// Reference instant for the since-days cutoff
    pub now: DateTime<Utc>,
}

impl InventoryRequest {
    pub fn builder(repository: impl Into<String>, ecosystem: Ecosystem) -> InventoryRequestBuilder {
        InventoryRequestBuilder::new(repository, ecosystem)
    }

    /// Statistics must be fetched for the CSV or for a local date filter
    pub fn tracks_stats(&self) -> bool {
        self.statistics || self.since_days.is_some()
    }
}

/// Builder for [`InventoryRequest`]
#[derive(Debug, Clone)]
pub struct InventoryRequestBuilder {
    repository: String,
    ecosystem: Ecosystem,
    all_versions: bool,
    package: Option<String>,
    debug: bool,
    since_days: Option<u32>,
    statistics: bool,
    comparator: ComparatorStrategy,
    now: Option<DateTime<Utc>>,
}

impl InventoryRequestBuilder {
    pub fn new(repository: impl Into<String>, ecosystem: Ecosystem) -> Self {
        Self {
            repository: repository.into(),
            ecosystem,
            all_versions: false,
            package: None,
            debug: false,
            since_days: None,
            statistics: false,
            comparator: ComparatorStrategy::default(),
            now: None,
        }
    }

    pub fn all_versions(mut self, all_versions: bool) -> Self {
        self.all_versions = all_versions;
        self
    }

    pub fn package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn since_days(mut self, since_days: Option<u32>) -> Self {
        self.since_days = since_days;
        self
    }

    pub fn statistics(mut self, statistics: bool) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn comparator(mut self, comparator: ComparatorStrategy) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// - Empty repository name
    /// - `since_days` of zero, or reaching past the earliest representable date
    /// - Blank package filter
    pub fn build(self) -> Result<InventoryRequest> {
        if self.repository.trim().is_empty() {
            return Err(InventoryError::Validation {
                message: "Repository name cannot be empty".to_string(),
            }
            .into());
        }

        if self.since_days == Some(0) {
            return Err(InventoryError::Validation {
                message: "since-days must be at least 1".to_string(),
            }
            .into());
        }

        let now = self.now.unwrap_or_else(Utc::now);
        if let Some(days) = self.since_days {
            DownloadWindow::since_days(days, now)?;
        }

        if self
            .package
            .as_deref()
            .is_some_and(|package| package.trim().is_empty())
        {
            return Err(InventoryError::Validation {
                message: "Package filter cannot be blank".to_string(),
            }
            .into());
        }

        Ok(InventoryRequest {
            repository: self.repository,
            ecosystem: self.ecosystem,
            all_versions: self.all_versions,
            package: self.package,
            debug: self.debug,
            since_days: self.since_days,
            statistics: self.statistics,
            comparator: self.comparator,
            now,
        })
    }
}
