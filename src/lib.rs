//! cache-inventory - list what a binary-repository cache already holds
//!
//! This library enumerates the artifacts an Artifactory remote repository has
//! cached, turns storage paths into Maven, npm or PyPI coordinates, and renders
//! them as dependency listings or download-statistics CSV. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Coordinate extraction, aggregation and version ordering
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cache_inventory::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let url = RepositoryUrl::parse("https://my.jfrog.io/artifactory/npm-remote", Ecosystem::Npm)?;
//! let artifact_listing = ArtifactoryClient::new(&url.base_url, None, Duration::from_secs(60))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ExtractInventoryUseCase::new(artifact_listing, progress_reporter);
//!
//! // Execute
//! let request = InventoryRequest::builder(&url.repository, Ecosystem::Npm).build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = ListingFormatter::new(OutputFormat::Simple);
//! print!("{}", formatter.format(&response.read_model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{CsvStatisticsFormatter, ListingFormatter};
    pub use crate::adapters::outbound::network::{ArtifactoryClient, Credentials, RepositoryUrl};
    pub use crate::application::dto::{
        InventoryOutcome, InventoryRequest, InventoryResponse, OutputFormat,
    };
    pub use crate::application::read_models::InventoryReadModel;
    pub use crate::application::use_cases::ExtractInventoryUseCase;
    pub use crate::inventory::domain::{
        Coordinate, CoordinateSet, DownloadStats, Ecosystem, PackageIdentity, Version,
    };
    pub use crate::inventory::extractors::CoordinateExtractor;
    pub use crate::inventory::policies::ComparatorStrategy;
    pub use crate::inventory::services::{CoordinateRenderer, VersionResolver};
    pub use crate::ports::outbound::{
        ArtifactListing, InventoryFormatter, ListingEntry, ListingQuery, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
