//! Coordinate extractors - one per ecosystem
//!
//! Each extractor turns a raw `(path, filename)` pair from a repository listing
//! into a [`Coordinate`], or rejects it. Rejection is the normal outcome for
//! checksums, metadata-only documents and anything else that is not a package
//! artifact, so it is modelled as `None` rather than an error.

mod maven;
mod npm;
mod pypi;

pub use maven::MavenExtractor;
pub use npm::NpmExtractor;
pub use pypi::PypiExtractor;

use crate::inventory::domain::{Coordinate, Ecosystem};

/// Capability shared by the ecosystem-specific extractors
pub trait CoordinateExtractor {
    /// Ecosystem this extractor understands
    fn ecosystem(&self) -> Ecosystem;

    /// Extracts a coordinate from a stored path and filename
    ///
    /// # Arguments
    /// * `path` - Directory path of the stored file inside the repository
    /// * `filename` - Name of the stored file
    ///
    /// # Returns
    /// The coordinate, or `None` when the file is not a package artifact
    fn extract(&self, path: &str, filename: &str) -> Option<Coordinate>;
}

/// Splits a repository path into segments, ignoring leading/trailing separators
fn path_segments(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').collect()
}
