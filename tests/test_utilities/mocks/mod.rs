/// Mock implementations for testing
mod mock_artifact_listing;
mod mock_progress_reporter;

pub use mock_artifact_listing::MockArtifactListing;
pub use mock_progress_reporter::MockProgressReporter;
