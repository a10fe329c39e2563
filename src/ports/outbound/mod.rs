/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (repository manager, file system, console).
pub mod artifact_listing;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use artifact_listing::{ArtifactListing, EntryType, ListingEntry, ListingQuery, RawStats};
pub use formatter::InventoryFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
