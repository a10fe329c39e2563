pub mod coordinate;
pub mod coordinate_set;
pub mod ecosystem;
pub mod identity;
pub mod observation;
pub mod output_format;

pub use coordinate::{Coordinate, Version};
pub use coordinate_set::{CoordinateSet, VersionMap};
pub use ecosystem::Ecosystem;
pub use identity::PackageIdentity;
pub use observation::{ArtifactObservation, DownloadStats, LastDownloaded};
pub use output_format::OutputFormat;
