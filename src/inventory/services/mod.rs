mod aggregator;
mod date_filter;
mod reconciler;
mod renderer;
mod version_resolver;

pub use aggregator::CoordinateAggregator;
pub use date_filter::{format_query_cutoff, DownloadWindow};
pub use reconciler::StatisticsReconciler;
pub use renderer::CoordinateRenderer;
pub use version_resolver::VersionResolver;
