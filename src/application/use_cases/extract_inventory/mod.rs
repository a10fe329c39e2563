use crate::application::dto::{InventoryOutcome, InventoryRequest, InventoryResponse};
use crate::application::factories::ExtractorFactory;
use crate::application::read_models::{InventoryReadModel, InventoryReadModelBuilder};
use crate::inventory::domain::{
    ArtifactObservation, CoordinateSet, DownloadStats, LastDownloaded,
};
use crate::inventory::extractors::CoordinateExtractor;
use crate::inventory::services::{CoordinateAggregator, DownloadWindow, VersionResolver};
use crate::ports::inbound::InventoryExtractionPort;
use crate::ports::outbound::{ArtifactListing, ListingEntry, ListingQuery, ProgressReporter};
use crate::shared::Result;

/// Items echoed to the user in inspection mode
const DEBUG_ECHO_LIMIT: usize = 20;

/// ExtractInventoryUseCase - Core use case for inventorying a repository cache
///
/// Fetches one listing, runs every item through the ecosystem extractor,
/// aggregates and reconciles the coordinates, then applies the package and
/// date filters and builds the read model the formatters consume.
///
/// # Type Parameters
/// * `AL` - ArtifactListing implementation
/// * `PR` - ProgressReporter implementation
pub struct ExtractInventoryUseCase<AL, PR> {
    artifact_listing: AL,
    progress_reporter: PR,
}

impl<AL, PR> ExtractInventoryUseCase<AL, PR>
where
    AL: ArtifactListing,
    PR: ProgressReporter,
{
    /// Creates a new ExtractInventoryUseCase with injected dependencies
    pub fn new(artifact_listing: AL, progress_reporter: PR) -> Self {
        Self {
            artifact_listing,
            progress_reporter,
        }
    }

    /// Executes the inventory use case
    pub fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        // Step 1: Resolve the physical repository holding the cache
        let repository = self.resolve_repository(&request);

        // Step 2: Fetch the listing (a failure counts as an empty listing)
        let window = request
            .since_days
            .map(|days| DownloadWindow::since_days(days, request.now))
            .transpose()?;
        let entries = self.fetch_listing(&request, &repository, window.as_ref());
        if request.debug {
            self.echo_entries(&entries);
        }

        // Step 3: Extract and aggregate coordinates
        let mut reconciled = self.extract_coordinates(&request, &entries);
        if reconciled.is_empty() {
            self.report_nothing_found(&request);
            return Ok(Self::build_response(
                &request,
                InventoryOutcome::NothingFound,
                repository,
                entries.len(),
                0,
                InventoryReadModel::empty(request.ecosystem),
            ));
        }

        let package_count = reconciled.package_count();
        if !request.debug {
            self.progress_reporter.report(&format!(
                "Found {} unique packages in cache",
                package_count
            ));
        }

        // Step 4: Apply the package filter
        if let Some(query) = request.package.as_deref() {
            reconciled.retain_identities(|identity| identity.matches_query(query));
            if reconciled.is_empty() {
                self.progress_reporter.report_error(&format!(
                    "Package '{}' not found in cache",
                    query
                ));
                return Ok(Self::build_response(
                    &request,
                    InventoryOutcome::PackageNotFound {
                        query: query.to_string(),
                    },
                    repository,
                    entries.len(),
                    package_count,
                    InventoryReadModel::empty(request.ecosystem),
                ));
            }
        }

        // Step 5: Apply the download window to the listed versions only
        let mut listed = reconciled.clone();
        if let Some(window) = window.as_ref() {
            window.apply(&mut listed);
        }

        // Step 6: Resolve versions and build the read model
        let resolver = VersionResolver::new(request.ecosystem, request.comparator);
        let read_model = InventoryReadModelBuilder::new(request.ecosystem, resolver).build(
            &reconciled,
            &listed,
            request.all_versions,
        );

        Ok(Self::build_response(
            &request,
            InventoryOutcome::Found,
            repository,
            entries.len(),
            package_count,
            read_model,
        ))
    }

    fn resolve_repository(&self, request: &InventoryRequest) -> String {
        let repository = self
            .artifact_listing
            .resolve_repository(&request.repository);
        if repository != request.repository {
            self.progress_reporter.report(&format!(
                "Note: Repository name mapped from '{}' to '{}'",
                request.repository, repository
            ));
        }
        repository
    }

    /// Fetches the listing, turning any failure into a warning and an empty listing
    fn fetch_listing(
        &self,
        request: &InventoryRequest,
        repository: &str,
        window: Option<&DownloadWindow>,
    ) -> Vec<ListingEntry> {
        // The CSV lists every version, so only filter server-side without it
        let downloaded_since = window
            .filter(|_| !request.statistics)
            .map(DownloadWindow::cutoff);

        let query = ListingQuery {
            repository: repository.to_string(),
            ecosystem: request.ecosystem,
            include_stats: request.tracks_stats(),
            downloaded_since,
            debug: request.debug,
        };

        if request.debug {
            self.progress_reporter
                .report("DEBUG MODE: Showing first 100 items in repository");
        } else if let (Some(window), Some(days)) = (window, request.since_days) {
            self.progress_reporter.report(&format!(
                "Filtering packages downloaded since {} ({} days ago)",
                window.query_cutoff(),
                days
            ));
        }
        self.progress_reporter
            .report(&format!("Querying cached artifacts in {}...", repository));

        match self.artifact_listing.list_artifacts(&query) {
            Ok(entries) => {
                self.progress_reporter
                    .report(&format!("Found {} cached artifacts", entries.len()));
                entries
            }
            Err(e) => {
                tracing::warn!(error = %e, repository, "listing failed");
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {:#}", e));
                Vec::new()
            }
        }
    }

    fn echo_entries(&self, entries: &[ListingEntry]) {
        if entries.is_empty() {
            return;
        }
        self.progress_reporter
            .report(&format!("\nDEBUG: First {} items in repository:", DEBUG_ECHO_LIMIT));
        for entry in entries.iter().take(DEBUG_ECHO_LIMIT) {
            let kind = if entry.is_file() { "file" } else { "folder" };
            let downloaded = entry
                .stats
                .as_ref()
                .map(|stats| stats.downloaded.as_deref().unwrap_or("None"))
                .unwrap_or("N/A");
            self.progress_reporter.report(&format!(
                "  [{}] {}/{} (downloaded: {})",
                kind, entry.path, entry.name, downloaded
            ));
        }
        self.progress_reporter.report("");
    }

    /// Runs every file entry through the extractor and aggregates the survivors
    fn extract_coordinates(
        &self,
        request: &InventoryRequest,
        entries: &[ListingEntry],
    ) -> CoordinateSet {
        let extractor = ExtractorFactory::create(request.ecosystem);
        let mut aggregator = CoordinateAggregator::new(request.tracks_stats());
        let total = entries.len();

        for (index, entry) in entries.iter().enumerate() {
            if let Some(observation) = Self::observe(extractor.as_ref(), entry) {
                aggregator.add(observation);
            }
            self.progress_reporter
                .report_progress(index + 1, total, Some("extracting coordinates"));
        }

        tracing::debug!(
            observations = aggregator.observation_count(),
            entries = total,
            "extraction finished"
        );
        aggregator.finish()
    }

    fn observe(
        extractor: &dyn CoordinateExtractor,
        entry: &ListingEntry,
    ) -> Option<ArtifactObservation> {
        if !entry.is_file() {
            return None;
        }

        let Some(coordinate) = extractor.extract(&entry.path, &entry.name) else {
            tracing::debug!(
                "Could not parse {} package from: {}/{}",
                extractor.ecosystem().display_name(),
                entry.path,
                entry.name
            );
            return None;
        };

        let stats = entry.stats.as_ref().map(|raw| {
            DownloadStats::new(
                LastDownloaded::from_raw(raw.downloaded.as_deref()),
                raw.downloads,
            )
        });
        Some(ArtifactObservation::new(coordinate, stats))
    }

    fn report_nothing_found(&self, request: &InventoryRequest) {
        if request.debug {
            self.progress_reporter.report(&format!(
                "\nNo packages could be parsed from the repository\n\
                 This might mean:\n  \
                 - The repository is empty\n  \
                 - The files don't match {} naming conventions\n  \
                 - The repository structure is different than expected",
                request.ecosystem.display_name()
            ));
        } else {
            self.progress_reporter
                .report_error("No cached packages found or error accessing repository");
        }
    }

    fn build_response(
        request: &InventoryRequest,
        outcome: InventoryOutcome,
        repository: String,
        artifact_count: usize,
        package_count: usize,
        read_model: InventoryReadModel,
    ) -> InventoryResponse {
        tracing::debug!(
            ecosystem = %request.ecosystem,
            ?outcome,
            artifact_count,
            package_count,
            "inventory finished"
        );
        InventoryResponse {
            outcome,
            repository,
            artifact_count,
            package_count,
            read_model,
        }
    }
}

impl<AL, PR> InventoryExtractionPort for ExtractInventoryUseCase<AL, PR>
where
    AL: ArtifactListing,
    PR: ProgressReporter,
{
    fn extract_inventory(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        self.execute(request)
    }
}

#[cfg(test)]
mod tests;
