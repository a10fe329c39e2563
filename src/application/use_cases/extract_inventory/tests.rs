use super::*;
use crate::inventory::domain::{Ecosystem, OutputFormat};
use crate::inventory::policies::ComparatorStrategy;
use crate::inventory::services::CoordinateRenderer;
use crate::ports::outbound::RawStats;
use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;

// Mock implementations for testing
struct MockArtifactListing {
    entries: Vec<ListingEntry>,
    physical_name: Option<String>,
    fail: bool,
    queries: RefCell<Vec<ListingQuery>>,
}

impl MockArtifactListing {
    fn new(entries: Vec<ListingEntry>) -> Self {
        Self {
            entries,
            physical_name: None,
            fail: false,
            queries: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        let mut listing = Self::new(Vec::new());
        listing.fail = true;
        listing
    }

    fn last_query(&self) -> ListingQuery {
        self.queries.borrow().last().cloned().unwrap()
    }
}

impl ArtifactListing for MockArtifactListing {
    fn resolve_repository(&self, requested: &str) -> String {
        self.physical_name
            .clone()
            .unwrap_or_else(|| requested.to_string())
    }

    fn list_artifacts(&self, query: &ListingQuery) -> Result<Vec<ListingEntry>> {
        self.queries.borrow_mut().push(query.clone());
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(self.entries.clone())
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl MockProgressReporter {
    fn saw(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(needle))
    }

    fn saw_error(&self, needle: &str) -> bool {
        self.errors.borrow().iter().any(|m| m.contains(needle))
    }
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()
}

fn stats(downloaded: Option<&str>, downloads: u64) -> RawStats {
    RawStats {
        downloaded: downloaded.map(str::to_string),
        downloads,
    }
}

fn npm_entries() -> Vec<ListingEntry> {
    vec![
        ListingEntry::file(".npm/express", "express-4.18.2.json")
            .with_stats(stats(Some("2024-06-25T10:00:00.000Z"), 4)),
        ListingEntry::file("ab/cd/express/-", "express-4.18.2.tgz").with_stats(stats(None, 0)),
        ListingEntry::file(".npm/express", "express-4.19.0.json")
            .with_stats(stats(Some("2024-01-01T00:00:00.000Z"), 1)),
        ListingEntry::file(".npm/express", "package.json"),
        ListingEntry::file("ab/cd/-", "@babel-core-7.23.0.tgz")
            .with_stats(stats(Some("2024-06-29T00:00:00.000Z"), 2)),
        ListingEntry {
            path: ".npm".to_string(),
            name: "express".to_string(),
            entry_type: crate::ports::outbound::EntryType::Folder,
            stats: None,
        },
    ]
}

fn request(ecosystem: Ecosystem) -> crate::application::dto::InventoryRequestBuilder {
    InventoryRequest::builder("npm-remote", ecosystem).now(now())
}

fn rendered(response: &InventoryResponse) -> Vec<String> {
    response
        .read_model
        .coordinates
        .iter()
        .map(|c| CoordinateRenderer::render(c, OutputFormat::Simple))
        .collect()
}

#[test]
fn test_latest_versions() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(npm_entries()), &reporter);

    let response = use_case
        .execute(request(Ecosystem::Npm).build().unwrap())
        .unwrap();

    assert_eq!(response.outcome, InventoryOutcome::Found);
    assert_eq!(response.artifact_count, 6);
    assert_eq!(response.package_count, 2);
    assert_eq!(
        rendered(&response),
        vec!["@babel/core@7.23.0", "express@4.19.0"]
    );
    assert!(response.read_model.statistics.is_empty());
    assert!(reporter.saw("Found 6 cached artifacts"));
    assert!(reporter.saw("Found 2 unique packages in cache"));
}

#[test]
fn test_all_versions() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(npm_entries()), &reporter);

    let response = use_case
        .execute(request(Ecosystem::Npm).all_versions(true).build().unwrap())
        .unwrap();

    assert_eq!(
        rendered(&response),
        vec!["@babel/core@7.23.0", "express@4.18.2", "express@4.19.0"]
    );
}

#[test]
fn test_statistics_are_reconciled() {
    let reporter = MockProgressReporter::default();
    let listing = MockArtifactListing::new(npm_entries());
    let use_case = ExtractInventoryUseCase::new(listing, &reporter);

    let response = use_case
        .execute(request(Ecosystem::Npm).statistics(true).build().unwrap())
        .unwrap();

    let rows = &response.read_model.statistics;
    assert_eq!(rows.len(), 3);
    let express = rows
        .iter()
        .find(|row| row.package_version == "express@4.18.2")
        .unwrap();
    // The metadata sighting has the higher count and wins over the tarball
    assert_eq!(express.download_count, 4);
    assert_eq!(express.last_downloaded, "2024-06-25T10:00:00.000Z");
}

#[test]
fn test_statistics_query_includes_stats_without_server_filter() {
    let reporter = MockProgressReporter::default();
    let listing = MockArtifactListing::new(npm_entries());
    let use_case = ExtractInventoryUseCase::new(listing, &reporter);

    use_case
        .execute(
            request(Ecosystem::Npm)
                .statistics(true)
                .since_days(Some(7))
                .build()
                .unwrap(),
        )
        .unwrap();

    let query = use_case.artifact_listing.last_query();
    assert!(query.include_stats);
    assert!(query.downloaded_since.is_none());
}

#[test]
fn test_since_days_without_csv_filters_server_side() {
    let reporter = MockProgressReporter::default();
    let listing = MockArtifactListing::new(npm_entries());
    let use_case = ExtractInventoryUseCase::new(listing, &reporter);

    use_case
        .execute(request(Ecosystem::Npm).since_days(Some(7)).build().unwrap())
        .unwrap();

    let query = use_case.artifact_listing.last_query();
    assert!(query.include_stats);
    assert_eq!(
        query.downloaded_since,
        Some(Utc.with_ymd_and_hms(2024, 6, 23, 0, 0, 0).unwrap())
    );
    assert!(reporter.saw("Filtering packages downloaded since 2024-06-23T00:00:00.000Z (7 days ago)"));
}

#[test]
fn test_since_days_filters_listing_but_not_statistics() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(npm_entries()), &reporter);

    let response = use_case
        .execute(
            request(Ecosystem::Npm)
                .statistics(true)
                .since_days(Some(7))
                .all_versions(true)
                .build()
                .unwrap(),
        )
        .unwrap();

    // express@4.19.0 was last downloaded in January
    assert_eq!(
        rendered(&response),
        vec!["@babel/core@7.23.0", "express@4.18.2"]
    );
    assert_eq!(response.read_model.statistics.len(), 3);
}

#[test]
fn test_since_days_resolves_latest_among_recent_versions() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(npm_entries()), &reporter);

    let response = use_case
        .execute(
            request(Ecosystem::Npm)
                .statistics(true)
                .since_days(Some(7))
                .build()
                .unwrap(),
        )
        .unwrap();

    assert_eq!(
        rendered(&response),
        vec!["@babel/core@7.23.0", "express@4.18.2"]
    );
}

#[test]
fn test_package_filter() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(npm_entries()), &reporter);

    let response = use_case
        .execute(
            request(Ecosystem::Npm)
                .package(Some("@Babel/Core".to_string()))
                .build()
                .unwrap(),
        )
        .unwrap();

    assert_eq!(rendered(&response), vec!["@babel/core@7.23.0"]);
    assert_eq!(response.package_count, 2);
}

#[test]
fn test_package_not_found() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(npm_entries()), &reporter);

    let response = use_case
        .execute(
            request(Ecosystem::Npm)
                .package(Some("left-pad".to_string()))
                .build()
                .unwrap(),
        )
        .unwrap();

    assert_eq!(
        response.outcome,
        InventoryOutcome::PackageNotFound {
            query: "left-pad".to_string()
        }
    );
    assert!(response.read_model.coordinates.is_empty());
    assert!(reporter.saw_error("Package 'left-pad' not found in cache"));
}

#[test]
fn test_empty_listing_is_nothing_found() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(Vec::new()), &reporter);

    let response = use_case
        .execute(request(Ecosystem::Maven).build().unwrap())
        .unwrap();

    assert_eq!(response.outcome, InventoryOutcome::NothingFound);
    assert_eq!(response.artifact_count, 0);
    assert!(reporter.saw_error("No cached packages found"));
}

#[test]
fn test_listing_failure_is_treated_as_empty() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::failing(), &reporter);

    let response = use_case
        .execute(request(Ecosystem::PyPi).build().unwrap())
        .unwrap();

    assert_eq!(response.outcome, InventoryOutcome::NothingFound);
    assert!(reporter.saw_error("Warning: connection refused"));
}

#[test]
fn test_only_non_packages_is_nothing_found() {
    let reporter = MockProgressReporter::default();
    let entries = vec![
        ListingEntry::file("org/x/1.0", "x-1.0.jar.sha1"),
        ListingEntry::file("org/x/1.0", "x-1.0-sources.jar"),
    ];
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(entries), &reporter);

    let response = use_case
        .execute(request(Ecosystem::Maven).build().unwrap())
        .unwrap();

    assert_eq!(response.outcome, InventoryOutcome::NothingFound);
    assert_eq!(response.artifact_count, 2);
}

#[test]
fn test_repository_mapping_is_reported() {
    let reporter = MockProgressReporter::default();
    let mut listing = MockArtifactListing::new(npm_entries());
    listing.physical_name = Some("npm-remote-cache".to_string());
    let use_case = ExtractInventoryUseCase::new(listing, &reporter);

    let response = use_case
        .execute(request(Ecosystem::Npm).build().unwrap())
        .unwrap();

    assert_eq!(response.repository, "npm-remote-cache");
    assert_eq!(
        use_case.artifact_listing.last_query().repository,
        "npm-remote-cache"
    );
    assert!(reporter.saw("Repository name mapped from 'npm-remote' to 'npm-remote-cache'"));
}

#[test]
fn test_debug_mode_echoes_items() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(npm_entries()), &reporter);

    let response = use_case
        .execute(request(Ecosystem::Npm).debug(true).build().unwrap())
        .unwrap();

    assert!(use_case.artifact_listing.last_query().debug);
    assert_eq!(response.outcome, InventoryOutcome::Found);
    assert!(reporter.saw("DEBUG: First 20 items in repository:"));
    assert!(reporter.saw("  [file] .npm/express/express-4.18.2.json (downloaded: 2024-06-25T10:00:00.000Z)"));
    assert!(reporter.saw("  [folder] .npm/express (downloaded: N/A)"));
    assert!(!reporter.saw("unique packages"));
}

#[test]
fn test_debug_mode_empty_lists_causes() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(Vec::new()), &reporter);

    let response = use_case
        .execute(request(Ecosystem::PyPi).debug(true).build().unwrap())
        .unwrap();

    assert_eq!(response.outcome, InventoryOutcome::NothingFound);
    assert!(reporter.saw("The files don't match Python naming conventions"));
    assert!(reporter.errors.borrow().is_empty());
}

#[test]
fn test_heuristic_comparator_for_npm() {
    let reporter = MockProgressReporter::default();
    let entries = vec![
        ListingEntry::file("ab/cd/-", "typescript-5.4.0.tgz"),
        ListingEntry::file("ab/cd/-", "typescript-5.4.0-beta.tgz"),
    ];
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(entries.clone()), &reporter);
    let precise = use_case
        .execute(request(Ecosystem::Npm).build().unwrap())
        .unwrap();
    assert_eq!(rendered(&precise), vec!["typescript@5.4.0"]);

    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(entries), &reporter);
    let heuristic = use_case
        .execute(
            request(Ecosystem::Npm)
                .comparator(ComparatorStrategy::Heuristic)
                .build()
                .unwrap(),
        )
        .unwrap();
    assert_eq!(rendered(&heuristic), vec!["typescript@5.4.0-beta"]);
}

#[test]
fn test_port_delegates_to_execute() {
    let reporter = MockProgressReporter::default();
    let use_case = ExtractInventoryUseCase::new(MockArtifactListing::new(npm_entries()), &reporter);
    let response = use_case
        .extract_inventory(request(Ecosystem::Npm).build().unwrap())
        .unwrap();
    assert!(response.is_found());
}
