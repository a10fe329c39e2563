use super::Coordinate;
use chrono::{DateTime, Utc};

/// Marker the repository manager (and our CSV output) uses for "no download recorded"
pub const NEVER_DOWNLOADED: &str = "Never";

/// Last-access instant of a stored artifact, kept as the raw token for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastDownloaded {
    Never,
    At(String),
}

impl LastDownloaded {
    /// Interprets a raw listing value; absent, blank or `"Never"` all mean never.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => LastDownloaded::Never,
            Some(value) if value.eq_ignore_ascii_case(NEVER_DOWNLOADED) => LastDownloaded::Never,
            Some(value) => LastDownloaded::At(value.to_string()),
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, LastDownloaded::Never)
    }

    /// Parsed instant, if the raw token is an RFC 3339 timestamp
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            LastDownloaded::Never => None,
            LastDownloaded::At(raw) => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// True only for a real, parseable timestamp not earlier than `cutoff`
    pub fn is_at_or_after(&self, cutoff: DateTime<Utc>) -> bool {
        self.instant().is_some_and(|instant| instant >= cutoff)
    }
}

impl std::fmt::Display for LastDownloaded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LastDownloaded::Never => write!(f, "{}", NEVER_DOWNLOADED),
            LastDownloaded::At(raw) => write!(f, "{}", raw),
        }
    }
}

/// Usage evidence attached to one stored artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadStats {
    pub last_downloaded: LastDownloaded,
    pub download_count: u64,
}

impl DownloadStats {
    pub fn new(last_downloaded: LastDownloaded, download_count: u64) -> Self {
        Self {
            last_downloaded,
            download_count,
        }
    }

    /// Stats for an artifact the listing reported nothing about
    pub fn never() -> Self {
        Self::new(LastDownloaded::Never, 0)
    }
}

/// One qualifying stored file, after coordinate extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactObservation {
    pub coordinate: Coordinate,
    pub stats: Option<DownloadStats>,
}

impl ArtifactObservation {
    pub fn new(coordinate: Coordinate, stats: Option<DownloadStats>) -> Self {
        Self { coordinate, stats }
    }
}
