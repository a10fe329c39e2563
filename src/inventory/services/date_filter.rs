use crate::inventory::domain::{CoordinateSet, DownloadStats};
use crate::shared::error::InventoryError;
use crate::shared::Result;
use chrono::{DateTime, TimeDelta, Utc};

/// Timestamp layout the repository manager's query language compares against
const QUERY_CUTOFF_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Renders an instant for a server-side `$gte` comparison
pub fn format_query_cutoff(instant: DateTime<Utc>) -> String {
    instant.format(QUERY_CUTOFF_FORMAT).to_string()
}

/// DownloadWindow - "downloaded in the last N days" filter
///
/// Applied after reconciliation as an independent pass. A version passes only
/// if its retained statistics carry a real timestamp at or after the cutoff;
/// `Never`, unparseable timestamps and missing statistics are all excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadWindow {
    cutoff: DateTime<Utc>,
}

impl DownloadWindow {
    /// # Errors
    /// Fails when the cutoff falls before the earliest representable date
    pub fn since_days(days: u32, now: DateTime<Utc>) -> Result<Self> {
        let cutoff = TimeDelta::try_days(i64::from(days))
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or_else(|| InventoryError::Validation {
                message: format!(
                    "since-days {} reaches before the earliest representable date",
                    days
                ),
            })?;
        Ok(Self { cutoff })
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    pub fn query_cutoff(&self) -> String {
        format_query_cutoff(self.cutoff)
    }

    pub fn admits(&self, stats: Option<&DownloadStats>) -> bool {
        stats.is_some_and(|stats| stats.last_downloaded.is_at_or_after(self.cutoff))
    }

    /// Drops every version outside the window, and identities left empty
    pub fn apply(&self, set: &mut CoordinateSet) {
        set.retain_versions(|_, _, stats| self.admits(stats));
    }
}
