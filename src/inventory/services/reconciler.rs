use crate::inventory::domain::DownloadStats;

/// StatisticsReconciler - picks which sighting of a duplicated coordinate to keep
///
/// The same release is often stored as several physical files (a metadata
/// document and a tarball, a `.pom` and a `.jar`). Only one set of statistics
/// survives per coordinate: the one with the strongest evidence of real use.
pub struct StatisticsReconciler;

impl StatisticsReconciler {
    /// Whether `candidate` should replace the `retained` statistics
    ///
    /// Replaces on a strictly higher download count, or on an equal count when
    /// only the candidate carries a real timestamp. Equal inputs never replace,
    /// so reconciling the same observation twice is a no-op.
    pub fn should_replace(retained: &DownloadStats, candidate: &DownloadStats) -> bool {
        if candidate.download_count != retained.download_count {
            return candidate.download_count > retained.download_count;
        }
        retained.last_downloaded.is_never() && !candidate.last_downloaded.is_never()
    }

    /// Returns the statistics to keep out of the two
    pub fn reconcile(retained: DownloadStats, candidate: DownloadStats) -> DownloadStats {
        if Self::should_replace(&retained, &candidate) {
            candidate
        } else {
            retained
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::LastDownloaded;

    fn at(count: u64) -> DownloadStats {
        DownloadStats::new(
            LastDownloaded::At("2024-05-01T00:00:00.000Z".to_string()),
            count,
        )
    }

    fn never(count: u64) -> DownloadStats {
        DownloadStats::new(LastDownloaded::Never, count)
    }

    #[test]
    fn test_higher_count_replaces() {
        assert!(StatisticsReconciler::should_replace(&at(1), &never(2)));
        assert!(!StatisticsReconciler::should_replace(&never(2), &at(1)));
    }

    #[test]
    fn test_equal_count_prefers_real_timestamp() {
        assert!(StatisticsReconciler::should_replace(&never(3), &at(3)));
        assert!(!StatisticsReconciler::should_replace(&at(3), &never(3)));
    }

    #[test]
    fn test_equal_count_both_timestamps_keeps_retained() {
        let later = DownloadStats::new(
            LastDownloaded::At("2025-01-01T00:00:00.000Z".to_string()),
            3,
        );
        assert!(!StatisticsReconciler::should_replace(&at(3), &later));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        for stats in [at(0), at(7), never(0), never(7)] {
            let once = StatisticsReconciler::reconcile(stats.clone(), stats.clone());
            let twice = StatisticsReconciler::reconcile(once.clone(), stats.clone());
            assert_eq!(once, stats);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_reconcile_order_of_arrival() {
        let kept = StatisticsReconciler::reconcile(never(0), at(0));
        assert_eq!(kept, at(0));
        let kept = StatisticsReconciler::reconcile(kept, never(0));
        assert_eq!(kept, at(0));
    }
}
