use super::StatisticsReconciler;
use crate::inventory::domain::{ArtifactObservation, CoordinateSet, DownloadStats};

/// CoordinateAggregator - groups extracted coordinates by package identity
///
/// In stats mode every repeated sighting of a coordinate goes through the
/// [`StatisticsReconciler`]; without stats the set simply deduplicates.
#[derive(Debug)]
pub struct CoordinateAggregator {
    set: CoordinateSet,
    observations: usize,
}

impl CoordinateAggregator {
    pub fn new(tracks_stats: bool) -> Self {
        Self {
            set: CoordinateSet::new(tracks_stats),
            observations: 0,
        }
    }

    /// Adds one observation
    ///
    /// Observations without statistics count as never downloaded when the
    /// set tracks statistics.
    pub fn add(&mut self, observation: ArtifactObservation) {
        self.observations += 1;
        let ArtifactObservation { coordinate, stats } = observation;

        if !self.set.tracks_stats() {
            self.set.record(coordinate.identity, coordinate.version, None);
            return;
        }

        let candidate = stats.unwrap_or_else(DownloadStats::never);
        let kept = match self
            .set
            .retained_stats(&coordinate.identity, &coordinate.version)
        {
            Some(retained) => StatisticsReconciler::reconcile(retained.clone(), candidate),
            None => candidate,
        };
        self.set
            .record(coordinate.identity, coordinate.version, Some(kept));
    }

    /// Number of observations added so far, duplicates included
    pub fn observation_count(&self) -> usize {
        self.observations
    }

    pub fn finish(self) -> CoordinateSet {
        self.set
    }
}

impl Extend<ArtifactObservation> for CoordinateAggregator {
    fn extend<T: IntoIterator<Item = ArtifactObservation>>(&mut self, iter: T) {
        for observation in iter {
            self.add(observation);
        }
    }
}
