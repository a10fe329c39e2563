use super::heuristic::HeuristicKey;
use super::pep440::Pep440Version;
use crate::inventory::domain::Ecosystem;
use std::cmp::Ordering;

/// Which comparator family to use, chosen once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparatorStrategy {
    /// Ecosystem-correct precedence (semver for npm, PEP 440 for PyPI)
    #[default]
    Precise,
    /// Numeric-where-possible tuple comparison for every ecosystem
    Heuristic,
}

impl std::str::FromStr for ComparatorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "precise" => Ok(ComparatorStrategy::Precise),
            "heuristic" => Ok(ComparatorStrategy::Heuristic),
            _ => Err(format!(
                "Invalid comparator: {}. Please specify 'precise' or 'heuristic'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ComparatorStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparatorStrategy::Precise => write!(f, "precise"),
            ComparatorStrategy::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Sort key for precise orderings: versions the precise parser rejects rank
/// below every version it accepts, and among themselves use the heuristic key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum PreciseKey<P> {
    Unparsed(HeuristicKey),
    Parsed(P),
}

/// Version precedence for one ecosystem
///
/// Every variant is a total order; equal keys fall back to raw string order so
/// the "latest" pick never depends on iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrdering {
    Heuristic,
    Semver,
    Pep440,
}

impl VersionOrdering {
    /// Picks the ordering for an ecosystem; Maven never uses a precise comparator
    pub fn for_ecosystem(ecosystem: Ecosystem, strategy: ComparatorStrategy) -> Self {
        match (ecosystem, strategy) {
            (_, ComparatorStrategy::Heuristic) | (Ecosystem::Maven, _) => {
                VersionOrdering::Heuristic
            }
            (Ecosystem::Npm, ComparatorStrategy::Precise) => VersionOrdering::Semver,
            (Ecosystem::PyPi, ComparatorStrategy::Precise) => VersionOrdering::Pep440,
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let by_precedence = match self {
            VersionOrdering::Heuristic => HeuristicKey::parse(a).cmp(&HeuristicKey::parse(b)),
            VersionOrdering::Semver => semver_key(a).cmp(&semver_key(b)),
            VersionOrdering::Pep440 => pep440_key(a).cmp(&pep440_key(b)),
        };
        by_precedence.then_with(|| a.cmp(b))
    }
}

fn semver_key(version: &str) -> PreciseKey<semver::Version> {
    match semver::Version::parse(version) {
        Ok(parsed) => PreciseKey::Parsed(parsed),
        Err(_) => PreciseKey::Unparsed(HeuristicKey::parse(version)),
    }
}

fn pep440_key(version: &str) -> PreciseKey<Pep440Version> {
    match Pep440Version::parse(version) {
        Some(parsed) => PreciseKey::Parsed(parsed),
        None => PreciseKey::Unparsed(HeuristicKey::parse(version)),
    }
}
