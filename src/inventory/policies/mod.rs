//! Version precedence policies
//!
//! The heuristic tuple key is always available; semver and PEP 440 orderings
//! are the precise upgrades for npm and PyPI. Selection happens once per run
//! through [`ComparatorStrategy`].
mod heuristic;
mod pep440;
mod version_ordering;

pub use heuristic::HeuristicKey;
pub use pep440::Pep440Version;
pub use version_ordering::{ComparatorStrategy, VersionOrdering};
