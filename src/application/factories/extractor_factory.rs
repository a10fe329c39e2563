use crate::inventory::domain::Ecosystem;
use crate::inventory::extractors::{
    CoordinateExtractor, MavenExtractor, NpmExtractor, PypiExtractor,
};

/// Factory for the ecosystem-specific coordinate extractors
pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(ecosystem: Ecosystem) -> Box<dyn CoordinateExtractor> {
        match ecosystem {
            Ecosystem::Maven => Box::new(MavenExtractor::new()),
            Ecosystem::Npm => Box::new(NpmExtractor::new()),
            Ecosystem::PyPi => Box::new(PypiExtractor::new()),
        }
    }
}
