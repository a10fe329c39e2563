use crate::inventory::domain::{Ecosystem, Version};
use crate::inventory::policies::{ComparatorStrategy, VersionOrdering};

/// VersionResolver - selects the "latest" version of one identity
#[derive(Debug, Clone, Copy)]
pub struct VersionResolver {
    ordering: VersionOrdering,
}

impl VersionResolver {
    pub fn new(ecosystem: Ecosystem, strategy: ComparatorStrategy) -> Self {
        Self {
            ordering: VersionOrdering::for_ecosystem(ecosystem, strategy),
        }
    }

    /// Maximum version under the ecosystem ordering; `None` for an empty input
    pub fn latest<'a, I>(&self, versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions
            .into_iter()
            .max_by(|a, b| self.ordering.compare(a.as_str(), b.as_str()))
    }
}
