use crate::application::read_models::InventoryReadModel;

/// How an inventory run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryOutcome {
    /// At least one coordinate survived extraction (and the package filter)
    Found,
    /// The listing held no package artifacts, or could not be obtained
    NothingFound,
    /// The package filter matched no extracted identity
    PackageNotFound { query: String },
}

/// InventoryResponse - Internal response DTO from the inventory use case
#[derive(Debug, Clone)]
pub struct InventoryResponse {
    pub outcome: InventoryOutcome,
    /// Physical repository that was queried
    pub repository: String,
    /// Items returned by the listing, folders included
    pub artifact_count: usize,
    /// Distinct identities before the package filter
    pub package_count: usize,
    /// Empty unless the outcome is [`InventoryOutcome::Found`]
    pub read_model: InventoryReadModel,
}

impl InventoryResponse {
    pub fn is_found(&self) -> bool {
        self.outcome == InventoryOutcome::Found
    }
}
