use crate::application::dto::{InventoryRequest, InventoryResponse};
use crate::shared::Result;

/// InventoryExtractionPort - Inbound port for the inventory use case
///
/// This is what the CLI drives: one request in, one classified response out.
pub trait InventoryExtractionPort {
    /// Extracts the cached package inventory of one repository
    ///
    /// An empty repository and an unmatched `--package` filter are reported
    /// through the response outcome, not as errors.
    ///
    /// # Errors
    /// Returns an error for failures that are not part of normal operation,
    /// such as an unparseable repository URL.
    fn extract_inventory(&self, request: InventoryRequest) -> Result<InventoryResponse>;
}
