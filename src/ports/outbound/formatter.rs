use crate::application::read_models::InventoryReadModel;
use crate::shared::Result;

/// InventoryFormatter port for turning an inventory into an output document
///
/// Implementations cover the rendered dependency listing and the statistics CSV.
pub trait InventoryFormatter {
    /// Formats the inventory read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &InventoryReadModel) -> Result<String>;
}
