/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the inventory core isolated.
mod inventory_request;
mod inventory_response;

pub use crate::inventory::domain::OutputFormat;
pub use inventory_request::{InventoryRequest, InventoryRequestBuilder};
pub use inventory_response::{InventoryOutcome, InventoryResponse};
