/// Use cases module containing application business logic orchestration
mod extract_inventory;

pub use extract_inventory::ExtractInventoryUseCase;
