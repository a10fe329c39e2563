//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that the formatters consume, built once from the
//! aggregated coordinate set.

mod inventory_read_model;
mod inventory_read_model_builder;

pub use inventory_read_model::{InventoryReadModel, StatisticsRow};
pub use inventory_read_model_builder::InventoryReadModelBuilder;
