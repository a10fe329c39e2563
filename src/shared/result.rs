/// Crate-wide Result alias.
///
/// Failures are carried as `anyhow::Error`; typed errors from
/// [`crate::shared::error::InventoryError`] convert into it with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
