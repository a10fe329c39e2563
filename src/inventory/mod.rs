//! Inventory core: pure coordinate extraction, aggregation, version
//! resolution and rendering. Nothing in here performs I/O.
pub mod domain;
pub mod extractors;
pub mod policies;
pub mod services;
