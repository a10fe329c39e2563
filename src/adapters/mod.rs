/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with the repository manager, the file
/// system and the console.
pub mod outbound;
