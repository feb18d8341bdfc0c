/// Adapters layer - Infrastructure implementations
///
/// Inbound adapters drive the application (the interactive control
/// session); outbound adapters implement the ports it depends on.
pub mod inbound;
pub mod outbound;
