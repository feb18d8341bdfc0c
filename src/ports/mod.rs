/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the use case talks to the dependency
/// server, the chart formatter, the output destination and the console
/// through these traits.
pub mod outbound;
