/// Crate-wide result type. Errors are `anyhow::Error` so adapters can attach
/// context while domain code raises typed `GraphError`s.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
