/// Shared utilities and cross-cutting concerns
pub mod error;
pub mod result;

pub use result::Result;
