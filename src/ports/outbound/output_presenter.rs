use crate::shared::Result;

/// OutputPresenter port for presenting a rendered chart
///
/// Every successful update presents a complete document, replacing the
/// previous one at the destination.
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
