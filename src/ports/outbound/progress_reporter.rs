/// ProgressReporter port for user-facing status messages
///
/// This port abstracts progress reporting (e.g., to stderr) so stdout stays
/// reserved for the rendered chart.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Indicates that a request is outstanding until the next report call
    ///
    /// # Arguments
    /// * `message` - Description of what is being waited on
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
