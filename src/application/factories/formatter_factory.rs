use crate::adapters::outbound::formatters::{EchartsJsonFormatter, HtmlPageFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ChartFormatter;

/// Factory for creating chart formatters
///
/// Selects the infrastructure adapter that serializes the chart option for
/// the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use depgraph_view::application::dto::OutputFormat;
    /// use depgraph_view::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Html);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ChartFormatter> {
        match format {
            OutputFormat::Json => Box::new(EchartsJsonFormatter::new()),
            OutputFormat::Html => Box::new(HtmlPageFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use depgraph_view::application::dto::OutputFormat;
    /// use depgraph_view::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering ECharts option as JSON...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering ECharts option as JSON...",
            OutputFormat::Html => "📝 Rendering standalone HTML page...",
        }
    }
}
