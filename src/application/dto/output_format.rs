/// Output format enumeration for rendered charts
///
/// Both the CLI (inbound adapter) and the formatter factory need this, so it
/// lives in the application layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raw ECharts option JSON
    #[default]
    Json,
    /// Standalone HTML page that draws the chart with ECharts
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "html" | "htm" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'html'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}
