use crate::application::read_models::ChartOption;
use crate::ports::outbound::{ChartFormatter, SurfaceSize};
use crate::shared::Result;

/// EchartsJsonFormatter adapter emitting the ECharts option as pretty JSON
///
/// The output can be passed directly to `chart.setOption(...)`. The surface
/// size does not affect it.
pub struct EchartsJsonFormatter;

impl EchartsJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchartsJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartFormatter for EchartsJsonFormatter {
    fn format(&self, option: &ChartOption, _surface: SurfaceSize) -> Result<String> {
        let mut json = serde_json::to_string_pretty(option)?;
        json.push('\n');
        Ok(json)
    }
}
