use crate::application::read_models::ChartOption;
use crate::shared::Result;

/// Pixel size of the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(1600, 1000)
    }
}

/// ChartFormatter port for serializing a chart option
///
/// Implementations turn the ECharts option into a document for a given
/// surface size (raw JSON, standalone HTML page, ...).
pub trait ChartFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, option: &ChartOption, surface: SurfaceSize) -> Result<String>;
}
