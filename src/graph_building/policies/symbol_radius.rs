use crate::shared::error::GraphError;

const DEFAULT_SCALE: f64 = 1.5;
const DEFAULT_BASE_OFFSET: f64 = 10.0;

/// Maps a dependency count to a display radius:
/// `sqrt(value + 1) * scale + base_offset`.
///
/// The mapping is sub-linear and monotonic. Absent and negative counts are
/// treated as zero, so the radius is never below `base_offset + scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolRadius {
    scale: f64,
    base_offset: f64,
}

impl SymbolRadius {
    pub fn new(scale: f64, base_offset: f64) -> Result<Self, GraphError> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(GraphError::Validation {
                message: format!("radius scale must be a non-negative number, got {}", scale),
            });
        }
        if !base_offset.is_finite() || base_offset < 0.0 {
            return Err(GraphError::Validation {
                message: format!(
                    "radius base offset must be a non-negative number, got {}",
                    base_offset
                ),
            });
        }
        Ok(Self { scale, base_offset })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn base_offset(&self) -> f64 {
        self.base_offset
    }

    pub fn radius(&self, value: Option<i64>) -> f64 {
        let count = value.unwrap_or(0).max(0) as f64;
        (count + 1.0).sqrt() * self.scale + self.base_offset
    }
}

impl Default for SymbolRadius {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            base_offset: DEFAULT_BASE_OFFSET,
        }
    }
}
