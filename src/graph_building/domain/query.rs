use super::View;
use std::fmt;

/// Minimum dependency count applied when none is given
pub const DEFAULT_MIN_COUNT: i64 = 1000;

/// Filtering parameters for one fetch of the dependency dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphQuery {
    /// Only edges whose endpoints both exceed this dependency count are returned
    pub min_count: i64,
    pub view: View,
}

impl GraphQuery {
    pub fn new(min_count: i64, view: View) -> Self {
        Self { min_count, view }
    }

    pub fn with_min_count(self, min_count: i64) -> Self {
        Self { min_count, ..self }
    }

    pub fn with_view(self, view: View) -> Self {
        Self { view, ..self }
    }
}

impl Default for GraphQuery {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_COUNT, View::default())
    }
}

impl fmt::Display for GraphQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min_count={} view={}", self.min_count, self.view)
    }
}
