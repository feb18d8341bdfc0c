use std::fmt;

/// Why an update did not reach the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The transformer produced no nodes
    EmptyDataset,
    /// A newer update was triggered before this response arrived
    Superseded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyDataset => write!(f, "empty dataset"),
            SkipReason::Superseded => write!(f, "superseded by a newer update"),
        }
    }
}

/// UpdateOutcome - result of one fetch/transform/render cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Rendered { nodes: usize, links: usize },
    Skipped(SkipReason),
}

impl UpdateOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, UpdateOutcome::Rendered { .. })
    }
}
