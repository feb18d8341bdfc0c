use crate::graph_building::policies::{NodeSizing, SymbolRadius};
use crate::shared::error::GraphError;

pub const DEFAULT_TITLE: &str = "Package Dependencies Graph";
pub const DEFAULT_MAX_NODE_SIZE: f64 = 400.0;

/// Force-directed layout parameters handed to the graph series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceLayout {
    pub repulsion: f64,
    pub edge_length: f64,
    pub gravity: f64,
    pub friction: f64,
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self {
            repulsion: 20000.0,
            edge_length: 2000.0,
            gravity: 0.1,
            friction: 0.6,
        }
    }
}

impl ForceLayout {
    pub fn validate(&self) -> Result<(), GraphError> {
        let fields = [
            ("repulsion", self.repulsion),
            ("edge_length", self.edge_length),
            ("gravity", self.gravity),
            ("friction", self.friction),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::Validation {
                    message: format!(
                        "layout.{} must be a non-negative number, got {}",
                        name, value
                    ),
                });
            }
        }
        if self.friction > 1.0 {
            return Err(GraphError::Validation {
                message: format!("layout.friction must be between 0 and 1, got {}", self.friction),
            });
        }
        Ok(())
    }
}

/// Everything that shapes the transformed graph and its chart option
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub title: String,
    pub layout: ForceLayout,
    /// Upper bound for a node's rendered symbol size
    pub max_node_size: f64,
    pub sizing: NodeSizing,
    pub radius: SymbolRadius,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            layout: ForceLayout::default(),
            max_node_size: DEFAULT_MAX_NODE_SIZE,
            sizing: NodeSizing::default(),
            radius: SymbolRadius::default(),
        }
    }
}

impl ChartSettings {
    pub fn validate(&self) -> Result<(), GraphError> {
        self.layout.validate()?;
        if !self.max_node_size.is_finite() || self.max_node_size <= 0.0 {
            return Err(GraphError::Validation {
                message: format!("max_node_size must be positive, got {}", self.max_node_size),
            });
        }
        Ok(())
    }
}
