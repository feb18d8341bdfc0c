use serde::Serialize;

/// A unique package in the transformed graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub name: String,
    /// Size value taken from the records that touched this package
    pub value: Option<i64>,
    /// Number of edge endpoint occurrences referencing this package
    pub degree: usize,
    /// Display radius derived from `value`
    #[serde(rename = "symbolSize")]
    pub symbol_size: f64,
}

/// A directed dependency edge, one per input record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: Option<i64>,
}

/// Output of the transformer: unique nodes plus the edge sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphData {
    /// True when no nodes were produced; callers must not render such a graph
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.name == name)
    }
}
