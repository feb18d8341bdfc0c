use crate::graph_building::domain::{EdgeRecord, GraphData, GraphLink, GraphNode};
use crate::graph_building::policies::{NodeSizing, SymbolRadius};
use std::collections::HashMap;

/// Per-node state accumulated during the first pass
struct NodeAccumulator<'a> {
    name: &'a str,
    value: Option<i64>,
    degree: usize,
}

/// GraphTransformer service turning flat edge records into nodes and links
///
/// This service is pure: no I/O, no mutation of the input. An empty input
/// produces an empty graph, which callers must treat as "nothing to render".
pub struct GraphTransformer;

impl GraphTransformer {
    /// Transforms edge records into a graph
    ///
    /// # Arguments
    /// * `records` - Edge records in server order
    /// * `sizing` - How repeated size observations for one package combine
    /// * `radius` - Mapping from size value to display radius
    ///
    /// # Returns
    /// Nodes in first-appearance order (source before target within a record)
    /// and one link per record in input order
    pub fn transform(
        records: &[EdgeRecord],
        sizing: NodeSizing,
        radius: &SymbolRadius,
    ) -> GraphData {
        let nodes = Self::collect_nodes(records, sizing)
            .into_iter()
            .map(|acc| GraphNode {
                name: acc.name.to_string(),
                value: acc.value,
                degree: acc.degree,
                symbol_size: radius.radius(acc.value),
            })
            .collect();

        let links = records
            .iter()
            .map(|record| GraphLink {
                source: record.from_package.clone(),
                target: record.to_package.clone(),
                value: record.depends_count,
            })
            .collect();

        GraphData { nodes, links }
    }

    fn collect_nodes(records: &[EdgeRecord], sizing: NodeSizing) -> Vec<NodeAccumulator<'_>> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut nodes: Vec<NodeAccumulator<'_>> = Vec::new();

        for record in records {
            let endpoints = [
                (record.from_package.as_str(), record.from_depends),
                (record.to_package.as_str(), record.to_depends),
            ];

            for (name, count) in endpoints {
                let slot = *index.entry(name).or_insert_with(|| {
                    nodes.push(NodeAccumulator {
                        name,
                        value: None,
                        degree: 0,
                    });
                    nodes.len() - 1
                });
                let node = &mut nodes[slot];
                node.value = sizing.apply(node.value, count);
                node.degree += 1;
            }
        }

        nodes
    }
}
