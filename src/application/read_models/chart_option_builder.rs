use super::chart_option::{
    ChartOption, ForceView, GraphSeries, ItemStyle, LabelView, LinkView, NodeView, TitleView,
    TooltipView,
};
use crate::application::dto::ChartSettings;
use crate::graph_building::domain::{GraphData, GraphLink, GraphNode};

const NODE_COLOR: &str = "#1f77b4";
const NODE_BORDER_COLOR: &str = "#fff";
const LABEL_FONT_SIZE: u32 = 12;
const ARROW_SIZE: u32 = 10;

/// Builder for the ECharts option of a transformed graph
pub struct ChartOptionBuilder;

impl ChartOptionBuilder {
    /// Builds the chart option
    ///
    /// # Arguments
    /// * `graph` - Transformed nodes and links
    /// * `settings` - Title, layout and symbol size cap
    pub fn build(graph: &GraphData, settings: &ChartSettings) -> ChartOption {
        let layout = &settings.layout;

        ChartOption {
            title: TitleView {
                text: settings.title.clone(),
            },
            tooltip: TooltipView {
                trigger: "item".to_string(),
            },
            series: vec![GraphSeries {
                series_type: "graph".to_string(),
                layout: "force".to_string(),
                data: graph
                    .nodes
                    .iter()
                    .map(|node| Self::build_node(node, settings.max_node_size))
                    .collect(),
                links: graph.links.iter().map(Self::build_link).collect(),
                roam: true,
                draggable: true,
                label: LabelView {
                    show: true,
                    font_size: LABEL_FONT_SIZE,
                    position: "right".to_string(),
                },
                force: ForceView {
                    repulsion: layout.repulsion,
                    edge_length: layout.edge_length,
                    gravity: layout.gravity,
                    friction: layout.friction,
                },
                item_style: ItemStyle {
                    color: NODE_COLOR.to_string(),
                    border_width: 0,
                    border_color: NODE_BORDER_COLOR.to_string(),
                },
                edge_symbol: ["none".to_string(), "arrow".to_string()],
                edge_symbol_size: [0, ARROW_SIZE],
            }],
        }
    }

    /// Rendered symbol size, capped at `max_node_size`
    pub fn capped_symbol_size(radius: f64, max_node_size: f64) -> f64 {
        radius.min(max_node_size)
    }

    fn build_node(node: &GraphNode, max_node_size: f64) -> NodeView {
        NodeView {
            name: node.name.clone(),
            value: node.value,
            degree: node.degree,
            symbol_size: Self::capped_symbol_size(node.symbol_size, max_node_size),
        }
    }

    fn build_link(link: &GraphLink) -> LinkView {
        LinkView {
            source: link.source.clone(),
            target: link.target.clone(),
            value: link.value,
        }
    }
}
