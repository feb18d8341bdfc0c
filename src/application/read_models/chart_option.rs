use serde::Serialize;

/// Top-level ECharts option for the dependency graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOption {
    pub title: TitleView,
    pub tooltip: TooltipView,
    pub series: Vec<GraphSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleView {
    pub text: String,
}

/// Global tooltip settings
///
/// Items carry no tooltip of their own. ECharts would read `{a}`/`{b}`/`{c}`
/// in a per-item formatter string as template markers, so tooltip text comes
/// from the page's formatter function instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipView {
    pub trigger: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSeries {
    #[serde(rename = "type")]
    pub series_type: String,
    pub layout: String,
    pub data: Vec<NodeView>,
    pub links: Vec<LinkView>,
    pub roam: bool,
    pub draggable: bool,
    pub label: LabelView,
    pub force: ForceView,
    pub item_style: ItemStyle,
    pub edge_symbol: [String; 2],
    pub edge_symbol_size: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    pub degree: usize,
    pub symbol_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkView {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelView {
    pub show: bool,
    pub font_size: u32,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceView {
    pub repulsion: f64,
    pub edge_length: f64,
    pub gravity: f64,
    pub friction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    pub color: String,
    pub border_width: u32,
    pub border_color: String,
}
