/// Read models for chart output
///
/// The chart option mirrors the ECharts option object and is shared by every
/// formatter, so each output format serializes the same data.
mod chart_option;
mod chart_option_builder;

pub use chart_option::{
    ChartOption, ForceView, GraphSeries, ItemStyle, LabelView, LinkView, NodeView, TitleView,
    TooltipView,
};
pub use chart_option_builder::ChartOptionBuilder;
