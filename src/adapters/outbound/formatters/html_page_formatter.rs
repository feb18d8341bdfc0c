use crate::application::read_models::ChartOption;
use crate::ports::outbound::{ChartFormatter, SurfaceSize};
use crate::shared::Result;
use chrono::Utc;

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// HtmlPageFormatter adapter producing a standalone page that draws the chart
///
/// The page loads ECharts from a CDN, sizes the `#graph` element to the
/// render surface and re-lays out the chart on window resize.
pub struct HtmlPageFormatter;

impl HtmlPageFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// JSON embedded in a `<script>` element must not close it early
    fn escape_script_json(json: &str) -> String {
        json.replace("</", "<\\/")
    }
}

impl Default for HtmlPageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartFormatter for HtmlPageFormatter {
    fn format(&self, option: &ChartOption, surface: SurfaceSize) -> Result<String> {
        let option_json = Self::escape_script_json(&serde_json::to_string(option)?);
        let title = Self::escape_html(&option.title.text);
        let generated_at = Utc::now().to_rfc3339();

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="generator" content="depgraph-view {version}">
<meta name="generated-at" content="{generated_at}">
<title>{title}</title>
<script src="{cdn}"></script>
<style>
html, body {{ margin: 0; }}
#graph {{ width: {width}px; height: {height}px; max-width: 100vw; }}
</style>
</head>
<body>
<div id="graph"></div>
<script>
const option = {option_json};
option.tooltip.formatter = function (params) {{
  if (params.dataType === 'node') {{
    return `${{params.name}}`;
  }}
  return `${{params.data.source}}  ${{params.data.target}}`;
}};
const chart = echarts.init(document.getElementById('graph'));
chart.setOption(option);
window.addEventListener('resize', () => chart.resize());
</script>
</body>
</html>
"#,
            version = env!("CARGO_PKG_VERSION"),
            generated_at = generated_at,
            title = title,
            cdn = ECHARTS_CDN,
            width = surface.width,
            height = surface.height,
            option_json = option_json,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ChartSettings;
    use crate::application::read_models::ChartOptionBuilder;
    use crate::graph_building::domain::EdgeRecord;
    use crate::graph_building::policies::{NodeSizing, SymbolRadius};
    use crate::graph_building::services::GraphTransformer;

    fn option_for(records: &[EdgeRecord], title: &str) -> ChartOption {
        let graph =
            GraphTransformer::transform(records, NodeSizing::LastWrite, &SymbolRadius::default());
        let settings = ChartSettings {
            title: title.to_string(),
            ..ChartSettings::default()
        };
        ChartOptionBuilder::build(&graph, &settings)
    }

    #[test]
    fn test_page_structure() {
        let option = option_for(
            &[EdgeRecord::new("A", "B", Some(2), Some(5), Some(1))],
            "Package Dependencies Graph",
        );
        let page = HtmlPageFormatter::new()
            .format(&option, SurfaceSize::new(1200, 800))
            .unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Package Dependencies Graph</title>"));
        assert!(page.contains(ECHARTS_CDN));
        assert!(page.contains("width: 1200px; height: 800px;"));
        assert!(page.contains(r#""name":"A""#));
        assert!(page.contains("chart.setOption(option);"));
        assert!(page.contains("chart.resize()"));
        assert!(page.contains("params.dataType === 'node'"));
        assert!(page.contains(r#"<meta name="generated-at""#));
    }

    #[test]
    fn test_title_is_escaped() {
        let option = option_for(&[], "<b>deps & more</b>");
        let page = HtmlPageFormatter::new()
            .format(&option, SurfaceSize::default())
            .unwrap();
        assert!(page.contains("<title>&lt;b&gt;deps &amp; more&lt;/b&gt;</title>"));
    }

    #[test]
    fn test_script_close_tag_in_package_name_is_escaped() {
        let option = option_for(
            &[EdgeRecord::new("</script><script>alert(1)", "b", None, None, None)],
            "t",
        );
        let page = HtmlPageFormatter::new()
            .format(&option, SurfaceSize::default())
            .unwrap();

        assert_eq!(page.matches("</script>").count(), 2);
        assert!(page.contains(r"<\/script><script>alert(1)"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            HtmlPageFormatter::escape_html(r#"a"b'c"#),
            "a&quot;b&#39;c"
        );
    }
}
