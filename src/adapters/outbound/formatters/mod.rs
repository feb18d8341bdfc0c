/// Formatter adapters for the supported chart output formats
mod echarts_json_formatter;
mod html_page_formatter;

pub use echarts_json_formatter::EchartsJsonFormatter;
pub use html_page_formatter::HtmlPageFormatter;
