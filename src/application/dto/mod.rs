/// Data Transfer Objects for application layer
///
/// DTOs carry settings into the use case and outcomes back out to the
/// adapters, keeping the domain layer isolated.
mod chart_settings;
mod output_format;
mod update_outcome;

pub use chart_settings::{ChartSettings, ForceLayout, DEFAULT_MAX_NODE_SIZE, DEFAULT_TITLE};
pub use output_format::OutputFormat;
pub use update_outcome::{SkipReason, UpdateOutcome};
