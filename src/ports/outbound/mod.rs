/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod chart_formatter;
pub mod dependency_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use chart_formatter::{ChartFormatter, SurfaceSize};
pub use dependency_source::DependencySource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
