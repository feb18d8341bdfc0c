/// Mock implementations for testing
mod mock_dependency_source;
mod mock_presenter;
mod mock_progress_reporter;

pub use mock_dependency_source::MockDependencySource;
pub use mock_presenter::MockPresenter;
pub use mock_progress_reporter::MockProgressReporter;
