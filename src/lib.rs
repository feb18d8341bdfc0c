//! depgraph-view - force-directed views of package dependency datasets
//!
//! This library fetches dependency edge records from a dependency server,
//! turns them into a node/link graph and renders that graph as an ECharts
//! force-layout option (plain JSON or a standalone HTML page), following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_building`): Edge records, queries, views and the graph transformer
//! - **Application Layer** (`application`): Use cases, chart option read model, render context
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP source, formatters, presenters and the interactive session
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depgraph_view::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let source = HttpDependencySource::new(DEFAULT_ENDPOINT, None)?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case and the render context it draws into
//! let use_case = UpdateGraphUseCase::new(source, progress_reporter, ChartSettings::default());
//! let mut context = RenderContext::new(
//!     Box::new(HtmlPageFormatter::new()),
//!     Box::new(FileSystemWriter::new("graph.html".into())),
//!     SurfaceSize::default(),
//! );
//!
//! // Execute
//! let query = GraphQuery::new(500, View::Debian);
//! let outcome = use_case.execute(&query, &mut context).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_building;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::{ControlEvent, ControlSession, SessionSummary};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{EchartsJsonFormatter, HtmlPageFormatter};
    pub use crate::adapters::outbound::network::{
        CachingDependencySource, HttpDependencySource, DEFAULT_ENDPOINT,
    };
    pub use crate::application::dto::{
        ChartSettings, ForceLayout, OutputFormat, SkipReason, UpdateOutcome,
    };
    pub use crate::application::read_models::{ChartOption, ChartOptionBuilder};
    pub use crate::application::render_context::RenderContext;
    pub use crate::application::request_sequencer::{RequestSequencer, Ticket};
    pub use crate::application::use_cases::UpdateGraphUseCase;
    pub use crate::graph_building::domain::{
        EdgeRecord, GraphData, GraphLink, GraphNode, GraphQuery, View,
    };
    pub use crate::graph_building::policies::{NodeSizing, SymbolRadius};
    pub use crate::graph_building::services::GraphTransformer;
    pub use crate::ports::outbound::{
        ChartFormatter, DependencySource, OutputPresenter, ProgressReporter, SurfaceSize,
    };
    pub use crate::shared::Result;
}
