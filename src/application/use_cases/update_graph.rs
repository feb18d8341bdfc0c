use crate::application::dto::{ChartSettings, SkipReason, UpdateOutcome};
use crate::application::read_models::ChartOptionBuilder;
use crate::application::render_context::RenderContext;
use crate::graph_building::domain::{EdgeRecord, GraphQuery};
use crate::graph_building::services::GraphTransformer;
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::shared::Result;
use std::sync::Arc;

/// UpdateGraphUseCase - fetch, transform and render one dependency graph
///
/// The dependency source is held behind an `Arc` so the interactive session
/// can run fetches on spawned tasks while this use case keeps the
/// synchronous transform/render half on the session loop.
///
/// # Type Parameters
/// * `S` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct UpdateGraphUseCase<S, PR> {
    source: Arc<S>,
    progress_reporter: PR,
    settings: ChartSettings,
}

impl<S, PR> UpdateGraphUseCase<S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new UpdateGraphUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR, settings: ChartSettings) -> Self {
        Self {
            source: Arc::new(source),
            progress_reporter,
            settings,
        }
    }

    /// Runs one full cycle against the render context
    ///
    /// # Returns
    /// `Rendered` with node/link counts, or `Skipped(EmptyDataset)` when the
    /// server returned nothing usable (the previous chart stays in place)
    ///
    /// # Errors
    /// Network, parse and output failures propagate unchanged
    pub async fn execute(
        &self,
        query: &GraphQuery,
        context: &mut RenderContext,
    ) -> Result<UpdateOutcome> {
        let records = self.fetch(query).await?;
        self.render(query, &records, context)
    }

    /// Fetches edge records for `query`
    pub async fn fetch(&self, query: &GraphQuery) -> Result<Vec<EdgeRecord>> {
        self.announce_fetch(query);
        let records = self.source.fetch_edges(query).await?;
        self.progress_reporter
            .report(&format!("✅ Received {} edge record(s)", records.len()));
        tracing::debug!(records = records.len(), %query, "raw data received");
        Ok(records)
    }

    /// Transforms `records` and applies the resulting chart to `context`
    ///
    /// An empty node set is logged as an error and nothing is applied.
    pub fn render(
        &self,
        query: &GraphQuery,
        records: &[EdgeRecord],
        context: &mut RenderContext,
    ) -> Result<UpdateOutcome> {
        let graph =
            GraphTransformer::transform(records, self.settings.sizing, &self.settings.radius);
        tracing::debug!(
            nodes = graph.nodes.len(),
            links = graph.links.len(),
            "processed graph data"
        );

        if graph.is_empty() {
            tracing::error!(%query, "No nodes generated from data");
            self.progress_reporter.report_error(&format!(
                "⚠️  No nodes generated from data for {}. The previous chart was kept.",
                query
            ));
            return Ok(UpdateOutcome::Skipped(SkipReason::EmptyDataset));
        }

        let option = ChartOptionBuilder::build(&graph, &self.settings);
        tracing::trace!(?option, "chart option");
        context.apply(option)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Rendered {} node(s) and {} link(s) for {}",
            graph.nodes.len(),
            graph.links.len(),
            query
        ));

        Ok(UpdateOutcome::Rendered {
            nodes: graph.nodes.len(),
            links: graph.links.len(),
        })
    }

    /// Reports that a fetch for `query` is outstanding
    pub fn announce_fetch(&self, query: &GraphQuery) {
        self.progress_reporter
            .report_waiting(&format!("🔍 Fetching dependencies ({})", query));
    }

    /// Shared handle to the dependency source for fetches on spawned tasks
    pub fn shared_source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ChartOption;
    use crate::graph_building::domain::View;
    use crate::ports::outbound::{ChartFormatter, OutputPresenter, SurfaceSize};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::sync::Mutex;

    struct StaticSource {
        records: Vec<EdgeRecord>,
        queries: Mutex<Vec<GraphQuery>>,
    }

    impl StaticSource {
        fn new(records: Vec<EdgeRecord>) -> Self {
            Self {
                records,
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DependencySource for StaticSource {
        async fn fetch_edges(&self, query: &GraphQuery) -> Result<Vec<EdgeRecord>> {
            self.queries.lock().unwrap().push(*query);
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DependencySource for FailingSource {
        async fn fetch_edges(&self, _query: &GraphQuery) -> Result<Vec<EdgeRecord>> {
            anyhow::bail!("connection refused")
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        errors: RefCell<Vec<String>>,
        completions: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, _message: &str) {}
        fn report_waiting(&self, _message: &str) {}
        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, message: &str) {
            self.completions.borrow_mut().push(message.to_string());
        }
    }

    struct NodeCountFormatter;

    impl ChartFormatter for NodeCountFormatter {
        fn format(&self, option: &ChartOption, _surface: SurfaceSize) -> Result<String> {
            Ok(option.series[0].data.len().to_string())
        }
    }

    struct NullPresenter;

    impl OutputPresenter for NullPresenter {
        fn present(&self, _content: &str) -> Result<()> {
            Ok(())
        }
    }

    fn context() -> RenderContext {
        RenderContext::new(
            Box::new(NodeCountFormatter),
            Box::new(NullPresenter),
            SurfaceSize::default(),
        )
    }

    #[tokio::test]
    async fn test_execute_renders_graph() {
        let source = StaticSource::new(vec![EdgeRecord::new("A", "B", Some(2), Some(5), Some(1))]);
        let use_case =
            UpdateGraphUseCase::new(source, RecordingReporter::default(), ChartSettings::default());
        let mut context = context();
        let query = GraphQuery::new(10, View::Debian);

        let outcome = use_case.execute(&query, &mut context).await.unwrap();

        assert_eq!(outcome, UpdateOutcome::Rendered { nodes: 2, links: 1 });
        assert_eq!(context.render_count(), 1);
        assert_eq!(
            use_case.shared_source().queries.lock().unwrap().as_slice(),
            &[query]
        );
        assert_eq!(use_case.progress_reporter().completions.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_empty_dataset_skips_render() {
        let use_case = UpdateGraphUseCase::new(
            StaticSource::new(vec![]),
            RecordingReporter::default(),
            ChartSettings::default(),
        );
        let mut context = context();

        let outcome = use_case
            .execute(&GraphQuery::default(), &mut context)
            .await
            .unwrap();

        assert_eq!(outcome, UpdateOutcome::Skipped(SkipReason::EmptyDataset));
        assert_eq!(context.render_count(), 0);
        assert!(context.current().is_none());
        let errors = use_case.progress_reporter().errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("No nodes generated from data"));
    }

    #[tokio::test]
    async fn test_empty_dataset_keeps_previous_chart() {
        let use_case = UpdateGraphUseCase::new(
            StaticSource::new(vec![]),
            RecordingReporter::default(),
            ChartSettings::default(),
        );
        let mut context = context();
        let query = GraphQuery::default();

        let records = vec![EdgeRecord::new("a", "b", Some(1), Some(1), Some(1))];
        use_case.render(&query, &records, &mut context).unwrap();
        let outcome = use_case.render(&query, &[], &mut context).unwrap();

        assert!(!outcome.is_rendered());
        assert_eq!(context.render_count(), 1);
        assert_eq!(context.current().unwrap().series[0].data.len(), 2);
    }

    #[tokio::test]
    async fn test_execute_propagates_fetch_error() {
        let use_case = UpdateGraphUseCase::new(
            FailingSource,
            RecordingReporter::default(),
            ChartSettings::default(),
        );
        let mut context = context();

        let result = use_case.execute(&GraphQuery::default(), &mut context).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("connection refused"));
        assert_eq!(context.render_count(), 0);
    }
}
