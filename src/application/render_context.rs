use crate::application::read_models::ChartOption;
use crate::ports::outbound::{ChartFormatter, OutputPresenter, SurfaceSize};
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// RenderContext - the explicitly owned render surface
///
/// Created once and passed by `&mut` to every update. It owns the formatter
/// and presenter, the surface size, and the last applied option, so a
/// resize can re-lay out the current chart without refetching.
pub struct RenderContext {
    formatter: Box<dyn ChartFormatter>,
    presenter: Box<dyn OutputPresenter>,
    surface: SurfaceSize,
    current: Option<ChartOption>,
    render_count: usize,
    last_rendered_at: Option<DateTime<Utc>>,
}

impl RenderContext {
    pub fn new(
        formatter: Box<dyn ChartFormatter>,
        presenter: Box<dyn OutputPresenter>,
        surface: SurfaceSize,
    ) -> Self {
        Self {
            formatter,
            presenter,
            surface,
            current: None,
            render_count: 0,
            last_rendered_at: None,
        }
    }

    /// Formats and presents `option`, replacing whatever was shown before
    ///
    /// # Errors
    /// Returns an error if formatting or presenting fails; the previous
    /// option stays current in that case.
    pub fn apply(&mut self, option: ChartOption) -> Result<()> {
        self.present(&option)?;
        self.current = Some(option);
        Ok(())
    }

    /// Changes the surface size and re-presents the current chart
    ///
    /// # Returns
    /// `true` if a chart was re-rendered, `false` if nothing has been
    /// applied yet (the new size is still kept for the first render)
    pub fn resize(&mut self, surface: SurfaceSize) -> Result<bool> {
        self.surface = surface;
        match self.current.take() {
            Some(option) => {
                let result = self.present(&option);
                self.current = Some(option);
                result.map(|_| true)
            }
            None => Ok(false),
        }
    }

    pub fn current(&self) -> Option<&ChartOption> {
        self.current.as_ref()
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn last_rendered_at(&self) -> Option<DateTime<Utc>> {
        self.last_rendered_at
    }

    fn present(&mut self, option: &ChartOption) -> Result<()> {
        let content = self.formatter.format(option, self.surface)?;
        self.presenter.present(&content)?;
        self.render_count += 1;
        self.last_rendered_at = Some(Utc::now());
        tracing::debug!(
            render = self.render_count,
            width = self.surface.width,
            height = self.surface.height,
            "chart presented"
        );
        Ok(())
    }
}
