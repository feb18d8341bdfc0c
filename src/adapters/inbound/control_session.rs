use crate::application::dto::{SkipReason, UpdateOutcome};
use crate::application::render_context::RenderContext;
use crate::application::request_sequencer::{RequestSequencer, Ticket};
use crate::application::use_cases::UpdateGraphUseCase;
use crate::graph_building::domain::{EdgeRecord, GraphQuery, View};
use crate::ports::outbound::{DependencySource, ProgressReporter, SurfaceSize};
use crate::shared::Result;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// One line of user input in the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// `min <n>`: minimum dependency count filter
    MinCount(i64),
    /// `view <id|name>`: dataset variant
    View(View),
    /// `resize <w>x<h>`: re-lay out the render surface
    Resize(SurfaceSize),
    /// `show`: print the current query
    Show,
    /// `quit`: leave immediately
    Quit,
}

impl FromStr for ControlEvent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let line = s.trim();
        let separator = |c: char| c.is_whitespace() || c == '=';
        let (command, argument) = match line.split_once(separator) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match (command.to_lowercase().as_str(), argument) {
            ("min" | "min_count" | "min-count", arg) if !arg.is_empty() => arg
                .parse::<i64>()
                .map(ControlEvent::MinCount)
                .map_err(|_| format!("Invalid minimum count: {}", arg)),
            ("view", arg) if !arg.is_empty() => View::from_str(arg)
                .map(ControlEvent::View)
                .map_err(|e| e.to_string()),
            ("resize", arg) => Self::parse_size(arg).map(ControlEvent::Resize),
            ("show", "") => Ok(ControlEvent::Show),
            ("quit" | "exit" | "q", "") => Ok(ControlEvent::Quit),
            _ => Err(format!(
                "Unknown command: {}. Try 'min <n>', 'view <1-5|name>', \
                 'resize <w>x<h>', 'show' or 'quit'",
                line
            )),
        }
    }
}

impl ControlEvent {
    fn parse_size(argument: &str) -> std::result::Result<SurfaceSize, String> {
        let invalid = || format!("Invalid size: '{}'. Expected <width>x<height>", argument);
        let (width, height) = argument
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(SurfaceSize::new(width, height))
    }
}

/// Counters for what happened to the responses of one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rendered: usize,
    pub skipped_empty: usize,
    /// Responses dropped because a newer update had been triggered
    pub discarded: usize,
    pub failed: usize,
}

/// A fetch that finished on a spawned task
struct FetchCompletion {
    ticket: Ticket,
    query: GraphQuery,
    result: Result<Vec<EdgeRecord>>,
}

enum Flow {
    Continue,
    Quit,
}

/// ControlSession - interactive driver for repeated graph updates
///
/// Every `min`/`view` change triggers a fetch on a spawned task. Completed
/// fetches come back over a channel to the session loop, which is the only
/// place the render context is touched. The request sequencer ensures a slow
/// response to an older trigger never replaces a newer chart.
pub struct ControlSession<S, PR> {
    use_case: UpdateGraphUseCase<S, PR>,
    sequencer: RequestSequencer,
    query: GraphQuery,
    settled: Option<Ticket>,
    summary: SessionSummary,
}

impl<S, PR> ControlSession<S, PR>
where
    S: DependencySource + 'static,
    PR: ProgressReporter,
{
    pub fn new(use_case: UpdateGraphUseCase<S, PR>, initial_query: GraphQuery) -> Self {
        Self {
            use_case,
            sequencer: RequestSequencer::new(),
            query: initial_query,
            settled: None,
            summary: SessionSummary::default(),
        }
    }

    /// Renders the initial query, then processes control events from `input`
    ///
    /// Ends on `quit`, or on end of input once the latest update has settled.
    ///
    /// # Errors
    /// Only failures to read `input` end the session with an error; fetch and
    /// render failures are reported and the session continues.
    pub async fn run<R>(mut self, input: R, context: &mut RenderContext) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<FetchCompletion>();
        let mut segments = input.split(b'\n');
        let mut input_open = true;

        self.trigger(&tx);

        loop {
            if !input_open && !self.awaiting_latest() {
                break;
            }

            tokio::select! {
                segment = segments.next_segment(), if input_open => match segment? {
                    Some(bytes) => {
                        if let Flow::Quit = self.handle_segment(bytes, &tx, context) {
                            break;
                        }
                    }
                    None => {
                        tracing::debug!("control input closed");
                        input_open = false;
                    }
                },
                Some(completion) = rx.recv() => self.complete(completion, context),
            }
        }

        tracing::info!(
            rendered = self.summary.rendered,
            skipped = self.summary.skipped_empty,
            discarded = self.summary.discarded,
            failed = self.summary.failed,
            "control session finished"
        );
        Ok(self.summary)
    }

    fn awaiting_latest(&self) -> bool {
        self.sequencer.latest() != self.settled
    }

    /// Decodes one raw input line; undecodable lines are reported and skipped
    fn handle_segment(
        &mut self,
        bytes: Vec<u8>,
        tx: &mpsc::UnboundedSender<FetchCompletion>,
        context: &mut RenderContext,
    ) -> Flow {
        match String::from_utf8(bytes) {
            Ok(line) => self.handle_line(&line, tx, context),
            Err(e) => {
                tracing::debug!(error = %e, "undecodable control line");
                self.use_case
                    .progress_reporter()
                    .report_error("⚠️  Ignoring control line that is not valid UTF-8");
                Flow::Continue
            }
        }
    }

    fn handle_line(
        &mut self,
        line: &str,
        tx: &mpsc::UnboundedSender<FetchCompletion>,
        context: &mut RenderContext,
    ) -> Flow {
        if line.trim().is_empty() {
            return Flow::Continue;
        }

        let reporter = self.use_case.progress_reporter();
        let event = match ControlEvent::from_str(line) {
            Ok(event) => event,
            Err(message) => {
                reporter.report_error(&format!("⚠️  {}", message));
                return Flow::Continue;
            }
        };
        tracing::debug!(?event, "control event");

        match event {
            ControlEvent::MinCount(min_count) => {
                self.query = self.query.with_min_count(min_count);
                self.trigger(tx);
            }
            ControlEvent::View(view) => {
                self.query = self.query.with_view(view);
                self.trigger(tx);
            }
            ControlEvent::Resize(size) => match context.resize(size) {
                Ok(true) => reporter.report(&format!(
                    "↔️  Resized to {}x{}",
                    size.width, size.height
                )),
                Ok(false) => reporter.report(&format!(
                    "↔️  Surface set to {}x{}; nothing rendered yet",
                    size.width, size.height
                )),
                Err(e) => reporter.report_error(&format!("❌ Resize failed: {}", e)),
            },
            ControlEvent::Show => reporter.report(&format!("📌 Current query: {}", self.query)),
            ControlEvent::Quit => return Flow::Quit,
        }

        Flow::Continue
    }

    /// Issues a ticket for the current query and fetches it on a spawned task
    fn trigger(&self, tx: &mpsc::UnboundedSender<FetchCompletion>) {
        let ticket = self.sequencer.issue();
        let query = self.query;
        tracing::debug!(ticket = ticket.number(), %query, "update triggered");
        self.use_case.announce_fetch(&query);

        let source = self.use_case.shared_source();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_edges(&query).await;
            // The receiver is gone only after the session ended
            let _ = tx.send(FetchCompletion {
                ticket,
                query,
                result,
            });
        });
    }

    fn complete(&mut self, completion: FetchCompletion, context: &mut RenderContext) {
        let FetchCompletion {
            ticket,
            query,
            result,
        } = completion;

        if !self.sequencer.is_current(ticket) {
            tracing::debug!(ticket = ticket.number(), %query, "discarding stale response");
            self.summary.discarded += 1;
            return;
        }
        self.settled = Some(ticket);

        let reporter = self.use_case.progress_reporter();
        let records = match result {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(%query, error = %e, "fetch failed");
                reporter.report_error(&format!(
                    "❌ Failed to fetch dependencies ({}): {:#}",
                    query, e
                ));
                self.summary.failed += 1;
                return;
            }
        };

        match self.use_case.render(&query, &records, context) {
            Ok(UpdateOutcome::Rendered { .. }) => self.summary.rendered += 1,
            Ok(UpdateOutcome::Skipped(SkipReason::EmptyDataset)) => {
                self.summary.skipped_empty += 1
            }
            Ok(UpdateOutcome::Skipped(SkipReason::Superseded)) => {
                self.summary.discarded += 1
            }
            Err(e) => {
                tracing::error!(%query, error = %e, "render failed");
                reporter.report_error(&format!("❌ Failed to render ({}): {:#}", query, e));
                self.summary.failed += 1;
            }
        }
    }
}
