mod cli;

use clap::Parser;
use cli::Args;
use depgraph_view::adapters::inbound::ControlSession;
use depgraph_view::adapters::outbound::console::StderrProgressReporter;
use depgraph_view::adapters::outbound::network::{
    CachingDependencySource, HttpDependencySource, DEFAULT_ENDPOINT,
};
use depgraph_view::application::dto::{
    ChartSettings, ForceLayout, OutputFormat, UpdateOutcome, DEFAULT_MAX_NODE_SIZE, DEFAULT_TITLE,
};
use depgraph_view::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use depgraph_view::application::render_context::RenderContext;
use depgraph_view::application::use_cases::UpdateGraphUseCase;
use depgraph_view::config::{self, ConfigFile};
use depgraph_view::graph_building::domain::query::DEFAULT_MIN_COUNT;
use depgraph_view::graph_building::domain::GraphQuery;
use depgraph_view::graph_building::policies::NodeSizing;
use depgraph_view::ports::outbound::{DependencySource, ProgressReporter, SurfaceSize};
use depgraph_view::shared::error::{ExitCode, GraphError};
use depgraph_view::shared::Result;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse();
    init_logging(&args);

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            let code = exit_code_for(&e);
            // The reporter has already printed the empty-dataset notice
            if code != ExitCode::EmptyDataset {
                eprintln!("\n❌ An error occurred:\n");
                eprintln!("{}", e);

                // Display error chain
                let mut source = e.source();
                while let Some(err) = source {
                    eprintln!("\nCaused by: {}", err);
                    source = err.source();
                }

                eprintln!();
            }
            code
        }
    };

    process::exit(exit_code.as_i32());
}

/// Diagnostics go to stderr; `RUST_LOG` takes precedence over `-v`/`-q`
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<GraphError>() {
        Some(GraphError::EmptyDataset { .. }) => ExitCode::EmptyDataset,
        _ => ExitCode::ApplicationError,
    }
}

/// Everything a run needs, after merging CLI options over the config file
#[derive(Debug)]
struct RunOptions {
    endpoint: String,
    query: GraphQuery,
    format: OutputFormat,
    output: Option<PathBuf>,
    settings: ChartSettings,
    surface: SurfaceSize,
    cache: bool,
    timeout: Option<Duration>,
    interactive: bool,
}

impl RunOptions {
    /// Precedence: CLI > config file > defaults
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let view = match args.view {
            Some(view) => view,
            None => config
                .view
                .as_ref()
                .map(|view| view.resolve())
                .transpose()?
                .unwrap_or_default(),
        };
        let query = GraphQuery::new(
            args.min_count
                .or(config.min_count)
                .unwrap_or(DEFAULT_MIN_COUNT),
            view,
        );

        let format = match args.format {
            Some(format) => format,
            None => config
                .format
                .as_deref()
                .map(OutputFormat::from_str)
                .transpose()
                .map_err(anyhow::Error::msg)?
                .unwrap_or_default(),
        };

        let sizing = match args.sizing {
            Some(sizing) => sizing,
            None => config
                .sizing
                .as_deref()
                .map(NodeSizing::from_str)
                .transpose()
                .map_err(anyhow::Error::msg)?
                .unwrap_or_default(),
        };

        let defaults = ForceLayout::default();
        let overrides = config.layout.unwrap_or_default();
        let layout = ForceLayout {
            repulsion: overrides.repulsion.unwrap_or(defaults.repulsion),
            edge_length: overrides.edge_length.unwrap_or(defaults.edge_length),
            gravity: overrides.gravity.unwrap_or(defaults.gravity),
            friction: overrides.friction.unwrap_or(defaults.friction),
        };

        let settings = ChartSettings {
            title: args
                .title
                .clone()
                .or(config.title)
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            layout,
            max_node_size: args
                .max_node_size
                .or(config.max_node_size)
                .unwrap_or(DEFAULT_MAX_NODE_SIZE),
            sizing,
            ..ChartSettings::default()
        };
        settings.validate()?;

        let default_surface = SurfaceSize::default();
        let surface = SurfaceSize::new(
            args.width.or(config.width).unwrap_or(default_surface.width),
            args.height.or(config.height).unwrap_or(default_surface.height),
        );

        Ok(Self {
            endpoint: args
                .endpoint
                .clone()
                .or(config.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            query,
            format,
            output: args.output.clone().or(config.output),
            settings,
            surface,
            cache: args.cache || config.cache.unwrap_or(false),
            timeout: args
                .timeout
                .or(config.timeout_secs)
                .map(Duration::from_secs),
            interactive: args.interactive,
        })
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let config = load_config(&args, &progress_reporter)?;
    let options = RunOptions::resolve(&args, config)?;
    tracing::debug!(?options, "resolved options");

    let source = HttpDependencySource::new(&options.endpoint, options.timeout)?;
    if options.cache {
        drive(CachingDependencySource::new(source), progress_reporter, options).await
    } else {
        drive(source, progress_reporter, options).await
    }
}

fn load_config(args: &Args, progress_reporter: &StderrProgressReporter) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        let config = config::load_config_from_path(path)?;
        progress_reporter.report(&format!("📄 Loaded config from: {}", path.display()));
        return Ok(config);
    }

    let cwd = std::env::current_dir()?;
    match config::discover_config(&cwd)? {
        Some(config) => {
            progress_reporter.report(&format!(
                "📄 Auto-discovered config file: {}",
                cwd.join(config::CONFIG_FILENAME).display()
            ));
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Runs one update, or the interactive session, against the given source
async fn drive<S>(
    source: S,
    progress_reporter: StderrProgressReporter,
    options: RunOptions,
) -> Result<ExitCode>
where
    S: DependencySource + 'static,
{
    progress_reporter.report(FormatterFactory::progress_message(options.format));

    // Create output context using factories
    let mut context = RenderContext::new(
        FormatterFactory::create(options.format),
        PresenterFactory::create(PresenterType::from_output(options.output)),
        options.surface,
    );

    // Create use case with injected dependencies
    let use_case = UpdateGraphUseCase::new(source, progress_reporter, options.settings);

    if options.interactive {
        let input = tokio::io::BufReader::new(tokio::io::stdin());
        ControlSession::new(use_case, options.query)
            .run(input, &mut context)
            .await?;
        return Ok(ExitCode::Success);
    }

    match use_case.execute(&options.query, &mut context).await? {
        UpdateOutcome::Rendered { .. } => Ok(ExitCode::Success),
        UpdateOutcome::Skipped(_) => Err(GraphError::EmptyDataset {
            min_count: options.query.min_count,
            view: options.query.view.to_string(),
        }
        .into()),
    }
}
