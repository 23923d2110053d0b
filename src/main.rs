mod cli;

use cli::{Args, DEFAULT_BASE_URL};
use gym_console::adapters::outbound::console::{
    QuietProgressReporter, StderrProgressReporter, StdoutPresenter,
};
use gym_console::adapters::outbound::network::{HttpResourceFetcher, DEFAULT_TIMEOUT_SECS};
use gym_console::adapters::outbound::session::{EnvCredentialProvider, StaticCredentialProvider};
use gym_console::application::dto::{RefreshRequest, ScreenView};
use gym_console::application::factories::FormatterFactory;
use gym_console::application::profiles::ScreenCatalog;
use gym_console::application::use_cases::RefreshScreenUseCase;
use gym_console::application::LatestViews;
use gym_console::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use gym_console::ports::inbound::ScreenRefreshPort;
use gym_console::ports::outbound::{
    CredentialProvider, OutputPresenter, ProgressReporter, ViewFormatter,
};
use gym_console::shared::error::ExitCode;
use gym_console::shared::Result;
use std::io::IsTerminal;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    // Load configuration (explicit path, or auto-discovered in the working directory)
    let config = load_config(&args)?;
    let settings = config.engine_settings()?;

    // Create adapters (Dependency Injection)
    let fetcher = HttpResourceFetcher::new(&base_url(&args, &config), timeout(&config))?;
    let credential_provider: Box<dyn CredentialProvider> = match args.token.clone() {
        Some(token) => Box::new(StaticCredentialProvider::new(Some(token))),
        None => Box::new(EnvCredentialProvider::new()),
    };
    let progress_reporter: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(QuietProgressReporter)
    } else {
        Box::new(StderrProgressReporter::new())
    };

    let use_case = RefreshScreenUseCase::new(
        fetcher,
        credential_provider,
        progress_reporter,
        ScreenCatalog::new(settings),
    );

    let formatter = FormatterFactory::create(args.format, std::io::stdout().is_terminal());
    let presenter = StdoutPresenter::new();
    let request = args.refresh_request();

    let runtime = tokio::runtime::Runtime::new()?;
    match args.watch {
        None => runtime.block_on(async {
            let view = use_case.execute(request).await;
            presenter.present(&formatter.format(&view)?)?;
            Ok::<_, anyhow::Error>(exit_code_for(&view))
        }),
        Some(seconds) => runtime.block_on(watch(
            Arc::new(use_case),
            request,
            Duration::from_secs(seconds),
            args.max_cycles,
            formatter.as_ref(),
            &presenter,
        )),
    }
}

/// Explicit --config path, else `gym-console.config.yml` in the working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        let config = load_config_from_path(path)?;
        if !args.quiet {
            eprintln!("📄 Loaded config from: {}", path.display());
        }
        return Ok(config);
    }

    let dir = std::env::current_dir()?;
    match discover_config(&dir)? {
        Some(config) => {
            if !args.quiet {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    dir.join(CONFIG_FILENAME).display()
                );
            }
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// CLI flag, then config file, then the built-in default
fn base_url(args: &Args, config: &ConfigFile) -> String {
    args.base_url
        .clone()
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn timeout(config: &ConfigFile) -> Duration {
    Duration::from_secs(config.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS))
}

fn exit_code_for(view: &ScreenView) -> ExitCode {
    if view.has_failures() {
        ExitCode::PartialData
    } else {
        ExitCode::Success
    }
}

/// Starts a refresh cycle every `interval` and presents each accepted view.
///
/// Cycles are never cancelled; a cycle that finishes after a newer one has
/// started is discarded by `LatestViews`.
async fn watch<P>(
    port: Arc<P>,
    request: RefreshRequest,
    interval: Duration,
    max_cycles: Option<u64>,
    formatter: &dyn ViewFormatter,
    presenter: &dyn OutputPresenter,
) -> Result<ExitCode>
where
    P: ScreenRefreshPort + 'static,
{
    let views = Arc::new(LatestViews::new());
    let mut ticker = tokio::time::interval(interval);
    let mut in_flight = JoinSet::new();
    let mut started = 0u64;
    let mut exit_code = ExitCode::Success;

    loop {
        let may_start = max_cycles.map_or(true, |max| started < max);

        tokio::select! {
            _ = ticker.tick(), if may_start => {
                started += 1;
                let ticket = views.begin(request.screen);
                let port = Arc::clone(&port);
                let views = Arc::clone(&views);
                let request = request.clone();
                in_flight.spawn(async move {
                    let view = port.refresh(request).await;
                    views.complete(ticket, view.clone()).then_some(view)
                });
            }
            Some(joined) = in_flight.join_next() => {
                if let Some(view) = joined? {
                    presenter.present(&formatter.format(&view)?)?;
                    exit_code = exit_code_for(&view);
                }
            }
            else => break,
        }
    }

    Ok(exit_code)
}
