mod app_state;
mod cli;
mod headless;
mod surface;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use starfield_common::{ConfigError, Result, StarfieldError};
use starfield_config::StarfieldConfig;

/// Filter used when neither the CLI nor the config names a valid one.
const DEFAULT_LOG_DIRECTIVE: &str = "starfield=info";

fn init_logging(directive: &str) -> bool {
    let (filter, valid) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_DIRECTIVE), false),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    valid
}

fn load_config(path: Option<&str>) -> std::result::Result<StarfieldConfig, ConfigError> {
    match path {
        Some(path) => starfield_config::load_config_from(Path::new(path)),
        None => starfield_config::load_config(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter; problems
    // are reported once logging is up.
    let loaded = load_config(args.config.as_deref());

    let directive = args
        .log_level
        .clone()
        .or_else(|| {
            loaded
                .as_ref()
                .ok()
                .map(|c| c.logging.level.directive().to_string())
        })
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    if !init_logging(&directive) {
        tracing::warn!("Invalid log filter {directive:?}, using {DEFAULT_LOG_DIRECTIVE}");
    }

    tracing::info!("Starfield v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        StarfieldConfig::default()
    });
    if let Some(seed) = args.seed {
        config.particles.seed = Some(seed);
    }
    tracing::info!(
        "Config loaded ({}x{}, bloom={})",
        config.window.width,
        config.window.height,
        config.bloom.enabled,
    );

    match run(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args, config: StarfieldConfig) -> Result<()> {
    if args.print_config {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", starfield_config::config_to_json(&config))?;
        return Ok(());
    }

    if let Some(ticks) = args.headless {
        tracing::info!("Running {ticks} headless ticks");
        let summary = headless::run(config.particles.seed, ticks);
        let json = serde_json::to_string(&summary)
            .map_err(|e| StarfieldError::Other(format!("headless summary: {e}")))?;
        tracing::info!("Headless summary: {json}");
        return Ok(());
    }

    let event_loop = EventLoop::new().map_err(|e| StarfieldError::EventLoop(e.to_string()))?;
    let mut app = app_state::StarfieldApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| StarfieldError::EventLoop(e.to_string()))?;
    if let Some(e) = app.take_init_error() {
        return Err(e);
    }
    tracing::info!("Shutdown complete");
    Ok(())
}
