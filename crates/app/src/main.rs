mod telemetry;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ApiConfig, AppServices, Clock, ConfigError, RoadmapGenerator, parse_timeout_secs};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String, source: ConfigError },
    InvalidTimeout { raw: String },
    Env(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw, source } => {
                write!(f, "invalid --api-url value: {raw} ({source})")
            }
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout value: {raw}"),
            ArgsError::Env(err) => write!(f, "invalid environment: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn roadmaps(&self) -> Arc<dyn RoadmapGenerator> {
        self.services.roadmaps()
    }

    fn api_base_url(&self) -> String {
        self.services.config().base_url.to_string()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--timeout <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", ApiConfig::DEFAULT_BASE_URL);
    eprintln!("  --timeout {}", ApiConfig::DEFAULT_TIMEOUT.as_secs());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ROADMAP_API_BASE_URL, ROADMAP_API_TIMEOUT_SECS, LOG_LEVEL, LOG_FORMAT");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(ApiConfig),
    Help,
}

/// Flags override whatever `base` was loaded from the environment.
fn parse_args(
    base: ApiConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Parsed, ArgsError> {
    let mut config = base;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                let timeout = config.timeout;
                config = ApiConfig::new(&value)
                    .map_err(|source| ArgsError::InvalidApiUrl {
                        raw: value.clone(),
                        source,
                    })?
                    .with_timeout(timeout);
            }
            "--timeout" => {
                let value = require_value(args, "--timeout")?;
                let timeout: Duration = parse_timeout_secs(&value)
                    .map_err(|_| ArgsError::InvalidTimeout { raw: value.clone() })?;
                config = config.with_timeout(timeout);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Parsed::Run(config))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env_config = ApiConfig::from_env().map_err(ArgsError::Env)?;
    let mut argv = std::env::args().skip(1);
    let config = match parse_args(env_config, &mut argv) {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "starting roadmap planner"
    );

    let services = AppServices::new(config, Clock::system())?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups on macOS.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Roadmap Planner")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

// Launching inside the runtime keeps reqwest and tokio timers usable from UI tasks.
#[tokio::main]
async fn main() {
    telemetry::init_tracing();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
