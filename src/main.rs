use anyhow::Result;
use schejzuren::commands::Cli;
use schejzuren::libs::config::Config;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "schejzuren=warn";
const DEBUG_LOG_FILTER: &str = "schejzuren=debug";

fn main() -> Result<()> {
    let fallback = if std::env::var("SCHEJZUREN_DEBUG").is_ok() {
        DEBUG_LOG_FILTER.to_string()
    } else {
        Config::read()
            .ok()
            .and_then(|config| config.log_filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with_writer(std::io::stderr)
        .init();

    Cli::menu()
}
