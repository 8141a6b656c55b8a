use anyhow::Result;
use clap::Parser;
use shorthand::config;
use shorthand::server;
use tracing_subscriber::EnvFilter;

/// Per-account URL shorthand service.
#[derive(Parser)]
#[command(name = "shorthand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides LISTEN
    #[arg(short, long)]
    listen: Option<String>,

    /// Log format (`text` or `json`), overrides LOG_FORMAT
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config.validate()?;

    init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
