use clap::Parser;
use login_demo::config;
use login_demo::server;
use tracing_subscriber::EnvFilter;

/// Single-page login demonstration service.
#[derive(Parser)]
#[command(name = "login-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address (overrides the LISTEN environment variable).
    #[arg(long)]
    listen: Option<String>,

    /// Enable debug logging regardless of RUST_LOG.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if cli.debug {
        config.log_level = "debug".to_string();
    }
    config.validate()?;

    init_tracing(&config.log_level, &config.log_format, cli.debug);
    config.print_summary();

    server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `--debug` wins over everything; otherwise `RUST_LOG` takes precedence
/// when set, falling back to the configured level. `LOG_FORMAT=json`
/// switches to structured JSON output.
fn init_tracing(log_level: &str, log_format: &str, force_debug: bool) {
    let filter = if force_debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    if log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
