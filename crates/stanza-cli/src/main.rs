use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stanza_acquire::SiteConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stanza")]
#[command(about = "Scrape a poet's poems from the web into a CSV file")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every poem linked from each poet's page and write {poet}.csv
    Harvest {
        /// Poet display names (e.g., "Walt Whitman"); each one is a separate run
        #[arg(required = true)]
        poets: Vec<String>,

        /// JSON site config overriding the default markers (see `stanza config`)
        #[arg(short, long)]
        site_config: Option<PathBuf>,

        /// Site root to scrape instead of the configured one
        #[arg(long)]
        base_url: Option<String>,

        /// Per-request timeout in seconds (0 disables the timeout)
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Directory to write CSV files into
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Print the default site config as JSON
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the URL path segment (and CSV file stem) for a poet name
    Slug {
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Harvest {
            poets,
            site_config,
            base_url,
            timeout_secs,
            output_dir,
        } => {
            let mut config = match &site_config {
                Some(path) => SiteConfig::from_file(path)?,
                None => SiteConfig::default(),
            };
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            if let Some(secs) = timeout_secs {
                config.timeout_secs = Some(secs);
            }

            for poet in &poets {
                tracing::info!(poet = %poet, base_url = %config.base_url, "Harvesting poems");
                let report = stanza_acquire::harvest(poet, config.clone(), &output_dir)
                    .await
                    .with_context(|| format!("Harvest failed for {poet}"))?;
                tracing::info!(path = %report.path.display(), rows = report.rows, "{report}");
            }
        }
        Commands::Config { output } => {
            let json = serde_json::to_string_pretty(&SiteConfig::default())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "Wrote default site config");
                }
                None => println!("{json}"),
            }
        }
        Commands::Slug { name } => {
            println!("{}", stanza_model::poet_slug(&name));
        }
    }

    Ok(())
}
