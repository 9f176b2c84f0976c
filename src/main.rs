//! CareerCraft BI CLI
//!
//! Command-line interface for dashboard snapshots:
//! - Check a snapshot against the dashboard's invariants
//! - Render the dashboard in the terminal or as JSON
//! - List the navigation table
//! - Generate a default config file

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use careercraft_bi::config::{generate_default_config, Config, ConfigOrigin, LoggingConfig};
use careercraft_bi::routes::{BRAND, HEADER_TITLE, ROUTES};
use careercraft_bi::view::render_screen;
use careercraft_bi::{source_for, DashboardLoader, LoadState, Screen, ViewLifetime};

#[derive(Parser)]
#[command(name = "careercraft-bi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Instagram conversation analytics dashboard")]
#[command(long_about = "CareerCraft BI renders pre-aggregated Instagram conversation metrics.\nCheck snapshot files, preview the dashboard, and inspect navigation.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load, validate and cross-check a snapshot
    Check {
        /// File path or http(s) URL (default: configured snapshot location)
        source: Option<String>,
    },

    /// Render the dashboard screen
    Render {
        /// File path or http(s) URL (default: configured snapshot location)
        source: Option<String>,
    },

    /// Show the navigation table
    Routes,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, origin) = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            (config, ConfigOrigin::File(path.clone()))
        }
        None => Config::load_default(),
    };
    init_logging(&config.logging);
    origin.log();

    match cli.command {
        Commands::Check { source } => {
            let state = load(&config, source).await;
            let ok = report_check(&state, cli.format)?;
            if !ok {
                std::process::exit(1);
            }
        }

        Commands::Render { source } => {
            let state = load(&config, source).await;
            let screen = Screen::from_state(&state);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&screen)?),
                OutputFormat::Table => {
                    println!("{} | {}", BRAND, HEADER_TITLE);
                    println!("Gerado em {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
                    println!();
                    print!("{}", render_screen(&screen));
                }
            }

            if state.failure().is_some() {
                std::process::exit(1);
            }
        }

        Commands::Routes => match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ROUTES)?),
            OutputFormat::Table => {
                println!("{:<24} {:<26} {}", "PATH", "LABEL", "VIEW");
                for route in ROUTES {
                    let view = if route.fetches_snapshot() { "dashboard" } else { "placeholder" };
                    println!(
                        "{:<24} {} {:<24} {}",
                        route.path,
                        route.icon.glyph(),
                        route.label,
                        view
                    );
                }
            }
        },

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Read the snapshot once through the configured or given source
async fn load(config: &Config, source: Option<String>) -> LoadState {
    let location = source.unwrap_or_else(|| config.data.snapshot_location.clone());
    let source = source_for(&location);
    let loader = DashboardLoader::new().rate_tolerance(config.data.rate_tolerance);

    loader
        .load(source.as_ref(), &ViewLifetime::new())
        .await
        .unwrap_or_default()
}

/// Print the outcome of `check`; returns whether the snapshot was accepted
fn report_check(state: &LoadState, format: OutputFormat) -> anyhow::Result<bool> {
    match (state, format) {
        (LoadState::Ready(loaded), OutputFormat::Json) => {
            let body = serde_json::json!({ "ok": true, "warnings": loaded.warnings });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(true)
        }
        (LoadState::Ready(loaded), OutputFormat::Table) => {
            let stats = &loaded.snapshot.stats;
            println!(
                "Snapshot OK: {} conversations, {} buckets, {} attachment types, {} content types, {} pain points",
                stats.total_conversations,
                loaded.snapshot.conversion_data.len(),
                loaded.snapshot.attachment_data.len(),
                loaded.snapshot.effectiveness_data.len(),
                loaded.snapshot.pain_points_data.len(),
            );
            for warning in &loaded.warnings {
                println!("warning: {}", warning);
            }
            Ok(true)
        }
        (LoadState::Error(failure), OutputFormat::Json) => {
            let body = serde_json::json!({ "ok": false, "error": failure.to_string() });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(false)
        }
        (LoadState::Error(failure), OutputFormat::Table) => {
            eprintln!("Snapshot rejected: {}", failure);
            Ok(false)
        }
        (LoadState::Loading, _) => Ok(false),
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
