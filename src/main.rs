//! Realty Dashboard CLI
//!
//! Serve the dashboard pages, or render a single page in the terminal.
//!
//! # Configuration
//!
//! Environment variables:
//! - `REALTY_API_URL`: Statistics API base URL (default: http://127.0.0.1:8000)
//! - `REALTY_HOST`: Host to bind to (default: 127.0.0.1)
//! - `REALTY_PORT`: Port to listen on (default: 3000)
//! - `REALTY_LOG_LEVEL`, `REALTY_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use realty_dashboard::config::{generate_default_config, Config, LoggingConfig};
use realty_dashboard::shell::page;
use realty_dashboard::{serve, Rendered, ReportClient, Resource, Route, Shell};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "realty-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard for real-estate statistics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Statistics API base URL (overrides config and REALTY_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard pages over HTTP
    Serve,

    /// Render one page to stdout
    Show {
        /// Page path, e.g. / or /top-affordable-places
        #[arg(default_value = "/")]
        path: String,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the raw JSON body of a report resource
    Fetch {
        /// Resource path, e.g. cheapest-areas
        resource: String,
    },

    /// List page routes
    Routes,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Html,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Serve => {
            tracing::info!(
                "Starting Realty Dashboard v{} (API: {})",
                env!("CARGO_PKG_VERSION"),
                config.api.base_url
            );
            let shell = build_shell(&config)?;
            serve(shell, &config.server).await?;
        }

        Commands::Show { path, format } => {
            let shell = build_shell(&config)?;
            let route = match Route::from_path(&path) {
                Some(route) => route,
                None => {
                    eprintln!("No page at {}", path);
                    eprintln!("Run `realty-dashboard routes` to list pages.");
                    std::process::exit(1);
                }
            };

            let rendered = shell.render_page(route).await;
            match format {
                OutputFormat::Table => print!("{}", rendered.to_text()),
                OutputFormat::Html => print!("{}", page::view_page(route, &rendered)),
            }

            if matches!(rendered, Rendered::Error(_)) {
                std::process::exit(1);
            }
        }

        Commands::Fetch { resource } => {
            let resource = match Resource::from_path(&resource) {
                Some(r) => r,
                None => {
                    eprintln!("Unknown resource: {}", resource);
                    eprintln!("Available:");
                    for r in Resource::ALL {
                        eprintln!("  {}", r);
                    }
                    std::process::exit(1);
                }
            };

            let client = ReportClient::new(config.api.client_config())?;
            let body = client
                .fetch_raw(resource)
                .await
                .with_context(|| format!("fetching {}", client.url(resource)))?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }

        Commands::Routes => {
            println!("{:<28} {}", "Path", "Page");
            println!("{}", "-".repeat(54));
            for route in Route::ALL {
                println!("{:<28} {}", route.path(), route.label());
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn build_shell(config: &Config) -> anyhow::Result<Shell> {
    let client = ReportClient::new(config.api.client_config())?;
    Ok(Shell::new(Arc::new(client)))
}

/// Initialize tracing. Logs go to stderr so page output stays clean.
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("realty_dashboard={},tower_http={}", logging.level, logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
