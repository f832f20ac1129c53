//! # Realty Dashboard
//!
//! Dashboard for precomputed real-estate statistics served by a remote HTTP
//! API: affordable places, property type price comparisons and block values,
//! each shown as a table.
//!
//! ## Modules
//!
//! - [`api`]: Typed client for the statistics API
//! - [`loader`]: Fetch lifecycle state, one fetch per activation
//! - [`views`]: One view per report, rendering a loader's state
//! - [`shell`]: Route table and HTML page server
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use realty_dashboard::{Config, ReportClient, Route, Shell};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let client = ReportClient::new(config.api.client_config())?;
//!     let shell = Shell::new(Arc::new(client));
//!
//!     let rendered = shell.render_page(Route::TopAffordablePlaces).await;
//!     print!("{}", rendered.to_text());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod loader;
pub mod shell;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{
    AffordablePlace, BlockValue, ClientConfig, FetchError, FetchResult, PropertyTypeStat,
    ReportClient, ReportSource, Resource,
};

pub use loader::{FetchState, Loader, LoaderState};

pub use views::{
    BlockValuesView, PropertyTypeComparisonView, Rendered, Table, TopAffordablePlacesView, View,
};

pub use shell::{build_router, serve, serve_with_shutdown, Route, Shell, ShellError};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, ServerConfig};
