//! Statistics API Access
//!
//! Typed client for the real-estate statistics REST API.
//!
//! # Endpoints
//!
//! - `GET /block-values` - `block_values`: opaque block records
//! - `GET /top-affordable-places` - `top_affordable_places`
//! - `GET /property-type-comparison` - `property_type_comparison`
//! - `GET /price-distribution-comparison` - raw JSON
//! - `GET /cheapest-areas` - raw JSON
//!
//! # Example
//!
//! ```rust,no_run
//! use realty_dashboard::api::{ClientConfig, ReportClient, ReportSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReportClient::new(ClientConfig::new("http://127.0.0.1:8000"))?;
//!
//!     for place in client.top_affordable_places().await? {
//!         println!("{}: {}", place.place_name, place.avg_price);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dto;
pub mod error;
pub mod resource;

pub use client::{ClientConfig, ReportClient, ReportSource, DEFAULT_API_BASE};
pub use dto::{AffordablePlace, BlockValue, PropertyTypeStat};
pub use error::{FetchError, FetchResult};
pub use resource::Resource;
