//! Report Views
//!
//! One view per report. Each view owns a [`Loader`](crate::loader::Loader)
//! bound to a single [`ReportSource`](crate::api::ReportSource) call, and
//! renders purely from the loader's [`FetchState`](crate::loader::FetchState):
//!
//! - Idle / Loading: placeholder
//! - Failure: the message as plain text, no table
//! - Success: a table with one row per record, in API order

pub mod affordable_places;
pub mod block_values;
pub mod property_types;
pub mod table;

pub use affordable_places::TopAffordablePlacesView;
pub use block_values::BlockValuesView;
pub use property_types::PropertyTypeComparisonView;
pub use table::{Rendered, Table, LOADING_TEXT};

use async_trait::async_trait;

use crate::shell::Route;

/// A mountable report view
#[async_trait]
pub trait View: Send + Sync {
    /// Route this view is mounted at
    fn route(&self) -> Route;

    /// Mount: start the fetch. Returns `false` if already mounted.
    fn activate(&self) -> bool;

    /// Unmount: discard state and any in-flight result
    fn deactivate(&self);

    /// Render the current fetch state
    fn render(&self) -> Rendered;

    /// Wait for the current fetch to settle
    async fn settled(&self);
}
