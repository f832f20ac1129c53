//! Dashboard Shell
//!
//! Maps URL paths to views and hosts them. The shell holds the injected
//! [`ReportSource`] and builds a fresh view for every mount, so no fetch
//! state is shared between pages or between visits to the same page.
//!
//! # Routes
//!
//! - `/` - Block values
//! - `/top-affordable-places` - Top affordable places
//! - `/property-type-comparison` - Property type comparison

pub mod error;
pub mod page;
pub mod route;
pub mod server;

pub use error::{ShellError, ShellResult};
pub use route::Route;
pub use server::{build_router, serve, serve_with_shutdown};

use std::sync::Arc;

use crate::api::ReportSource;
use crate::views::{
    BlockValuesView, PropertyTypeComparisonView, Rendered, TopAffordablePlacesView, View,
};

/// Route table plus the report source injected into every view
#[derive(Clone)]
pub struct Shell {
    source: Arc<dyn ReportSource>,
}

impl Shell {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self { source }
    }

    /// Build a new, idle view for a route
    pub fn mount(&self, route: Route) -> Box<dyn View> {
        let source = Arc::clone(&self.source);
        match route {
            Route::Home => Box::new(BlockValuesView::new(source)),
            Route::TopAffordablePlaces => Box::new(TopAffordablePlacesView::new(source)),
            Route::PropertyTypeComparison => Box::new(PropertyTypeComparisonView::new(source)),
        }
    }

    /// Mount a view, wait for its fetch to settle, render it, then unmount.
    pub async fn render_page(&self, route: Route) -> Rendered {
        let view = self.mount(route);
        view.activate();
        view.settled().await;
        let rendered = view.render();
        view.deactivate();

        tracing::debug!(route = %route, "Rendered page");
        rendered
    }

    /// Resolve a path and render its page
    pub async fn render_path(&self, path: &str) -> ShellResult<(Route, Rendered)> {
        let route =
            Route::from_path(path).ok_or_else(|| ShellError::NotFound(path.to_string()))?;
        Ok((route, self.render_page(route).await))
    }
}
