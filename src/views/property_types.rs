//! Property Type Comparison View

use async_trait::async_trait;
use std::sync::Arc;

use super::{Rendered, Table, View};
use crate::api::{PropertyTypeStat, ReportSource};
use crate::loader::{FetchState, Loader};
use crate::shell::Route;

pub const TITLE: &str = "Property Type Comparison";
pub const HEADERS: [&str; 3] = ["Property Type", "Average Price", "Number of Listings"];

/// Render the property type report. Prices are fixed to two decimals.
pub fn render(state: &FetchState<Vec<PropertyTypeStat>>) -> Rendered {
    match state {
        FetchState::Idle | FetchState::Loading => Rendered::Loading,
        FetchState::Failure(msg) => Rendered::Error(msg.clone()),
        FetchState::Success(stats) => {
            let mut table = Table::new(TITLE, &HEADERS);
            for stat in stats {
                table.push_row(vec![
                    stat.property_type.clone(),
                    format!("{:.2}", stat.avg_price),
                    stat.number_of_listings.to_string(),
                ]);
            }
            Rendered::Table(table)
        }
    }
}

pub struct PropertyTypeComparisonView {
    loader: Loader<Vec<PropertyTypeStat>>,
}

impl PropertyTypeComparisonView {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        let loader = Loader::new(move || {
            let source = Arc::clone(&source);
            Box::pin(async move { source.property_type_comparison().await })
        });
        Self { loader }
    }

    pub fn loader(&self) -> &Loader<Vec<PropertyTypeStat>> {
        &self.loader
    }
}

#[async_trait]
impl View for PropertyTypeComparisonView {
    fn route(&self) -> Route {
        Route::PropertyTypeComparison
    }

    fn activate(&self) -> bool {
        self.loader.activate()
    }

    fn deactivate(&self) {
        self.loader.deactivate()
    }

    fn render(&self) -> Rendered {
        render(&self.loader.state())
    }

    async fn settled(&self) {
        self.loader.settled().await;
    }
}
