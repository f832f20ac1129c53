//! Top Affordable Places View

use async_trait::async_trait;
use std::sync::Arc;

use super::{Rendered, Table, View};
use crate::api::{AffordablePlace, ReportSource};
use crate::loader::{FetchState, Loader};
use crate::shell::Route;

pub const TITLE: &str = "Top 10 Affordable Places";
pub const HEADERS: [&str; 3] = ["Place Name", "Average Price", "Total Listings"];

/// Render the affordable places report. Prices are shown as received.
pub fn render(state: &FetchState<Vec<AffordablePlace>>) -> Rendered {
    match state {
        FetchState::Idle | FetchState::Loading => Rendered::Loading,
        FetchState::Failure(msg) => Rendered::Error(msg.clone()),
        FetchState::Success(places) => {
            let mut table = Table::new(TITLE, &HEADERS);
            for place in places {
                table.push_row(vec![
                    place.place_name.clone(),
                    place.avg_price.to_string(),
                    place.total_listings.to_string(),
                ]);
            }
            Rendered::Table(table)
        }
    }
}

pub struct TopAffordablePlacesView {
    loader: Loader<Vec<AffordablePlace>>,
}

impl TopAffordablePlacesView {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        let loader = Loader::new(move || {
            let source = Arc::clone(&source);
            Box::pin(async move { source.top_affordable_places().await })
        });
        Self { loader }
    }

    pub fn loader(&self) -> &Loader<Vec<AffordablePlace>> {
        &self.loader
    }
}

#[async_trait]
impl View for TopAffordablePlacesView {
    fn route(&self) -> Route {
        Route::TopAffordablePlaces
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
