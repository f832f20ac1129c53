//! Block Values View
//!
//! Block records have no fixed schema, so each one is shown as compact JSON
//! in a single column.

use async_trait::async_trait;
use std::sync::Arc;

use super::{Rendered, Table, View};
use crate::api::{BlockValue, ReportSource};
use crate::loader::{FetchState, Loader};
use crate::shell::Route;

pub const TITLE: &str = "Block Values";
pub const HEADERS: [&str; 1] = ["Block Value"];

pub fn render(state: &FetchState<Vec<BlockValue>>) -> Rendered {
    match state {
        FetchState::Idle | FetchState::Loading => Rendered::Loading,
        FetchState::Failure(msg) => Rendered::Error(msg.clone()),
        FetchState::Success(blocks) => {
            let mut table = Table::new(TITLE, &HEADERS);
            for block in blocks {
                table.push_row(vec![block.to_string()]);
            }
            Rendered::Table(table)
        }
    }
}

pub struct BlockValuesView {
    loader: Loader<Vec<BlockValue>>,
}

impl BlockValuesView {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        let loader = Loader::new(move || {
            let source = Arc::clone(&source);
            Box::pin(async move {
                let result = source.block_values().await;
                match &result {
                    Ok(blocks) => tracing::debug!(count = blocks.len(), "Block values fetched"),
                    Err(e) => tracing::debug!(error = %e, "Error fetching block values"),
                }
                result
            })
        });
        Self { loader }
    }

    pub fn loader(&self) -> &Loader<Vec<BlockValue>> {
        &self.loader
    }
}

#[async_trait]
impl View for BlockValuesView {
    fn route(&self) -> Route {
        Route::Home
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
