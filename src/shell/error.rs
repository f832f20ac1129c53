//! Shell Error Types
//!
//! Errors raised by the page server, and their conversion to HTML responses.
//! Report fetch failures are not errors here: views render them in-page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use super::page;

#[derive(Error, Debug)]
pub enum ShellError {
    /// No route for the requested path
    #[error("No page at {0}")]
    NotFound(String),

    /// Server could not bind or failed while running
    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ShellError {
    fn into_response(self) -> Response {
        let status = match &self {
            ShellError::NotFound(_) => StatusCode::NOT_FOUND,
            ShellError::Server(_) | ShellError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Shell error occurred");
        } else {
            tracing::debug!(error = %self, "Page not found");
        }

        let body = page::error_page(status, &self.to_string());
        (status, Html(body)).into_response()
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
