//! Page Chrome
//!
//! Wraps rendered view output in a complete HTML document with a nav bar.

use askama::Template;
use axum::http::StatusCode;

use super::Route;
use crate::views::Rendered;

struct NavLink {
    path: &'static str,
    label: &'static str,
    active: bool,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    links: Vec<NavLink>,
    body: &'a str,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    status: u16,
    message: &'a str,
}

fn document(title: &str, active: Option<Route>, body: &str) -> String {
    let links = Route::ALL
        .iter()
        .map(|route| NavLink {
            path: route.path(),
            label: route.label(),
            active: Some(*route) == active,
        })
        .collect();

    PageTemplate { title, links, body }
        .render()
        .unwrap_or_default()
}

/// Full page for a route's rendered view
pub fn view_page(route: Route, rendered: &Rendered) -> String {
    document(route.label(), Some(route), &rendered.to_html())
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = ErrorTemplate {
        status: status.as_u16(),
        message,
    }
    .render()
    .unwrap_or_default();
    document(status.canonical_reason().unwrap_or("Error"), None, &body)
}
