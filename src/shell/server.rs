//! Page Server
//!
//! Serves each route as a server-rendered HTML page, built with Axum.
//!
//! - `GET /` - Block values
//! - `GET /top-affordable-places` - Top affordable places
//! - `GET /property-type-comparison` - Property type comparison
//! - `GET /health/live` - Liveness probe
//!
//! Each request mounts a fresh view, waits for its single fetch to settle,
//! renders it and unmounts it.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{page, Route, Shell, ShellError, ShellResult};
use crate::config::ServerConfig;

/// Build the page router with all routes and middleware
pub fn build_router(shell: Shell) -> Router {
    let mut pages = Router::new();
    for route in Route::ALL {
        pages = pages.route(route.path(), get(render_page));
    }

    let health_routes = Router::new().route("/live", get(liveness));

    pages
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(shell))
}

/// Start the page server, stopping on Ctrl+C or SIGTERM
pub async fn serve(shell: Shell, config: &ServerConfig) -> ShellResult<()> {
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    serve_with_shutdown(shell, listener, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_with_shutdown<F>(
    shell: Shell,
    listener: tokio::net::TcpListener,
    shutdown: F,
) -> ShellResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = build_router(shell);

    tracing::info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ShellError::Server(e.to_string()))?;

    tracing::info!("Dashboard stopped");
    Ok(())
}

async fn render_page(
    State(shell): State<Arc<Shell>>,
    uri: Uri,
) -> ShellResult<Html<String>> {
    let (route, rendered) = shell.render_path(uri.path()).await?;
    Ok(Html(page::view_page(route, &rendered)))
}

async fn not_found(uri: Uri) -> ShellError {
    ShellError::NotFound(uri.path().to_string())
}

/// GET /health/live
async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Resolves on Ctrl+C, or SIGTERM on unix. A handler that cannot be
/// installed never resolves, leaving the other one in charge.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
        "interrupt"
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
        "terminate"
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<&'static str>();

    let signal = tokio::select! {
        name = interrupt => name,
        name = sigterm => name,
    };

    tracing::info!(signal, "Stopping dashboard, draining open requests");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AffordablePlace, ClientConfig, PropertyTypeStat, ReportClient};
    use crate::test_support::{spawn_mock_api, FakeSource, MockRoute};
    use axum::{body::Body, http::Request};
    use serde_json::json;
    use tower::util::ServiceExt;

    fn create_test_app(source: FakeSource) -> Router {
        build_router(Shell::new(Arc::new(source)))
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app(FakeSource::default());

        let (status, _) = get_page(app, "/health/live").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_top_affordable_places_page() {
        let app = create_test_app(FakeSource {
            places: vec![AffordablePlace {
                place_name: "Riverside".to_string(),
                avg_price: 250000.0,
                total_listings: 12,
            }],
            ..Default::default()
        });

        let (status, body) = get_page(app, "/top-affordable-places").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>Top 10 Affordable Places</h2>"));
        assert!(body.contains("<tr><td>Riverside</td><td>250000</td><td>12</td></tr>"));
    }

    #[tokio::test]
    async fn test_property_type_page() {
        let app = create_test_app(FakeSource {
            property_types: vec![PropertyTypeStat {
                property_type: "Condo".to_string(),
                avg_price: 300000.5,
                number_of_listings: 8,
            }],
            ..Default::default()
        });

        let (status, body) = get_page(app, "/property-type-comparison").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<td>300000.50</td>"));
    }

    #[tokio::test]
    async fn test_failed_fetch_renders_message_with_ok_status() {
        let app = create_test_app(FakeSource::failing("HTTP 502"));

        let (status, body) = get_page(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<p>Fetch failed: HTTP 502</p>"));
        assert!(!body.contains("<table>"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let app = create_test_app(FakeSource::default());

        let (status, body) = get_page(app, "/cheapest-areas").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<h1>404</h1>"));
        assert!(body.contains("cheapest-areas"));
    }

    #[tokio::test]
    async fn test_serve_stops_when_shutdown_resolves() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(serve_with_shutdown(
            Shell::new(Arc::new(FakeSource::default())),
            listener,
            async move {
                let _ = stop_rx.await;
            },
        ));

        let response = reqwest::get(format!("http://{}/health/live", addr))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        stop_tx.send(()).unwrap();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_home_page_through_real_client() {
        let api = spawn_mock_api(vec![MockRoute::ok(
            "/block-values",
            json!({"block_values": [{"block": "7A", "median": 180000}]}),
        )])
        .await;
        let client = ReportClient::new(ClientConfig::new(&api.base_url)).unwrap();
        let app = build_router(Shell::new(Arc::new(client)));

        let (status, body) = get_page(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>Block Values</h2>"));
        assert!(body.contains("&quot;block&quot;:&quot;7A&quot;"));
        assert_eq!(api.hits(), 1);
    }
}
