//! The HTTP surface: one page, served over axum.
//!
//! The endpoint always answers `200 OK` with `text/html`. Probe failures
//! are rendered inline as text, never as error responses.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{Result, StackprobeError};
use crate::render::render_page;
use crate::report::Reporter;

/// Build the application router.
pub fn router(reporter: Arc<Reporter>) -> Router {
    Router::new()
        .route("/", get(status_page))
        .with_state(reporter)
}

/// Gather a fresh report and render it.
async fn status_page(State(reporter): State<Arc<Reporter>>) -> Html<String> {
    let report = reporter.run().await;
    Html(render_page(&report))
}

/// Bind the listener and serve until the process is stopped.
pub async fn serve(bind: SocketAddr, reporter: Arc<Reporter>) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|source| StackprobeError::Bind { addr: bind, source })?;

    info!("serving the status page on http://{bind}");
    axum::serve(listener, router(reporter)).await?;
    Ok(())
}
