//! HTTP surface: a single aggregation endpoint at the service root.

use std::any::Any;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Response, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use chart_client::{AggregateResult, ChartService};

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ChartService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: ChartService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// GET /
///
/// Aggregate every registered site's chart. Always responds 200 with
/// best-effort data: failed sites keep empty lists, failed rows keep their
/// base fields.
async fn aggregate_charts(State(state): State<AppState>) -> Json<AggregateResult> {
    Json(state.service.aggregate().await)
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(aggregate_charts))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// A panic escaping a handler becomes a plain-text error response; the
/// process keeps serving.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(panic = %detail, "request handler panicked");

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from(format!("request failed: {detail}")))
        .expect("plain text response")
}
