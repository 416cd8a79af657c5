//! Route configuration and setup

use crate::constants::UPLOAD_PATH;
use crate::handlers;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
///
/// The default 2 MiB request body cap is lifted: uploads of any size are
/// buffered in full before the store call.
pub fn setup_routes(state: Arc<AppState>) -> Router<()> {
    let router = Router::new()
        .route(UPLOAD_PATH, post(handlers::upload::upload_file))
        .layer(DefaultBodyLimit::disable());

    with_default_middleware(router).with_state(state)
}

/// Request logging and panic recovery. A panicking handler is answered with
/// 500 instead of the connection being reset; the trace layer sits outside so
/// that response is logged too.
fn with_default_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
