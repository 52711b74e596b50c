//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod strategies;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/strategies", get(strategies::list))
        .route("/strategies/{name}/generate", post(strategies::generate))
}
