use axum::routing::get;
use axum::Router;

use crate::AppState;

mod handlers;
pub mod params;

pub(crate) use handlers::handle_not_found;

/// `/api` answers GET (query string) and POST (JSON body) with the same contract.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api",
            get(handlers::handle_generate_get).post(handlers::handle_generate_post),
        )
        .route("/health", get(handlers::handle_health))
}
