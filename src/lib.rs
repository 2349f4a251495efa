use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::ipsum::TextGenerator;
use crate::site::SiteConfig;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod ipsum;
pub mod site;
pub mod telemetry;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(generator: impl TextGenerator + 'static, site: SiteConfig) -> Self {
        Self {
            generator: Arc::new(generator),
            site: Arc::new(site),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::router())
        .merge(site::router())
        .fallback(api::handle_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
