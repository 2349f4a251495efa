use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::api::params::{GenerationBody, GenerationQuery, GenerationRequest, GenerationResponse};
use crate::error::{IpsumError, IpsumResult};
use crate::AppState;

#[axum_macros::debug_handler]
pub(crate) async fn handle_generate_get(
    State(state): State<AppState>,
    query: Result<Query<GenerationQuery>, QueryRejection>,
) -> IpsumResult<(StatusCode, Json<GenerationResponse>)> {
    let Query(query) = query.inspect_err(|err| warn!(%err, "Rejected query"))?;
    let request = query.validate().inspect_err(|err| warn!(%err, "Rejected query"))?;
    generate(&state, request)
}

#[axum_macros::debug_handler]
pub(crate) async fn handle_generate_post(
    State(state): State<AppState>,
    body: Result<Json<GenerationBody>, JsonRejection>,
) -> IpsumResult<(StatusCode, Json<GenerationResponse>)> {
    let Json(body) = body.inspect_err(|err| warn!(%err, "Rejected body"))?;
    let request = body.validate().inspect_err(|err| warn!(%err, "Rejected body"))?;
    generate(&state, request)
}

#[tracing::instrument(level = "info", skip(state))]
fn generate(
    state: &AppState,
    request: GenerationRequest,
) -> IpsumResult<(StatusCode, Json<GenerationResponse>)> {
    let text = state
        .generator
        .generate(request.count, request.units, &request.format)
        .map_err(|err| {
            warn!(%err, "Generator failed");
            IpsumError::unexpected(err)
        })?;

    info!(
        monotonic_counter.generation_requests = 1_u64,
        units = %request.units,
        "Generated text"
    );
    Ok((StatusCode::OK, Json(GenerationResponse { text })))
}

pub(crate) async fn handle_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn handle_not_found() -> IpsumError {
    IpsumError::not_found()
}
