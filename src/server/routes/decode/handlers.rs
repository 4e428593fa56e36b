use super::extract::TokenInput;
use crate::error::ScopeError;
use crate::inspect::Inspection;
use crate::server::router::ScopeState;
use axum::{Json, extract::State};
use tracing::debug;

pub(super) async fn decode_handler(
    State(state): State<ScopeState>,
    TokenInput(token): TokenInput,
) -> Result<Json<Inspection>, ScopeError> {
    let inspection = state.inspector.inspect(&token)?;

    debug!(
        token_len = token.len(),
        header_ok = inspection.header.json.is_some(),
        payload_ok = inspection.payload.json.is_some(),
        timestamps = inspection.timestamps.len(),
        "Decoded token"
    );

    Ok(Json(inspection))
}
