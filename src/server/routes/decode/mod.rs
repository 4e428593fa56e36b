use crate::server::router::ScopeState;
use axum::{Router, routing::post};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<ScopeState> {
    Router::new().route("/v1/decode", post(handlers::decode_handler))
}
