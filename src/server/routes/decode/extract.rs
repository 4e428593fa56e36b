use crate::error::ScopeError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DecodeRequestBody {
    #[serde(default)]
    token: String,
}

/// The token to inspect, taken from either request body shape.
pub(crate) struct TokenInput(pub(crate) String);

/// Media types compare case-insensitively; parameters like `charset` are ignored.
fn is_json_media_type(content_type: &str) -> bool {
    content_type
        .trim_start()
        .get(..16)
        .is_some_and(|essence| essence.eq_ignore_ascii_case("application/json"))
}

impl<S> FromRequest<S> for TokenInput
where
    S: Send + Sync,
{
    type Rejection = ScopeError;

    /// `application/json` bodies must look like `{"token": "..."}`; any other
    /// content type is read as the raw token text.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_media_type);

        let body = Bytes::from_request(req, state).await?;

        if is_json {
            let parsed: DecodeRequestBody = serde_json::from_slice(&body)?;
            Ok(TokenInput(parsed.token))
        } else {
            Ok(TokenInput(std::str::from_utf8(&body)?.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_media_type_ignores_case_and_parameters() {
        assert!(is_json_media_type("application/json"));
        assert!(is_json_media_type("Application/JSON"));
        assert!(is_json_media_type(" application/json; charset=utf-8"));
        assert!(!is_json_media_type("text/plain"));
        assert!(!is_json_media_type("application/js"));
    }
}
