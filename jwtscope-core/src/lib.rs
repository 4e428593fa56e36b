//! Decode pipeline for compact JWTs: Base64Url segments, forgiving JSON and
//! locale-independent timestamps. Nothing here verifies anything.

pub mod base64url;
pub mod claims;
pub mod json;
pub mod timestamp;

pub use base64url::{Base64UrlError, base64_url_decode, base64_url_encode};
pub use claims::{Audience, JwtHeader, JwtPayload};
pub use json::{safe_json_parse, safe_json_parse_as};
pub use timestamp::{INVALID_DATE, format_timestamp, format_timestamp_f64};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_segment_decodes_and_parses() {
        let bytes = base64_url_decode("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9").expect("valid");
        let header = safe_json_parse(&bytes).expect("valid json");
        assert_eq!(header, json!({"alg": "HS256", "typ": "JWT"}));

        let typed: JwtHeader = safe_json_parse_as(&bytes).expect("typed header");
        assert_eq!(typed.alg.as_deref(), Some("HS256"));
        assert_eq!(typed.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn decode_failure_is_not_hidden_by_the_parser() {
        // The decode stage reports the error; only a caller that chooses to
        // continue would hand anything to the parser.
        let decoded = base64_url_decode("@@@");
        assert!(decoded.is_err());
        assert_eq!(decoded.ok().and_then(safe_json_parse), None);
    }

    #[test]
    fn payload_timestamps_render_through_the_formatter() {
        let bytes = base64_url_decode(&base64_url_encode(
            r#"{"sub":"1234567890","name":"John Doe","iat":1516239022}"#,
        ))
        .expect("round trip");
        let payload: JwtPayload = safe_json_parse_as(bytes).expect("payload");
        let rendered: Vec<_> = payload
            .timestamps()
            .map(|(claim, secs)| (claim, format_timestamp(secs)))
            .collect();
        assert_eq!(
            rendered,
            vec![("iat", "Jan 18, 2018, 01:30:22 UTC".to_string())]
        );
    }
}
