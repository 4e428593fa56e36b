use jwtscope_core::{
    JwtHeader, JwtPayload, base64_url_decode, format_timestamp, format_timestamp_f64,
    safe_json_parse,
};
use serde::Serialize;
use serde_json::{Number, Value};
use tracing::debug;

use super::parts::{InspectError, TokenParts};
use crate::config::InspectConfig;
use crate::utils::logging::with_pretty_json_debug;

/// One decoded segment, kept in every form a viewer might want to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentView {
    /// The segment exactly as it appeared in the token.
    pub raw: String,

    /// Decoded bytes as text (lossy UTF-8). Absent when Base64Url decoding failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<String>,

    /// Parsed JSON, `null` when the decoded text is not JSON.
    pub json: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimestampView {
    pub claim: String,
    pub unix: Number,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub header: SegmentView,
    pub payload: SegmentView,
    /// Carried verbatim; never decoded or checked.
    pub signature: String,
    pub timestamps: Vec<TimestampView>,
}

impl Inspection {
    pub fn header_claims(&self) -> Option<JwtHeader> {
        self.header.json.as_ref().and_then(JwtHeader::from_value)
    }

    pub fn payload_claims(&self) -> Option<JwtPayload> {
        self.payload.json.as_ref().and_then(JwtPayload::from_value)
    }
}

/// Stateless apart from which payload claims get rendered as timestamps.
#[derive(Debug, Clone)]
pub struct Inspector {
    timestamp_claims: Vec<String>,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(&InspectConfig::default())
    }
}

impl Inspector {
    pub fn new(cfg: &InspectConfig) -> Self {
        Self {
            timestamp_claims: cfg.timestamp_claims.clone(),
        }
    }

    /// Split and decode `raw`.
    ///
    /// Only the token shape can fail. A segment that is not valid Base64Url is
    /// reported on that segment and the rest of the token is still decoded.
    pub fn inspect(&self, raw: &str) -> Result<Inspection, InspectError> {
        let parts = TokenParts::split(raw)?;

        let header = decode_segment("header", parts.header);
        let payload = decode_segment("payload", parts.payload);
        let timestamps = payload
            .json
            .as_ref()
            .map(|claims| self.render_timestamps(claims))
            .unwrap_or_default();

        let inspection = Inspection {
            header,
            payload,
            signature: parts.signature.to_string(),
            timestamps,
        };

        with_pretty_json_debug(&inspection, |json| {
            debug!("Token inspection:\n{json}");
        });

        Ok(inspection)
    }

    fn render_timestamps(&self, claims: &Value) -> Vec<TimestampView> {
        self.timestamp_claims
            .iter()
            .filter_map(|claim| {
                let Some(Value::Number(n)) = claims.get(claim) else {
                    return None;
                };
                let display = match (n.as_i64(), n.as_f64()) {
                    (Some(secs), _) => format_timestamp(secs),
                    (None, Some(secs)) => format_timestamp_f64(secs),
                    (None, None) => return None,
                };
                Some(TimestampView {
                    claim: claim.clone(),
                    unix: n.clone(),
                    display,
                })
            })
            .collect()
    }
}

fn decode_segment(segment: &'static str, raw: &str) -> SegmentView {
    match base64_url_decode(raw) {
        Ok(bytes) => {
            let json = safe_json_parse(&bytes);
            if json.is_none() {
                debug!(segment, "decoded segment is not JSON");
            }
            SegmentView {
                raw: raw.to_string(),
                decoded: Some(String::from_utf8_lossy(&bytes).into_owned()),
                json,
                decode_error: None,
            }
        }
        Err(e) => {
            debug!(segment, error = %e, "segment is not valid base64url");
            SegmentView {
                raw: raw.to_string(),
                decoded: None,
                json: None,
                decode_error: Some(e.to_string()),
            }
        }
    }
}
