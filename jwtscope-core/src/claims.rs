//! Descriptive JWT header and payload records.
//!
//! These are display schemas, not contracts: every documented field is
//! optional, a field holding an unexpected JSON type is read as `None`, and
//! unknown keys land in `extra`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// JOSE header of a compact JWT.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JwtHeader {
    /// Signing algorithm name, e.g. `HS256`.
    #[serde(default, deserialize_with = "lenient_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,

    /// Token type tag, conventionally `JWT`.
    #[serde(default, deserialize_with = "lenient_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    #[serde(flatten)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

/// `aud` is either one string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

/// Registered claims plus whatever else the issuer put in the payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JwtPayload {
    #[serde(default, deserialize_with = "lenient_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(default, deserialize_with = "lenient_audience")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,

    /// Expiration time (Unix seconds).
    #[serde(default, deserialize_with = "lenient_seconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Not before (Unix seconds).
    #[serde(default, deserialize_with = "lenient_seconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Issued at (Unix seconds).
    #[serde(default, deserialize_with = "lenient_seconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    #[serde(flatten)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl JwtHeader {
    /// Typed view of an already parsed header. `None` unless `value` is an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?;
        serde_json::from_value(value.clone()).ok()
    }
}

impl JwtPayload {
    /// Typed view of an already parsed payload. `None` unless `value` is an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Audience entries in order, whichever shape `aud` had.
    pub fn audience(&self) -> Vec<&str> {
        match &self.aud {
            Some(Audience::Single(aud)) => vec![aud.as_str()],
            Some(Audience::Multiple(list)) => list.iter().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// `(claim, seconds)` for each of `exp`, `nbf`, `iat` that is present.
    pub fn timestamps(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        [("exp", self.exp), ("nbf", self.nbf), ("iat", self.iat)]
            .into_iter()
            .filter_map(|(claim, secs)| secs.map(|s| (claim, s)))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_audience<'de, D>(deserializer: D) -> Result<Option<Audience>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(v).ok())
}

fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n.as_i64().or_else(|| {
            let secs = n.as_f64().filter(|f| f.is_finite())?.floor();
            // Saturating cast; out-of-range seconds clamp to i64 bounds.
            #[allow(clippy::cast_possible_truncation)]
            let secs = secs as i64;
            Some(secs)
        })),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_keeps_custom_fields() {
        let v = json!({"alg": "RS256", "typ": "JWT", "kid": "k1", "x5t": "abc"});
        let header = JwtHeader::from_value(&v).expect("object");
        assert_eq!(header.alg.as_deref(), Some("RS256"));
        assert_eq!(header.typ.as_deref(), Some("JWT"));
        assert_eq!(header.kid.as_deref(), Some("k1"));
        assert_eq!(header.extra.get("x5t"), Some(&json!("abc")));
    }

    #[test]
    fn wrong_types_do_not_reject_the_record() {
        let v = json!({"alg": 5, "typ": null, "custom": [1, 2]});
        let header = JwtHeader::from_value(&v).expect("still an object");
        assert_eq!(header.alg, None);
        assert_eq!(header.typ, None);
        assert_eq!(header.extra.get("custom"), Some(&json!([1, 2])));

        let v = json!({"exp": "tomorrow", "aud": 12, "sub": "s"});
        let payload = JwtPayload::from_value(&v).expect("still an object");
        assert_eq!(payload.exp, None);
        assert_eq!(payload.aud, None);
        assert_eq!(payload.sub.as_deref(), Some("s"));
    }

    #[test]
    fn non_objects_have_no_typed_view() {
        assert_eq!(JwtHeader::from_value(&json!("HS256")), None);
        assert_eq!(JwtPayload::from_value(&json!([1, 2, 3])), None);
    }

    #[test]
    fn audience_accepts_both_shapes() {
        let single = JwtPayload::from_value(&json!({"aud": "api"})).expect("object");
        assert_eq!(single.aud, Some(Audience::Single("api".to_string())));
        assert_eq!(single.audience(), vec!["api"]);

        let many = JwtPayload::from_value(&json!({"aud": ["api", "web"]})).expect("object");
        assert_eq!(many.audience(), vec!["api", "web"]);

        assert!(JwtPayload::default().audience().is_empty());
    }

    #[test]
    fn timestamps_lists_present_claims_in_order() {
        let payload =
            JwtPayload::from_value(&json!({"iat": 1516239022, "exp": 1516242622.75}))
                .expect("object");
        let stamps: Vec<_> = payload.timestamps().collect();
        assert_eq!(stamps, vec![("exp", 1516242622), ("iat", 1516239022)]);
    }

    #[test]
    fn oversized_float_seconds_saturate() {
        let payload =
            JwtPayload::from_value(&json!({"exp": 1e30, "nbf": -1e30})).expect("object");
        assert_eq!(payload.exp, Some(i64::MAX));
        assert_eq!(payload.nbf, Some(i64::MIN));
    }

    #[test]
    fn serialization_flattens_extra_and_skips_absent_fields() {
        let payload = JwtPayload {
            sub: Some("1234567890".to_string()),
            extra: BTreeMap::from([("name".to_string(), json!("John Doe"))]),
            ..JwtPayload::default()
        };
        assert_eq!(
            serde_json::to_value(&payload).expect("serialize"),
            json!({"sub": "1234567890", "name": "John Doe"})
        );
    }
}
