use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse `input` as JSON, returning `None` on any failure.
///
/// This is the only place in the decode pipeline where errors are swallowed:
/// syntax errors, trailing garbage and invalid UTF-8 all come back as `None`.
pub fn safe_json_parse(input: impl AsRef<[u8]>) -> Option<Value> {
    serde_json::from_slice(input.as_ref()).ok()
}

/// Typed variant of [`safe_json_parse`] with the same recovery semantics.
pub fn safe_json_parse_as<T: DeserializeOwned>(input: impl AsRef<[u8]>) -> Option<T> {
    serde_json::from_slice(input.as_ref()).ok()
}
