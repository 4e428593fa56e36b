use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InspectError {
    #[error("token is empty")]
    EmptyToken,

    #[error("expected 3 dot-separated segments, found {0}")]
    SegmentCount(usize),
}

/// The three segments of a compact JWT, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split `raw` on `.` after trimming whitespace and an optional `Bearer ` prefix.
    pub fn split(raw: &'a str) -> Result<Self, InspectError> {
        let token = strip_bearer(raw.trim());

        if token.is_empty() {
            return Err(InspectError::EmptyToken);
        }

        let segments: Vec<&str> = token.split('.').collect();
        let &[header, payload, signature] = segments.as_slice() else {
            return Err(InspectError::SegmentCount(segments.len()));
        };

        Ok(Self {
            header,
            payload,
            signature,
        })
    }
}

fn strip_bearer(token: &str) -> &str {
    ["Bearer", "bearer"]
        .into_iter()
        .find_map(|scheme| token.strip_prefix(scheme))
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        .map_or(token, str::trim_start)
}
