use serde::{Deserialize, Serialize};

/// Token inspection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InspectConfig {
    /// Largest request body accepted by the decode route, in bytes.
    /// TOML: `inspect.max_token_bytes`. Default: `16384`.
    #[serde(default = "default_max_token_bytes")]
    pub max_token_bytes: usize,

    /// Payload claims rendered as UTC timestamps, in display order.
    /// TOML: `inspect.timestamp_claims`. Default: `["exp", "nbf", "iat"]`.
    #[serde(default = "default_timestamp_claims")]
    pub timestamp_claims: Vec<String>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_token_bytes: default_max_token_bytes(),
            timestamp_claims: default_timestamp_claims(),
        }
    }
}

fn default_max_token_bytes() -> usize {
    16 * 1024
}

fn default_timestamp_claims() -> Vec<String> {
    ["exp", "nbf", "iat"].map(String::from).to_vec()
}
