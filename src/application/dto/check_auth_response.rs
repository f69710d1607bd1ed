use serde::{Deserialize, Serialize};

/// Message returned whenever the presented API key does not match
pub const INVALID_API_KEY_MESSAGE: &str = "Invalid Api Key";

/// CheckAuthResponse - result of validating the caller's API key
///
/// `error` is empty when the key is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckAuthResponse {
    #[serde(rename = "Valid", alias = "valid")]
    pub valid: bool,

    #[serde(rename = "Error", alias = "error", default)]
    pub error: String,
}

impl CheckAuthResponse {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: String::new(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            error: INVALID_API_KEY_MESSAGE.to_string(),
        }
    }
}
