/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Provider error payload.
//!
//! A token endpoint that refuses a grant answers with the RFC 6749 §5.2
//! error body instead of a [`TokenResponse`](crate::TokenResponse).

use serde::{Deserialize, Serialize};

/// Error body returned by the identity provider.
///
/// The `error` field is a machine-readable code such as `"invalid_grant"`.
/// `error_description` and `error_uri` are optional and provider-specific.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProviderError {
    /// Machine-readable error code (e.g. `"invalid_grant"`, `"invalid_client"`).
    pub error: String,

    /// Human-readable explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,

    /// Link to a page describing the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_description {
            Some(description) => write!(f, "[{}] {}", self.error, description),
            None => write!(f, "[{}]", self.error),
        }
    }
}

impl std::error::Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_description_when_present() {
        let err = ProviderError {
            error: "invalid_grant".to_string(),
            error_description: Some("Code not valid".to_string()),
            error_uri: None,
        };
        assert_eq!(err.to_string(), "[invalid_grant] Code not valid");
    }

    #[test]
    fn display_without_description() {
        let err: ProviderError = serde_json::from_str(r#"{"error":"invalid_client"}"#).unwrap();
        assert_eq!(err.to_string(), "[invalid_client]");
        assert!(err.error_uri.is_none());
    }
}
