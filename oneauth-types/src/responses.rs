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

//! Response types for the token endpoint.
//!
//! The token endpoint answers with either a [`TokenResponse`] or a
//! [`ProviderError`]. [`TokenEndpointResponse`] accepts both so callers see
//! the provider's answer whatever the HTTP status was.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Token payload returned by `POST {base_url}/token`.
///
/// This is a pass-through: nothing here is validated or interpreted.
/// Keycloak fills every field; other providers omit the optional ones.
///
/// ```json
/// {
///   "access_token": "eyJ...",
///   "expires_in": 300,
///   "refresh_expires_in": 1800,
///   "refresh_token": "eyJ...",
///   "token_type": "Bearer",
///   "id_token": "eyJ...",
///   "not-before-policy": 0,
///   "session_state": "7b1f...",
///   "scope": "openid email profile"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,

    /// Access token lifetime in seconds.
    pub expires_in: u64,

    /// Refresh token lifetime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_expires_in: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// `"Bearer"` in practice; kept as received.
    pub token_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    #[serde(
        rename = "not-before-policy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub not_before_policy: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Decoded body of the token endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TokenEndpointResponse {
    /// The grant was accepted.
    Issued(TokenResponse),
    /// The provider refused the grant.
    Rejected(ProviderError),
}

impl TokenEndpointResponse {
    pub fn tokens(&self) -> Option<&TokenResponse> {
        match self {
            TokenEndpointResponse::Issued(tokens) => Some(tokens),
            TokenEndpointResponse::Rejected(_) => None,
        }
    }

    pub fn into_result(self) -> Result<TokenResponse, ProviderError> {
        match self {
            TokenEndpointResponse::Issued(tokens) => Ok(tokens),
            TokenEndpointResponse::Rejected(err) => Err(err),
        }
    }
}
