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

//! Request types for the identity provider endpoints.
//!
//! Field order in these structs is the order in which they are serialized
//! into form bodies and query strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scope requested by the authorization redirect.
pub const OPENID_SCOPE: &str = "openid";

/// OAuth2 grant type. Only the authorization code grant is used.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    #[default]
    AuthorizationCode,
}

/// OAuth2 response type for the authorization endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    #[default]
    Code,
}

/// Caller-supplied half of a token exchange: where the user agent was sent
/// back to and the code it brought with it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenExchangeRequest {
    pub redirect_uri: String,
    #[serde(rename = "code")]
    pub authorization_code: String,
}

/// Form body for `POST {base_url}/token`.
///
/// Serializes as `redirect_uri=..&code=..&client_id=..&grant_type=authorization_code`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthorizationCodeGrant {
    pub redirect_uri: String,
    pub code: String,
    pub client_id: String,
    pub grant_type: GrantType,
}

impl AuthorizationCodeGrant {
    pub fn new(request: &TokenExchangeRequest, client_id: &str) -> Self {
        Self {
            redirect_uri: request.redirect_uri.clone(),
            code: request.authorization_code.clone(),
            client_id: client_id.to_string(),
            grant_type: GrantType::AuthorizationCode,
        }
    }
}

/// Query string for `GET {base_url}/auth`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub client_id: String,
    pub redirect_uri: String,
    pub response_type: ResponseType,
    pub scope: String,
}

impl AuthorizationRequest {
    /// An `openid` scoped code request returning to `redirect_uri`.
    pub fn openid(client_id: &str, redirect_uri: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            redirect_uri: redirect_uri.to_string(),
            response_type: ResponseType::Code,
            scope: OPENID_SCOPE.to_string(),
        }
    }
}

/// Name of the field carrying the client identifier in the sign-out body.
///
/// Keycloak reads `client_id`. Some deployments were wired against a proxy
/// expecting `clientId`; that spelling is kept selectable.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignOutClientField {
    #[default]
    #[serde(rename = "client_id")]
    ClientId,
    #[serde(rename = "clientId")]
    CamelCase,
}

impl SignOutClientField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignOutClientField::ClientId => "client_id",
            SignOutClientField::CamelCase => "clientId",
        }
    }
}

impl fmt::Display for SignOutClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`SignOutClientField`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSignOutClientField(pub String);

impl fmt::Display for UnknownSignOutClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sign-out client field '{}', expected 'client_id' or 'clientId'",
            self.0
        )
    }
}

impl std::error::Error for UnknownSignOutClientField {}

impl FromStr for SignOutClientField {
    type Err = UnknownSignOutClientField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client_id" => Ok(SignOutClientField::ClientId),
            "clientId" => Ok(SignOutClientField::CamelCase),
            other => Err(UnknownSignOutClientField(other.to_string())),
        }
    }
}

/// Body for `POST {base_url}/logout`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SignOutRequest {
    pub refresh_token: String,
}

impl SignOutRequest {
    /// Form pairs for the sign-out body: the client field first, then
    /// `refresh_token`.
    pub fn form_pairs<'a>(
        &'a self,
        client_id: &'a str,
        field: SignOutClientField,
    ) -> [(&'static str, &'a str); 2] {
        [
            (field.as_str(), client_id),
            ("refresh_token", self.refresh_token.as_str()),
        ]
    }
}
