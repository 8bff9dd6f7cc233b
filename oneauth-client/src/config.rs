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

//! Client configuration, validated once at construction.

use oneauth_types::SignOutClientField;
use reqwest::Client;
use url::Url;

use crate::error::OneAuthError;

/// Configuration for an [`IdentityClient`](crate::IdentityClient).
///
/// The HTTP transport is supplied by the caller so that timeouts, proxies and
/// cookie stores stay under its control.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    http: Client,
    base_url: String,
    client_id: String,
    sign_out_client_field: SignOutClientField,
}

impl ClientConfig {
    /// Create a configuration.
    ///
    /// # Arguments
    ///
    /// * `http` - transport used for `/token` and `/logout`
    /// * `base_url` - e.g. `"https://idp.example.com/realms/acme/protocol/openid-connect"`,
    ///   without a trailing slash
    /// * `client_id` - the client registered with the provider
    pub fn new(http: Client, base_url: &str, client_id: &str) -> Result<Self, OneAuthError> {
        validate_base_url(base_url)?;
        if client_id.trim().is_empty() {
            return Err(OneAuthError::Config("client_id must not be empty".to_string()));
        }

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            client_id: client_id.to_string(),
            sign_out_client_field: SignOutClientField::default(),
        })
    }

    /// Choose the field name carrying the client id in the sign-out body.
    pub fn with_sign_out_client_field(mut self, field: SignOutClientField) -> Self {
        self.sign_out_client_field = field;
        self
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn sign_out_client_field(&self) -> SignOutClientField {
        self.sign_out_client_field
    }
}

fn validate_base_url(base_url: &str) -> Result<(), OneAuthError> {
    if base_url.is_empty() {
        return Err(OneAuthError::Config("base_url must not be empty".to_string()));
    }
    if base_url.ends_with('/') {
        return Err(OneAuthError::Config(format!(
            "base_url must not end with '/': {base_url}"
        )));
    }

    let parsed = Url::parse(base_url)
        .map_err(|e| OneAuthError::Config(format!("base_url is not a valid URL: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(OneAuthError::Config(format!(
            "base_url must use http or https, got '{}'",
            parsed.scheme()
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(OneAuthError::Config(
            "base_url must not carry a query or fragment".to_string(),
        ));
    }

    Ok(())
}
