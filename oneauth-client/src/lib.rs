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

//! Authorization code flow client for a single OpenID Connect provider.
//!
//! Works on WASM (browser) and native targets via [`reqwest`]. The client
//! builds three requests against `{base_url}`:
//!
//! - `POST /token` — exchange an authorization code for tokens
//! - `GET /auth` — browser redirect to the login page
//! - `POST /logout` — end the provider session
//!
//! Tokens are neither validated nor stored, and HTTP status codes are handed
//! back to the caller untouched.
//!
//! # Example
//!
//! ```no_run
//! use oneauth_client::{ClientConfig, IdentityClient};
//!
//! # async fn example() -> Result<(), oneauth_client::OneAuthError> {
//! let config = ClientConfig::new(
//!     reqwest::Client::new(),
//!     "https://accounts.example.com/realms/acme/protocol/openid-connect",
//!     "web-app",
//! )?;
//! let client = IdentityClient::new(config);
//!
//! let response = client
//!     .request_token("https://app.example.com/callback", "CODE123")
//!     .await?;
//! println!("token endpoint answered {}", response.status);
//! # Ok(())
//! # }
//! ```

pub mod authorize;
pub mod config;
pub mod environment;
pub mod error;
pub mod request;
pub mod sign_out;
pub mod token;

pub use config::ClientConfig;
pub use environment::{Environment, HeadlessEnvironment};
pub use error::OneAuthError;
pub use oneauth_types;
pub use request::{Credentials, FormPost, FORM_CONTENT_TYPE};

#[cfg(target_arch = "wasm32")]
pub use environment::BrowserEnvironment;

/// Token endpoint suffix.
pub const TOKEN_PATH: &str = "/token";
/// Authorization endpoint suffix.
pub const AUTH_PATH: &str = "/auth";
/// Logout endpoint suffix.
pub const LOGOUT_PATH: &str = "/logout";

/// Status and decoded body of a provider response.
///
/// The status is never interpreted by the client; a `400` from the token
/// endpoint is returned here just like a `200`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> HttpResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A client for one identity provider realm.
///
/// Every operation is an independent request builder; the client holds no
/// state besides its [`ClientConfig`] and can be shared freely.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    config: ClientConfig,
}

impl IdentityClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve an endpoint by appending `path` to the configured base URL.
    ///
    /// Plain concatenation: no normalization, no slash handling.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Send a prepared form POST through the configured transport.
    pub(crate) async fn send(&self, plan: FormPost) -> Result<reqwest::Response, OneAuthError> {
        log::debug!(
            "POST {} (credentials: {:?})",
            plan.endpoint,
            plan.credentials
        );
        let response = plan.into_request_builder(self.config.http()).send().await?;
        log::debug!("provider answered {}", response.status());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> IdentityClient {
        let config = ClientConfig::new(reqwest::Client::new(), base_url, "abc").unwrap();
        IdentityClient::new(config)
    }

    #[test]
    fn endpoint_is_plain_concatenation() {
        let client = client("https://idp.example.com/realm");
        assert_eq!(
            client.endpoint(TOKEN_PATH),
            "https://idp.example.com/realm/token"
        );
        assert_eq!(client.endpoint(AUTH_PATH), "https://idp.example.com/realm/auth");
        assert_eq!(
            client.endpoint(LOGOUT_PATH),
            "https://idp.example.com/realm/logout"
        );
    }

    #[test]
    fn endpoint_keeps_base_url_bytes() {
        // Mixed-case host and an explicit default port survive untouched.
        let base = "https://IdP.Example.com:443/realms/Acme/protocol/openid-connect";
        let client = client(base);
        assert_eq!(client.endpoint(TOKEN_PATH), format!("{base}/token"));
    }

    #[test]
    fn http_response_success_range() {
        let ok = HttpResponse { status: 204, data: () };
        let bad = HttpResponse { status: 400, data: () };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
