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

//! Error types for the identity client.

use thiserror::Error;

/// Errors returned by [`IdentityClient`](crate::IdentityClient) methods.
///
/// Non-2xx responses are not errors; they come back as
/// [`HttpResponse`](crate::HttpResponse) with the provider's status.
#[derive(Debug, Error)]
pub enum OneAuthError {
    /// Rejected at construction (e.g. empty client id, trailing slash).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A network or transport error, including malformed endpoint URLs.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not a token payload nor a provider error.
    #[error("Malformed response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },

    /// A form body or query string could not be encoded.
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// The page environment could not be read or navigated.
    #[error("Environment error: {0}")]
    Environment(String),
}
