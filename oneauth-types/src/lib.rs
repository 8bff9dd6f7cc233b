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

//! Wire types for the OpenID Connect authorization code flow.
//!
//! This crate defines the contract between `oneauth-client` and the identity
//! provider's `/token`, `/auth` and `/logout` endpoints. It is intentionally
//! transport-agnostic — no reqwest, no browser types.

pub mod error;
pub mod requests;
pub mod responses;

pub use error::ProviderError;
pub use requests::{
    AuthorizationCodeGrant, AuthorizationRequest, GrantType, ResponseType, SignOutClientField,
    SignOutRequest, TokenExchangeRequest, OPENID_SCOPE,
};
pub use responses::{TokenEndpointResponse, TokenResponse};
