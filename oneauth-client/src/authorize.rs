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

//! Authorization URL construction and the login redirect: `GET /auth`.

use oneauth_types::AuthorizationRequest;

use crate::environment::Environment;
use crate::error::OneAuthError;
use crate::{IdentityClient, AUTH_PATH};

impl IdentityClient {
    /// Build the authorization URL that sends the user back to `redirect_uri`.
    ///
    /// Query parameters are `client_id`, `redirect_uri`, `response_type=code`
    /// and `scope=openid`, form-urlencoded.
    pub fn authorization_url(&self, redirect_uri: &str) -> Result<String, OneAuthError> {
        let request = AuthorizationRequest::openid(self.config().client_id(), redirect_uri);
        let query = serde_urlencoded::to_string(&request)?;
        Ok(format!("{}?{}", self.endpoint(AUTH_PATH), query))
    }

    /// Navigate the current page to the provider's login page.
    ///
    /// The current page URL is read from `env` at call time and becomes the
    /// `redirect_uri`.
    pub fn begin_authorization_redirect<E: Environment>(
        &self,
        env: E,
    ) -> Result<(), OneAuthError> {
        let redirect_uri = env.current_url()?;
        let target = self.authorization_url(&redirect_uri)?;
        log::debug!(
            "Redirecting to authorization endpoint {}",
            self.endpoint(AUTH_PATH)
        );
        env.navigate(&target).inspect_err(|e| {
            log::warn!("Authorization redirect failed: {e}");
        })
    }
}
