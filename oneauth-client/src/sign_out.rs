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

//! Sign-out: `POST /logout` with the session cookie attached.

use oneauth_types::SignOutRequest;

use crate::error::OneAuthError;
use crate::request::{Credentials, FormPost};
use crate::{HttpResponse, IdentityClient, LOGOUT_PATH};

impl IdentityClient {
    /// Plan the sign-out request without sending it.
    pub fn sign_out_request(&self, request: &SignOutRequest) -> Result<FormPost, OneAuthError> {
        let config = self.config();
        let pairs = request.form_pairs(config.client_id(), config.sign_out_client_field());
        Ok(FormPost {
            endpoint: self.endpoint(LOGOUT_PATH),
            body: serde_urlencoded::to_string(&pairs[..])?,
            credentials: Credentials::Include,
        })
    }

    /// End the provider session for `refresh_token`.
    ///
    /// Calls `POST /logout` with credentials included. Only the status is
    /// returned; the body is not read.
    ///
    /// Browsers attach the session cookie through `fetch`. On native targets
    /// cookies are only sent if the configured `reqwest::Client` has a cookie
    /// store.
    ///
    /// The client id goes in `client_id`; use
    /// [`with_sign_out_client_field`](crate::ClientConfig::with_sign_out_client_field)
    /// for providers expecting `clientId`.
    pub async fn request_sign_out(
        &self,
        refresh_token: &str,
    ) -> Result<HttpResponse<()>, OneAuthError> {
        let request = SignOutRequest {
            refresh_token: refresh_token.to_string(),
        };
        let response = self.send(self.sign_out_request(&request)?).await?;
        Ok(HttpResponse {
            status: response.status().as_u16(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use oneauth_types::{SignOutClientField, SignOutRequest};

    use crate::{ClientConfig, Credentials, IdentityClient};

    fn config() -> ClientConfig {
        ClientConfig::new(reqwest::Client::new(), "https://idp.example.com/realm", "abc").unwrap()
    }

    fn request() -> SignOutRequest {
        SignOutRequest {
            refresh_token: "REFRESH1".to_string(),
        }
    }

    #[test]
    fn sign_out_includes_credentials() {
        let plan = IdentityClient::new(config())
            .sign_out_request(&request())
            .unwrap();

        assert_eq!(plan.endpoint, "https://idp.example.com/realm/logout");
        assert_eq!(plan.credentials, Credentials::Include);
        assert_eq!(plan.body, "client_id=abc&refresh_token=REFRESH1");
    }

    #[test]
    fn sign_out_camel_case_field() {
        let client = IdentityClient::new(
            config().with_sign_out_client_field(SignOutClientField::CamelCase),
        );
        let plan = client.sign_out_request(&request()).unwrap();

        assert_eq!(plan.body, "clientId=abc&refresh_token=REFRESH1");
        assert_eq!(plan.credentials, Credentials::Include);
    }
}
