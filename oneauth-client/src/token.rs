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

//! Authorization code → token exchange: `POST /token`.

use oneauth_types::{AuthorizationCodeGrant, TokenEndpointResponse, TokenExchangeRequest};

use crate::error::OneAuthError;
use crate::request::{Credentials, FormPost};
use crate::{HttpResponse, IdentityClient, TOKEN_PATH};

impl IdentityClient {
    /// Plan the token exchange without sending it.
    ///
    /// The body is `redirect_uri`, `code`, `client_id` and
    /// `grant_type=authorization_code`, in that order.
    pub fn token_request(&self, request: &TokenExchangeRequest) -> Result<FormPost, OneAuthError> {
        let grant = AuthorizationCodeGrant::new(request, self.config().client_id());
        Ok(FormPost {
            endpoint: self.endpoint(TOKEN_PATH),
            body: serde_urlencoded::to_string(&grant)?,
            credentials: Credentials::SameOrigin,
        })
    }

    /// Exchange an authorization code for tokens.
    ///
    /// Calls `POST /token`. The status is passed through; a provider error
    /// body decodes to [`TokenEndpointResponse::Rejected`].
    pub async fn request_token(
        &self,
        redirect_uri: &str,
        authorization_code: &str,
    ) -> Result<HttpResponse<TokenEndpointResponse>, OneAuthError> {
        let request = TokenExchangeRequest {
            redirect_uri: redirect_uri.to_string(),
            authorization_code: authorization_code.to_string(),
        };
        self.request_token_with(&request).await
    }

    /// Same as [`request_token`](Self::request_token), taking a prepared request.
    pub async fn request_token_with(
        &self,
        request: &TokenExchangeRequest,
    ) -> Result<HttpResponse<TokenEndpointResponse>, OneAuthError> {
        let plan = self.token_request(request)?;
        let response = self.send(plan).await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        let data: TokenEndpointResponse = serde_json::from_slice(&body)
            .map_err(|source| OneAuthError::Decode { status, source })?;

        if let TokenEndpointResponse::Rejected(err) = &data {
            log::warn!("Token endpoint rejected the grant. Status: {status}, Error: {err}");
        }

        Ok(HttpResponse { status, data })
    }
}

#[cfg(test)]
mod tests {
    use crate::{ClientConfig, Credentials, IdentityClient};
    use oneauth_types::TokenExchangeRequest;

    fn client() -> IdentityClient {
        IdentityClient::new(
            ClientConfig::new(reqwest::Client::new(), "https://idp.example.com/realm", "abc")
                .unwrap(),
        )
    }

    #[test]
    fn token_request_matches_wire_contract() {
        let plan = client()
            .token_request(&TokenExchangeRequest {
                redirect_uri: "https://app.example.com/cb".to_string(),
                authorization_code: "CODE123".to_string(),
            })
            .unwrap();

        assert_eq!(plan.endpoint, "https://idp.example.com/realm/token");
        assert_eq!(
            plan.body,
            "redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb&code=CODE123&client_id=abc&grant_type=authorization_code"
        );
        assert_eq!(plan.credentials, Credentials::SameOrigin);
        assert_eq!(plan.content_type(), "application/x-www-form-urlencoded");
    }

    #[test]
    fn token_body_has_exactly_four_fields() {
        let plan = client()
            .token_request(&TokenExchangeRequest {
                redirect_uri: "https://app.example.com/cb?next=/home&lang=en".to_string(),
                authorization_code: "a b&c=d".to_string(),
            })
            .unwrap();

        let fields: Vec<(String, String)> = serde_urlencoded::from_str(&plan.body).unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(
            fields,
            vec![
                (
                    "redirect_uri".to_string(),
                    "https://app.example.com/cb?next=/home&lang=en".to_string()
                ),
                ("code".to_string(), "a b&c=d".to_string()),
                ("client_id".to_string(), "abc".to_string()),
                ("grant_type".to_string(), "authorization_code".to_string()),
            ]
        );
    }
}
