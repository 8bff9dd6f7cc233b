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

//! Network-free description of the form POSTs sent to the provider.

use reqwest::header::CONTENT_TYPE;

/// Content type of every POST body sent by the client.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Whether ambient credentials (session cookies) accompany a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Credentials {
    /// The transport's default behaviour (`same-origin` in browsers).
    #[default]
    SameOrigin,
    /// Attach cookies even on cross-origin requests.
    Include,
}

/// A fully resolved form POST: target, encoded body and credentials mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPost {
    pub endpoint: String,
    pub body: String,
    pub credentials: Credentials,
}

impl FormPost {
    pub fn content_type(&self) -> &'static str {
        FORM_CONTENT_TYPE
    }

    /// Build the request on `http`. Nothing is sent until the builder is.
    pub fn into_request_builder(self, http: &reqwest::Client) -> reqwest::RequestBuilder {
        let builder = http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(self.body);
        apply_credentials(builder, self.credentials)
    }
}

fn apply_credentials(
    builder: reqwest::RequestBuilder,
    credentials: Credentials,
) -> reqwest::RequestBuilder {
    match credentials {
        Credentials::SameOrigin => builder,
        Credentials::Include => {
            #[cfg(target_arch = "wasm32")]
            {
                builder.fetch_credentials_include()
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                // Native clients attach cookies from their own cookie store.
                builder
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_form_post_request() {
        let plan = FormPost {
            endpoint: "https://idp.example.com/realm/token".to_string(),
            body: "code=CODE123".to_string(),
            credentials: Credentials::SameOrigin,
        };
        let request = plan
            .into_request_builder(&reqwest::Client::new())
            .build()
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "https://idp.example.com/realm/token");
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            FORM_CONTENT_TYPE
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"code=CODE123");
    }

    #[test]
    fn malformed_endpoint_fails_at_build_time() {
        let plan = FormPost {
            endpoint: "not a url/token".to_string(),
            body: String::new(),
            credentials: Credentials::Include,
        };
        assert!(plan
            .into_request_builder(&reqwest::Client::new())
            .build()
            .is_err());
    }
}
