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

use clap::{Args, Parser, Subcommand};
use oneauth_client::oneauth_types::SignOutClientField;
use url::Url;

/// OneAuth CLI
///
/// Runs the authorization code flow against an OpenID Connect provider:
/// print the login URL, exchange the code it returns, and sign out.
#[derive(Parser, Debug)]
#[clap(name = "oneauth")]
pub struct Opt {
    #[clap(flatten)]
    pub provider: Provider,

    #[clap(subcommand)]
    pub mode: Mode,
}

#[derive(Args, Debug, Clone)]
pub struct Provider {
    /// Provider base URL without a trailing slash,
    /// e.g. https://idp.example.com/realms/acme/protocol/openid-connect
    #[clap(long = "base-url", env = "ONEAUTH_BASE_URL")]
    pub base_url: String,

    /// Client identifier registered with the provider.
    #[clap(long = "client-id", env = "ONEAUTH_CLIENT_ID")]
    pub client_id: String,

    /// Field name carrying the client id on sign-out (client_id or clientId).
    #[clap(
        long = "sign-out-field",
        env = "ONEAUTH_SIGN_OUT_FIELD",
        default_value = "client_id"
    )]
    pub sign_out_field: SignOutClientField,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Print the authorization URL the browser would be sent to.
    AuthorizeUrl(AuthorizeUrl),

    /// Exchange an authorization code for tokens.
    Exchange(Exchange),

    /// End the provider session for a refresh token.
    SignOut(SignOut),
}

#[derive(Args, Debug, Clone)]
pub struct AuthorizeUrl {
    /// URL of the page starting the login; the provider redirects back here.
    #[clap(long = "current-url", value_parser = parse_url_verbatim)]
    pub current_url: String,
}

#[derive(Args, Debug, Clone)]
pub struct Exchange {
    /// Redirect URI used when the code was issued.
    #[clap(long = "redirect-uri", value_parser = parse_url_verbatim)]
    pub redirect_uri: String,

    /// Authorization code from the redirect.
    #[clap(long = "code")]
    pub code: String,
}

#[derive(Args, Debug, Clone)]
pub struct SignOut {
    #[clap(long = "refresh-token")]
    pub refresh_token: String,
}

/// Checks that `s` is an absolute URL but keeps it byte for byte, since the
/// provider compares redirect URIs as exact strings.
fn parse_url_verbatim(s: &str) -> Result<String, url::ParseError> {
    Url::parse(s)?;
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exchange() {
        let opt = Opt::try_parse_from([
            "oneauth",
            "--base-url",
            "https://idp.example.com/realm",
            "--client-id",
            "abc",
            "exchange",
            "--redirect-uri",
            "https://app.example.com/cb",
            "--code",
            "CODE123",
        ])
        .unwrap();

        assert_eq!(opt.provider.client_id, "abc");
        assert_eq!(opt.provider.sign_out_field, SignOutClientField::ClientId);
        match opt.mode {
            Mode::Exchange(e) => assert_eq!(e.code, "CODE123"),
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn parses_sign_out_field() {
        let opt = Opt::try_parse_from([
            "oneauth",
            "--base-url",
            "https://idp.example.com/realm",
            "--client-id",
            "abc",
            "--sign-out-field",
            "clientId",
            "sign-out",
            "--refresh-token",
            "REFRESH1",
        ])
        .unwrap();

        assert_eq!(opt.provider.sign_out_field, SignOutClientField::CamelCase);
    }

    #[test]
    fn keeps_redirect_uri_as_typed() {
        let opt = Opt::try_parse_from([
            "oneauth",
            "--base-url",
            "https://idp.example.com/realm",
            "--client-id",
            "abc",
            "exchange",
            "--redirect-uri",
            "https://App.Example.com",
            "--code",
            "CODE123",
        ])
        .unwrap();

        match opt.mode {
            Mode::Exchange(e) => assert_eq!(e.redirect_uri, "https://App.Example.com"),
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_current_url() {
        let result = Opt::try_parse_from([
            "oneauth",
            "--base-url",
            "https://idp.example.com/realm",
            "--client-id",
            "abc",
            "authorize-url",
            "--current-url",
            "not a url",
        ]);
        assert!(result.is_err());
    }
}
