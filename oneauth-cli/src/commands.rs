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

use anyhow::{anyhow, Context};
use oneauth_client::oneauth_types::{TokenEndpointResponse, TokenExchangeRequest};
use oneauth_client::{ClientConfig, HeadlessEnvironment, IdentityClient};
use tracing::{info, warn};

use crate::cli_args::{AuthorizeUrl, Exchange, Provider, SignOut};

pub fn build_client(provider: &Provider) -> anyhow::Result<IdentityClient> {
    let config = ClientConfig::new(
        reqwest::Client::new(),
        &provider.base_url,
        &provider.client_id,
    )
    .context("invalid provider configuration")?
    .with_sign_out_client_field(provider.sign_out_field);
    Ok(IdentityClient::new(config))
}

/// Returns the URL a browser on `current_url` would be sent to.
pub fn authorize_url(client: &IdentityClient, args: &AuthorizeUrl) -> anyhow::Result<String> {
    let env = HeadlessEnvironment::new(&args.current_url);
    client.begin_authorization_redirect(&env)?;
    env.last_navigation()
        .ok_or_else(|| anyhow!("authorization redirect did not navigate"))
}

pub fn exchange_request(args: &Exchange) -> TokenExchangeRequest {
    TokenExchangeRequest {
        redirect_uri: args.redirect_uri.clone(),
        authorization_code: args.code.clone(),
    }
}

pub async fn exchange(client: &IdentityClient, args: &Exchange) -> anyhow::Result<()> {
    let response = client.request_token_with(&exchange_request(args)).await?;

    match &response.data {
        TokenEndpointResponse::Issued(_) => info!("Token endpoint answered {}", response.status),
        TokenEndpointResponse::Rejected(err) => {
            warn!("Token endpoint answered {}: {err}", response.status)
        }
    }
    println!("{}", serde_json::to_string_pretty(&response.data)?);
    Ok(())
}

pub async fn sign_out(client: &IdentityClient, args: &SignOut) -> anyhow::Result<()> {
    let response = client.request_sign_out(&args.refresh_token).await?;
    if response.is_success() {
        info!("Signed out ({})", response.status);
    } else {
        warn!("Logout endpoint answered {}", response.status);
    }
    println!("{}", response.status);
    Ok(())
}
