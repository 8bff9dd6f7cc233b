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

use clap::Parser;
use oneauth_cli::cli_args::{Mode, Opt};
use oneauth_cli::commands;
use tracing::debug;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    debug!("Using provider {}", opt.provider.base_url);
    let client = commands::build_client(&opt.provider)?;

    match opt.mode {
        Mode::AuthorizeUrl(ref args) => {
            println!("{}", commands::authorize_url(&client, args)?);
        }
        Mode::Exchange(ref args) => commands::exchange(&client, args).await?,
        Mode::SignOut(ref args) => commands::sign_out(&client, args).await?,
    };

    Ok(())
}
