use std::env;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter, Registry};
use utility_hub::{
    config::{CliArgs, ServerConfig},
    server,
};

// Main entrypoint for the API server

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let logger_env = env::var("LOGGER").unwrap_or_else(|_| "logfmt".to_string());

    let logger = match logger_env.as_str() {
        "pretty" => tracing_subscriber::fmt::layer().pretty().boxed(),
        "json" => tracing_subscriber::fmt::layer().json().boxed(),
        "compact" => tracing_subscriber::fmt::layer().compact().boxed(),
        _ => tracing_logfmt::layer().boxed(),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?
        .add_directive("tower=off".parse()?)
        .add_directive("hyper=error".parse()?)
        .add_directive("h2=error".parse()?)
        .add_directive("tower_http=info".parse()?);

    let collector = Registry::default().with(logger).with(env_filter);
    tracing::subscriber::set_global_default(collector)?;

    let config = ServerConfig::from_args(CliArgs::parse())?;

    info!("Utility Hub, version {}", env!("CARGO_PKG_VERSION"));
    info!(?config, "Starting up...");

    server::run(config).await
}
