use anyhow::Result;
use clap::Parser;
use url_shortener_edge::config::Config;
use url_shortener_edge::{server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::parse();
    telemetry::init(&config.log_level, &config.log_format)?;
    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting {}",
        env!("CARGO_PKG_NAME")
    );
    config.print_summary();

    server::run(config).await
}
