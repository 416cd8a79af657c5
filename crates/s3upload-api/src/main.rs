use anyhow::Context;
use s3upload_api::{setup, telemetry};
use s3upload_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    telemetry::init_telemetry()?;

    // Load configuration; the server must not start without it
    let config = Config::load().context("read config file failed")?;

    // Initialize the application (storage client, routes)
    let (_state, router) = setup::initialize_app(config.clone()).await?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
