use consent_hub::server::{config::Config, error::Error, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let _db = startup::connect_to_database(&config).await?;

    tracing::info!(
        blob_container = %config.blob_container,
        "Database connected and migrations applied, consent hub ready"
    );

    Ok(())
}
