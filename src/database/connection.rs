use crate::{config::DatabaseConfig, error::Result};
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

pub async fn connect(config: &DatabaseConfig) -> Result<Database> {
    let mut options = ClientOptions::parse(&config.url).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.max_pool_size = Some(config.max_pool_size);

    let client = Client::with_options(options)?;
    let db = client.database(&config.database);

    db.run_command(doc! { "ping": 1 }).await?;

    tracing::info!(
        "Database connection established to {} with {} max connections",
        config.database,
        config.max_pool_size
    );

    Ok(db)
}

pub async fn check_health(db: &Database) -> Result<()> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
