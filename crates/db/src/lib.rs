use mongodb::bson::doc;
use mongodb::{Client, Database};

pub mod error;
pub mod models;
pub mod repositories;

pub use error::StoreError;

/// Database used when neither the caller nor the connection string names one.
pub const DEFAULT_DATABASE: &str = "test";

/// Connect to MongoDB and select the database holding the movie collection.
///
/// `database` overrides the default database named in the connection string.
/// The returned handle shares the client's connection pool and is cheap to
/// clone.
pub async fn connect(uri: &str, database: Option<&str>) -> Result<Database, StoreError> {
    let client = Client::with_uri_str(uri).await?;
    let db = match database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    };
    tracing::debug!(database = %db.name(), "Selected MongoDB database");
    Ok(db)
}

/// Round-trip a `ping` command to verify the server is reachable.
pub async fn health_check(db: &Database) -> Result<(), StoreError> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
