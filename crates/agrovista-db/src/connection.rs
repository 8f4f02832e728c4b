//! SurrealDB connection management.

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

/// Connection settings for the dashboard's SurrealDB instance.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket URL, e.g. `127.0.0.1:8000`.
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "agrovista".into(),
            database: "dashboard".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

impl DbConfig {
    /// Open a connection, sign in as root, and select the configured
    /// namespace and database.
    pub async fn connect(&self) -> Result<Surreal<Client>, surrealdb::Error> {
        info!(
            url = %self.url,
            namespace = %self.namespace,
            database = %self.database,
            "Connecting to SurrealDB"
        );

        let db = Surreal::new::<Ws>(&self.url).await?;

        db.signin(Root {
            username: self.username.clone(),
            password: self.password.clone(),
        })
        .await?;

        db.use_ns(&self.namespace).use_db(&self.database).await?;

        info!("SurrealDB connection established");

        Ok(db)
    }
}
