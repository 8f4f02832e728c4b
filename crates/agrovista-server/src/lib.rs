//! Agrovista Server — configuration loading, service wiring, and the
//! dashboard facade that the presentation layer drives.

pub mod config;
pub mod dashboard;

use std::sync::Arc;

use agrovista_auth::AccountService;
use agrovista_cipher::FieldCipher;
use agrovista_db::DbError;
use agrovista_db::repository::{SurrealAccountRepository, SurrealHarvestRepository};
use agrovista_weather::WeatherClient;
use surrealdb::engine::remote::ws::Client;

pub use config::{ConfigError, ServerConfig};
pub use dashboard::Dashboard;

/// The fully wired dashboard over a remote SurrealDB connection.
pub type RemoteDashboard =
    Dashboard<SurrealAccountRepository<Client>, SurrealHarvestRepository<Client>>;

/// Connect to the database, apply migrations, and wire every
/// component. The field cipher is built once here and shared by
/// reference with the components that persist sensitive fields.
pub async fn bootstrap(config: &ServerConfig) -> Result<RemoteDashboard, DbError> {
    let db = config.db.connect().await?;
    agrovista_db::run_migrations(&db).await?;

    let cipher = Arc::new(FieldCipher::new(&config.cipher_key));

    let accounts = SurrealAccountRepository::new(db.clone());
    let accounts = match &config.pepper {
        Some(pepper) => AccountService::with_pepper(accounts, cipher.clone(), pepper.clone()),
        None => AccountService::new(accounts, cipher.clone()),
    };

    let harvests = SurrealHarvestRepository::new(db, cipher);
    let weather = WeatherClient::new(config.weather_api_key.clone());

    Ok(Dashboard::new(accounts, harvests, weather))
}
