use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "could not connect to postgres");
            DatabaseError::ConnectionError
        })
}

/// Applies the SQL migrations found in `migrations_path`.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.exists() {
        tracing::error!(path = migrations_path, "migrations directory not found");
        return Err(DatabaseError::MigrationError);
    }

    let migrator = sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?;
    migrator.run(pool).await.map_err(|err| {
        tracing::error!(error = %err, "migration failed");
        DatabaseError::MigrationError
    })?;

    tracing::info!(count = migrator.iter().count(), "migrations applied");
    Ok(())
}
