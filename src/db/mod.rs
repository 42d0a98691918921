//! Database module providing connection management and report queries.

pub mod queries;

use sea_orm::{Database, DatabaseConnection};

use crate::config::Config;
use crate::error::AppResult;

/// Database connection wrapper shared across request handlers.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect to the database from configuration.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let conn = Database::connect(&config.database_url).await?;
        Ok(DbPool { conn })
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
