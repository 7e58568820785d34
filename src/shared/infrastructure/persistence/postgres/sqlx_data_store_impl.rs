use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction, migrate, postgres::PgPoolOptions};

use crate::{
    config::app_config::AppConfig, shared::infrastructure::persistence::data_store::DataStore,
};

pub struct SqlxDataStoreImpl {
    database_url: String,
    max_connections: u32,
    acquire_timeout: Duration,
}

impl SqlxDataStoreImpl {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            database_url: config.database_url(),
            max_connections: config.database_max_connections,
            acquire_timeout: Duration::from_millis(config.database_acquire_timeout_ms),
        }
    }
}

#[async_trait]
impl DataStore for SqlxDataStoreImpl {
    type Handle = PgPool;
    type Transaction = Transaction<'static, Postgres>;

    async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.database_url)
            .await?;

        migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    async fn ping(&self, handle: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(handle).await?;
        Ok(())
    }

    async fn begin(&self, handle: &PgPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        handle.begin().await
    }

    async fn commit(&self, transaction: Transaction<'static, Postgres>) -> Result<(), sqlx::Error> {
        transaction.commit().await
    }

    async fn rollback(
        &self,
        transaction: Transaction<'static, Postgres>,
    ) -> Result<(), sqlx::Error> {
        transaction.rollback().await
    }

    fn acquire_timeout(&self) -> Duration {
        self.acquire_timeout
    }
}
