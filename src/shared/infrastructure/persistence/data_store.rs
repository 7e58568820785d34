use std::time::Duration;

use async_trait::async_trait;

/// Underlying relational store reached through the data-access facade.
///
/// Commit and rollback semantics are the store's own.
#[async_trait]
pub trait DataStore: Send + Sync {
    type Handle: Clone + Send + Sync + 'static;
    type Transaction: Send + 'static;

    async fn connect(&self) -> Result<Self::Handle, sqlx::Error>;

    async fn ping(&self, handle: &Self::Handle) -> Result<(), sqlx::Error>;

    async fn begin(&self, handle: &Self::Handle) -> Result<Self::Transaction, sqlx::Error>;

    async fn commit(&self, transaction: Self::Transaction) -> Result<(), sqlx::Error>;

    async fn rollback(&self, transaction: Self::Transaction) -> Result<(), sqlx::Error>;

    /// How long the store waits for a connection before giving up.
    fn acquire_timeout(&self) -> Duration;
}
