//! Data-access facade: every repository reaches the store through here.

use std::future::Future;

use futures_util::future::BoxFuture;
use sqlx::error::ErrorKind;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::shared::{
    domain::model::enums::{api_error::ApiError, database_error::DatabaseError},
    infrastructure::persistence::data_store::DataStore,
};

/// Failure raised from inside a query or transaction closure.
///
/// Taxonomy members pass through the facade unchanged; everything else is
/// wrapped in the matching database error.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error(transparent)]
    Classified(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] sqlx::Error),

    #[error("{0}")]
    Other(String),
}

fn query_failure(operation: &str, cause: String) -> DatabaseError {
    DatabaseError::query_failed(operation, cause)
}

fn transaction_failure(operation: &str, cause: String) -> DatabaseError {
    DatabaseError::transaction_failed(operation, cause)
}

pub struct DatabaseService<S: DataStore> {
    store: S,
    handle: Mutex<Option<S::Handle>>,
}

impl<S: DataStore> DatabaseService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            handle: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the cached handle, connecting on first use.
    ///
    /// The lock is held across the connect so concurrent first callers share a
    /// single connection attempt.
    pub async fn connection(&self) -> Result<S::Handle, ApiError> {
        let mut cached = self.handle.lock().await;
        if let Some(handle) = cached.as_ref() {
            return Ok(handle.clone());
        }

        let handle = self.store.connect().await.map_err(|error| {
            tracing::error!(error = %error, "Failed to establish database connection");
            ApiError::from(DatabaseError::ConnectionFailed)
        })?;
        tracing::info!("Database connection established");

        *cached = Some(handle.clone());
        Ok(handle)
    }

    pub async fn execute_query<T, F, Fut>(&self, operation: &str, query_fn: F) -> Result<T, ApiError>
    where
        F: FnOnce(S::Handle) -> Fut + Send,
        Fut: Future<Output = Result<T, DataAccessError>> + Send,
        T: Send,
    {
        let handle = self.connection().await?;

        query_fn(handle)
            .await
            .map_err(|error| self.wrap_failure(operation, error, query_failure))
    }

    /// Runs `transaction_fn` inside a transaction, committing on success and
    /// rolling back on any failure.
    pub async fn execute_transaction<T, F>(
        &self,
        operation: &str,
        transaction_fn: F,
    ) -> Result<T, ApiError>
    where
        F: for<'t> FnOnce(&'t mut S::Transaction) -> BoxFuture<'t, Result<T, DataAccessError>>
            + Send,
        T: Send,
    {
        let handle = self.connection().await?;
        let mut transaction = self.store.begin(&handle).await.map_err(|error| {
            self.wrap_failure(
                operation,
                DataAccessError::Store(error),
                transaction_failure,
            )
        })?;

        match transaction_fn(&mut transaction).await {
            Ok(value) => {
                self.store.commit(transaction).await.map_err(|error| {
                    self.wrap_failure(
                        operation,
                        DataAccessError::Store(error),
                        transaction_failure,
                    )
                })?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = self.store.rollback(transaction).await {
                    tracing::warn!(
                        operation,
                        error = %rollback_error,
                        "Database transaction rollback failed"
                    );
                }
                Err(self.wrap_failure(operation, error, transaction_failure))
            }
        }
    }

    pub async fn ping(&self) -> Result<(), ApiError> {
        let store = &self.store;
        self.execute_query("health check", |handle| async move {
            store.ping(&handle).await.map_err(DataAccessError::from)
        })
        .await
    }

    /// Drops the cached handle. Calling it again is a no-op.
    pub async fn close_connection(&self) {
        if self.handle.lock().await.take().is_some() {
            tracing::info!("Database connection closed");
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.handle.lock().await.is_some()
    }

    fn wrap_failure(
        &self,
        operation: &str,
        error: DataAccessError,
        wrap: fn(&str, String) -> DatabaseError,
    ) -> ApiError {
        match error {
            DataAccessError::Classified(error) => {
                tracing::debug!(operation, error = %error, "Database {operation} raised a domain failure");
                error
            }
            DataAccessError::Store(error) => {
                tracing::error!(operation, error = %error, "Database {operation} failed");
                self.classify_store_error(operation, &error)
                    .unwrap_or_else(|| wrap(operation, error.to_string()))
                    .into()
            }
            DataAccessError::Other(message) => {
                tracing::error!(operation, error = %message, "Database {operation} failed");
                wrap(operation, message).into()
            }
        }
    }

    fn classify_store_error(&self, operation: &str, error: &sqlx::Error) -> Option<DatabaseError> {
        match error {
            sqlx::Error::PoolTimedOut => Some(DatabaseError::timeout(
                operation,
                u64::try_from(self.store.acquire_timeout().as_millis()).unwrap_or(u64::MAX),
            )),
            sqlx::Error::Database(database_error) => match database_error.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Some(DatabaseError::constraint_violation(
                    database_error.constraint().unwrap_or("unknown"),
                    database_error.table().unwrap_or("unknown"),
                )),
                _ => None,
            },
            _ => None,
        }
    }
}
