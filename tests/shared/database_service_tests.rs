use std::time::Duration;

use futures_util::FutureExt;
use serde_json::Value;
use problem_details_api::shared::{
    domain::model::enums::{api_error::ApiError, database_error::DatabaseError},
    infrastructure::persistence::database_service::DataAccessError,
};

use crate::support::{create_database_harness, create_slow_database_harness};

#[tokio::test]
async fn execute_query_connects_lazily_and_reuses_the_handle() {
    let harness = create_database_harness();
    assert!(!harness.database.is_connected().await);

    let first = harness
        .database
        .execute_query("find user", |handle| async move { Ok(handle.0) })
        .await;
    let second = harness
        .database
        .execute_query("find user", |handle| async move { Ok(handle.0) })
        .await;

    assert_eq!(first, Ok(1));
    assert_eq!(second, Ok(1));
    assert_eq!(harness.store().connect_calls(), 1);
    assert!(harness.database.is_connected().await);
}

#[tokio::test]
async fn concurrent_first_callers_share_one_connect() {
    let harness = create_slow_database_harness(Duration::from_millis(50));

    let (left, right) = tokio::join!(
        harness
            .database
            .execute_query("left", |handle| async move { Ok(handle.0) }),
        harness
            .database
            .execute_query("right", |handle| async move { Ok(handle.0) }),
    );

    assert_eq!(left, Ok(1));
    assert_eq!(right, Ok(1));
    assert_eq!(harness.store().connect_calls(), 1);
}

#[tokio::test]
async fn connect_failure_surfaces_connection_failed_and_is_retried() {
    let harness = create_database_harness();
    harness.store().fail_connect(true);

    let result = harness
        .database
        .execute_query("find user", |_| async move { Ok(()) })
        .await;

    assert_eq!(result, Err(ApiError::Database(DatabaseError::ConnectionFailed)));
    assert!(!harness.database.is_connected().await);

    harness.store().fail_connect(false);
    let retried = harness
        .database
        .execute_query("find user", |_| async move { Ok(()) })
        .await;

    assert_eq!(retried, Ok(()));
    assert_eq!(harness.store().connect_calls(), 2);
}

#[tokio::test]
async fn taxonomy_errors_pass_through_queries_unchanged() {
    let harness = create_database_harness();

    let result: Result<(), ApiError> = harness
        .database
        .execute_query("find user", |_| async move {
            Err(DataAccessError::from(ApiError::not_found("User", 42)))
        })
        .await;

    let error = result.expect_err("not found should propagate");
    assert_eq!(error, ApiError::not_found("User", 42));
    assert_eq!(error.to_string(), "User with identifier '42' not found");
}

#[tokio::test]
async fn foreign_query_failures_are_wrapped_with_the_operation_label() {
    let harness = create_database_harness();

    let result: Result<(), ApiError> = harness
        .database
        .execute_query("find user", |_| async move {
            Err(DataAccessError::Other("timeout".to_string()))
        })
        .await;

    let error = result.expect_err("failure should be wrapped");
    assert_eq!(
        error,
        ApiError::Database(DatabaseError::QueryFailed {
            query: "find user".to_string(),
            cause: "timeout".to_string(),
        })
    );
    assert_eq!(error.to_string(), "Database query 'find user' failed: timeout");

    let problem = error.problem();
    assert_eq!(problem.status(), 500);
    assert_eq!(problem.extension("errorCode"), Some(&Value::from("DB_QUERY_FAILED")));
    assert_eq!(problem.extension("query"), Some(&Value::from("find user")));
    assert_eq!(problem.extension("originalError"), Some(&Value::from("timeout")));
}

#[tokio::test]
async fn pool_timeouts_become_timeout_errors() {
    let harness = create_database_harness();

    let result: Result<(), ApiError> = harness
        .database
        .execute_query("list users", |_| async move {
            Err(DataAccessError::from(sqlx::Error::PoolTimedOut))
        })
        .await;

    assert_eq!(
        result,
        Err(ApiError::Database(DatabaseError::timeout("list users", 1500)))
    );
}

#[tokio::test]
async fn transaction_commits_on_success() {
    let harness = create_database_harness();

    let result = harness
        .database
        .execute_transaction("create user", |_transaction| {
            async move { Ok::<_, DataAccessError>(7) }.boxed()
        })
        .await;

    assert_eq!(result, Ok(7));
    assert_eq!(harness.store().begin_calls(), 1);
    assert_eq!(harness.store().commits(), 1);
    assert_eq!(harness.store().rollbacks(), 0);
}

#[tokio::test]
async fn transaction_rolls_back_and_passes_taxonomy_errors_through() {
    let harness = create_database_harness();

    let result: Result<(), ApiError> = harness
        .database
        .execute_transaction("update user", |_transaction| {
            async move { Err(DataAccessError::from(ApiError::not_found("User", 9))) }.boxed()
        })
        .await;

    assert_eq!(result, Err(ApiError::not_found("User", 9)));
    assert_eq!(harness.store().commits(), 0);
    assert_eq!(harness.store().rollbacks(), 1);
}

#[tokio::test]
async fn transaction_rolls_back_and_wraps_foreign_failures() {
    let harness = create_database_harness();

    let result: Result<(), ApiError> = harness
        .database
        .execute_transaction("update user", |_transaction| {
            async move { Err(DataAccessError::Other("deadlock detected".to_string())) }.boxed()
        })
        .await;

    let error = result.expect_err("failure should be wrapped");
    assert_eq!(
        error.to_string(),
        "Database transaction failed during update user: deadlock detected"
    );
    assert_eq!(
        error.problem().extension("errorCode"),
        Some(&Value::from("DB_TRANSACTION_FAILED"))
    );
    assert_eq!(harness.store().rollbacks(), 1);
}

#[tokio::test]
async fn ping_reports_store_failures_as_query_failures() {
    let harness = create_database_harness();
    assert_eq!(harness.database.ping().await, Ok(()));

    harness.store().fail_ping(true);
    let error = harness
        .database
        .ping()
        .await
        .expect_err("ping should fail");

    assert!(matches!(
        error,
        ApiError::Database(DatabaseError::QueryFailed { ref query, .. }) if query == "health check"
    ));
}

#[tokio::test]
async fn close_connection_is_idempotent_and_allows_reconnect() {
    let harness = create_database_harness();
    harness
        .database
        .execute_query("find user", |_| async move { Ok(()) })
        .await
        .expect("query should succeed");

    harness.database.close_connection().await;
    harness.database.close_connection().await;
    assert!(!harness.database.is_connected().await);

    let handle = harness
        .database
        .execute_query("find user", |handle| async move { Ok(handle.0) })
        .await;

    assert_eq!(handle, Ok(2));
    assert_eq!(harness.store().connect_calls(), 2);
}
