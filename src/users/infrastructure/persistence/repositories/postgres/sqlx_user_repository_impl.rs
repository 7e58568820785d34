use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, postgres::PgRow};

use crate::{
    shared::{
        domain::model::enums::api_error::ApiError,
        infrastructure::persistence::{
            database_service::{DataAccessError, DatabaseService},
            postgres::sqlx_data_store_impl::SqlxDataStoreImpl,
        },
    },
    users::{
        domain::model::{
            entities::user::User,
            queries::list_users_query::ListUsersQuery,
            value_objects::{user_email::UserEmail, user_id::UserId, user_name::UserName},
        },
        infrastructure::persistence::repositories::user_repository::UserRepository,
    },
};

const USER_COLUMNS: &str = "id, email, name, created_at, updated_at";

pub struct SqlxUserRepositoryImpl {
    database: Arc<DatabaseService<SqlxDataStoreImpl>>,
}

impl SqlxUserRepositoryImpl {
    pub fn new(database: Arc<DatabaseService<SqlxDataStoreImpl>>) -> Self {
        Self { database }
    }

    fn row_to_entity(row: PgRow) -> Result<User, DataAccessError> {
        let id: i32 = row.try_get("id")?;
        let email: String = row.try_get("email")?;
        let name: String = row.try_get("name")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

        Ok(User::restore(
            UserId::new(id).map_err(|_| invalid_stored_row("id"))?,
            UserEmail::new(email).map_err(|_| invalid_stored_row("email"))?,
            UserName::new(name).map_err(|_| invalid_stored_row("name"))?,
            created_at,
            updated_at,
        ))
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepositoryImpl {
    async fn create(&self, email: &UserEmail, name: &UserName) -> Result<User, ApiError> {
        let statement = format!(
            r#"
            INSERT INTO users (email, name)
            VALUES ($1, $2)
            RETURNING {USER_COLUMNS}
            "#
        );
        let email = email.value().to_string();
        let name = name.value().to_string();

        self.database
            .execute_query("create user", move |pool| async move {
                let row = sqlx::query(&statement)
                    .bind(email)
                    .bind(name)
                    .fetch_one(&pool)
                    .await?;

                Self::row_to_entity(row)
            })
            .await
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, ApiError> {
        let statement = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        self.database
            .execute_query("find user by id", move |pool| async move {
                let maybe_row = sqlx::query(&statement)
                    .bind(user_id.value())
                    .fetch_optional(&pool)
                    .await?;

                maybe_row.map(Self::row_to_entity).transpose()
            })
            .await
    }

    async fn find_by_email(&self, email: &UserEmail) -> Result<Option<User>, ApiError> {
        let statement = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let email = email.value().to_string();

        self.database
            .execute_query("find user by email", move |pool| async move {
                let maybe_row = sqlx::query(&statement)
                    .bind(email)
                    .fetch_optional(&pool)
                    .await?;

                maybe_row.map(Self::row_to_entity).transpose()
            })
            .await
    }

    async fn list(&self, query: &ListUsersQuery) -> Result<(Vec<User>, u64), ApiError> {
        // Sort column and direction come from closed enums, never from raw input.
        let statement = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            ORDER BY {} {}, id ASC
            LIMIT $1 OFFSET $2
            "#,
            query.sort_field().column(),
            query.sort_order().as_sql()
        );
        let limit = i64::try_from(query.pagination().limit()).unwrap_or(i64::MAX);
        let offset = i64::try_from(query.pagination().offset()).unwrap_or(i64::MAX);

        self.database
            .execute_query("find all users", move |pool| async move {
                let rows = sqlx::query(&statement)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&pool)
                    .await?;
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                    .fetch_one(&pool)
                    .await?;

                let users = rows
                    .into_iter()
                    .map(Self::row_to_entity)
                    .collect::<Result<Vec<_>, _>>()?;

                Ok::<_, DataAccessError>((users, u64::try_from(total).unwrap_or(0)))
            })
            .await
    }

    async fn update(
        &self,
        user_id: UserId,
        email: Option<&UserEmail>,
        name: Option<&UserName>,
    ) -> Result<User, ApiError> {
        let statement = format!(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                name = COALESCE($3, name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );
        let email = email.map(|email| email.value().to_string());
        let name = name.map(|name| name.value().to_string());

        self.database
            .execute_transaction("update user", move |transaction| {
                Box::pin(async move {
                    let existing = sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
                        .bind(user_id.value())
                        .fetch_optional(&mut **transaction)
                        .await?;
                    if existing.is_none() {
                        return Err(ApiError::not_found("User", user_id.value()).into());
                    }

                    let row = sqlx::query(&statement)
                        .bind(user_id.value())
                        .bind(email)
                        .bind(name)
                        .fetch_one(&mut **transaction)
                        .await?;

                    Self::row_to_entity(row)
                })
            })
            .await
    }

    async fn delete(&self, user_id: UserId) -> Result<(), ApiError> {
        self.database
            .execute_query("delete user", move |pool| async move {
                let result = sqlx::query("DELETE FROM users WHERE id = $1")
                    .bind(user_id.value())
                    .execute(&pool)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(ApiError::not_found("User", user_id.value()).into());
                }

                Ok::<_, DataAccessError>(())
            })
            .await
    }
}

fn invalid_stored_row(column: &str) -> DataAccessError {
    DataAccessError::Other(format!("stored user {column} is invalid"))
}
