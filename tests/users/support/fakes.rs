use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use problem_details_api::{
    shared::domain::model::enums::api_error::ApiError,
    users::{
        domain::model::{
            entities::user::User,
            queries::list_users_query::{ListUsersQuery, UserSortField},
            value_objects::{user_email::UserEmail, user_id::UserId, user_name::UserName},
        },
        infrastructure::persistence::repositories::user_repository::UserRepository,
    },
};

#[derive(Default)]
struct FakeUserState {
    users: Vec<User>,
    next_id: i32,
    create_calls: usize,
    update_calls: usize,
    failure: Option<ApiError>,
}

pub struct FakeUserRepository {
    state: Mutex<FakeUserState>,
    clock: DateTime<Utc>,
}

impl FakeUserRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeUserState {
                next_id: 1,
                ..FakeUserState::default()
            }),
            clock: DateTime::parse_from_rfc3339("2024-03-01T12:30:00Z")
                .expect("valid timestamp")
                .with_timezone(&Utc),
        }
    }

    pub fn insert(&self, email: &str, name: &str) -> User {
        let mut state = self.state.lock().expect("mutex poisoned");
        let user = User::restore(
            UserId::new(state.next_id).expect("positive id"),
            UserEmail::new(email.to_string()).expect("valid email"),
            UserName::new(name.to_string()).expect("valid name"),
            self.clock,
            self.clock,
        );
        state.next_id += 1;
        state.users.push(user.clone());
        user
    }

    /// Every subsequent call fails with `error`.
    pub fn fail_with(&self, error: ApiError) {
        self.state.lock().expect("mutex poisoned").failure = Some(error);
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").create_calls
    }

    pub fn update_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").update_calls
    }

    pub fn len(&self) -> usize {
        self.state.lock().expect("mutex poisoned").users.len()
    }

    fn check_failure(state: &FakeUserState) -> Result<(), ApiError> {
        match &state.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn create(&self, email: &UserEmail, name: &UserName) -> Result<User, ApiError> {
        {
            let mut state = self.state.lock().expect("mutex poisoned");
            state.create_calls += 1;
            Self::check_failure(&state)?;
        }
        Ok(self.insert(email.value(), name.value()))
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, ApiError> {
        let state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;
        Ok(state.users.iter().find(|user| user.id() == user_id).cloned())
    }

    async fn find_by_email(&self, email: &UserEmail) -> Result<Option<User>, ApiError> {
        let state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;
        Ok(state.users.iter().find(|user| user.email() == email).cloned())
    }

    async fn list(&self, query: &ListUsersQuery) -> Result<(Vec<User>, u64), ApiError> {
        let state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;

        let mut users = state.users.clone();
        match query.sort_field() {
            UserSortField::Email => users.sort_by(|a, b| a.email().value().cmp(b.email().value())),
            UserSortField::Name => users.sort_by(|a, b| a.name().value().cmp(b.name().value())),
            _ => users.sort_by_key(|user| user.id().value()),
        }
        if query.sort_order().as_sql() == "DESC" {
            users.reverse();
        }

        let total = users.len() as u64;
        let window = users
            .into_iter()
            .skip(usize::try_from(query.pagination().offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(query.pagination().limit()).unwrap_or(usize::MAX))
            .collect();
        Ok((window, total))
    }

    async fn update(
        &self,
        user_id: UserId,
        email: Option<&UserEmail>,
        name: Option<&UserName>,
    ) -> Result<User, ApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.update_calls += 1;
        Self::check_failure(&state)?;

        let position = state
            .users
            .iter()
            .position(|user| user.id() == user_id)
            .ok_or_else(|| ApiError::not_found("User", user_id.value()))?;
        let current = state.users[position].clone();
        let updated = User::restore(
            current.id(),
            email.cloned().unwrap_or_else(|| current.email().clone()),
            name.cloned().unwrap_or_else(|| current.name().clone()),
            current.created_at(),
            self.clock,
        );
        state.users[position] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, user_id: UserId) -> Result<(), ApiError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_failure(&state)?;

        let before = state.users.len();
        state.users.retain(|user| user.id() != user_id);
        if state.users.len() == before {
            return Err(ApiError::not_found("User", user_id.value()));
        }
        Ok(())
    }
}
