use crate::shared::domain::model::enums::api_error::ApiError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct UserId(i32);

impl UserId {
    pub fn new(value: i32) -> Result<Self, ApiError> {
        if value <= 0 {
            return Err(invalid_user_id());
        }

        Ok(Self(value))
    }

    /// Parses a raw path segment.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let value = raw.trim().parse::<i32>().map_err(|_| invalid_user_id())?;
        Self::new(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

fn invalid_user_id() -> ApiError {
    ApiError::validation("User id must be a positive integer").with_extension("field", "id")
}
