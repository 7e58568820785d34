use validator::ValidateEmail;

use crate::shared::domain::model::enums::api_error::ApiError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn new(value: String) -> Result<Self, ApiError> {
        let normalized = value.trim().to_lowercase();

        if normalized.chars().count() > 255 || !normalized.validate_email() {
            return Err(
                ApiError::validation("Invalid email format").with_extension("field", "email")
            );
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
