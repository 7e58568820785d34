use regex::Regex;

use crate::shared::domain::model::enums::api_error::ApiError;

lazy_static::lazy_static! {
    static ref MARKUP_CHARACTERS: Regex = Regex::new("[<>]").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Trims the value and strips `<` and `>` before checking `1..=255` characters.
    pub fn new(value: String) -> Result<Self, ApiError> {
        let sanitized = MARKUP_CHARACTERS.replace_all(value.trim(), "").trim().to_string();

        if sanitized.is_empty() {
            return Err(ApiError::validation("Name is required").with_extension("field", "name"));
        }
        if sanitized.chars().count() > 255 {
            return Err(ApiError::validation("Name too long").with_extension("field", "name"));
        }

        Ok(Self(sanitized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
