//! RFC 7807 Problem Details payload.

use axum::http::StatusCode;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::domain::model::{
    enums::problem_type::ProblemType, value_objects::request_context::RequestContext,
};

/// Error payload written for every failed request.
///
/// `type`, `title` and `status` are always present. Category specific members
/// (`resource`, `errorCode`, `query`, ...) live in `extensions` and are
/// flattened into the top-level JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    problem_type: String,
    title: String,
    status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance: Option<String>,
    #[serde(flatten)]
    extensions: Map<String, Value>,
}

impl ProblemDetail {
    pub fn new(problem_type: ProblemType, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            problem_type: problem_type.uri(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            extensions: Map::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Adds a category specific member. Reserved members cannot be shadowed.
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !is_reserved_member(&key) {
            self.extensions.insert(key, value.into());
        }
        self
    }

    pub fn with_extensions(mut self, extensions: Map<String, Value>) -> Self {
        for (key, value) in extensions {
            self = self.with_extension(key, value);
        }
        self
    }

    /// Attaches request context right before serialization.
    ///
    /// `instance` is always overwritten with the request URI.
    pub fn enrich(&mut self, context: &RequestContext, at: DateTime<Utc>) {
        self.instance = Some(context.uri().to_string());
        self.extensions.insert(
            "timestamp".to_string(),
            Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        self.extensions
            .insert("path".to_string(), Value::String(context.path().to_string()));
        self.extensions.insert(
            "method".to_string(),
            Value::String(context.method().to_string()),
        );
    }

    pub fn problem_type(&self) -> &str {
        &self.problem_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }
}

fn is_reserved_member(key: &str) -> bool {
    matches!(key, "type" | "title" | "status" | "detail" | "instance")
}
