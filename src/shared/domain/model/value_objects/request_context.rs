/// Request attributes captured before dispatch and attached to every error body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestContext {
    method: String,
    path: String,
    uri: String,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            uri: uri.into(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path plus query string, as received.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}
