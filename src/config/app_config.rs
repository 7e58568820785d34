#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub api_prefix: String,
    pub database_url: Option<String>,
    pub database_host: String,
    pub database_port: u16,
    pub database_user: String,
    pub database_password: String,
    pub database_name: String,
    pub database_max_connections: u32,
    pub database_acquire_timeout_ms: u64,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; missing or unparsable
    /// values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            port: read("PORT", "3000").parse().unwrap_or(3000),
            api_prefix: normalize_prefix(&read("API_PREFIX", "/api")),
            database_url: lookup("DATABASE_URL").filter(|value| !value.trim().is_empty()),
            database_host: read("DATABASE_HOST", "localhost"),
            database_port: read("DATABASE_PORT", "5432").parse().unwrap_or(5432),
            database_user: read("DATABASE_USER", "postgres"),
            database_password: read("DATABASE_PASSWORD", "postgres"),
            database_name: read("DATABASE_NAME", "app"),
            database_max_connections: read("DATABASE_MAX_CONNECTIONS", "10")
                .parse()
                .unwrap_or(10),
            database_acquire_timeout_ms: read("DATABASE_ACQUIRE_TIMEOUT_MS", "5000")
                .parse()
                .unwrap_or(5000),
            log_format: match read("LOG_FORMAT", "pretty").to_lowercase().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }

    /// `DATABASE_URL` wins over the discrete connection settings.
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.database_user,
                self.database_password,
                self.database_host,
                self.database_port,
                self.database_name
            ),
        }
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
