use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Backend origin, e.g. `https://admin.example.com`.
    pub base_url: String,
    pub env: Environment,
    pub log_level: String,
    /// Bearer token from `CATCTL_AUTH_TOKEN`; when absent the token file at
    /// `token_path` is consulted at client construction time.
    pub auth_token: Option<String>,
    pub token_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Default `limit` sent to list endpoints.
    pub page_limit: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("base_url", &self.base_url)
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "[redacted]"),
            )
            .field("token_path", &self.token_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}
