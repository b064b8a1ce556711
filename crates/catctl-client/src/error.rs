use thiserror::Error;

/// Errors surfaced by the catalog API client.
///
/// There is no automatic retry and no transient/permanent split: every
/// failure is terminal for the action that triggered it, and the caller
/// decides whether to re-submit.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the backend's `message` field when
    /// the body carried one, otherwise the HTTP status text.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 401, mapped distinctly so callers can hint at token refresh.
    #[error("unauthorized: bearer token missing, expired, or rejected")]
    Unauthorized,

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response envelope matched none of the known wrapper shapes.
    #[error("unexpected response shape for {context}")]
    UnexpectedShape { context: String },

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Token/config resolution failed while constructing the client.
    #[error(transparent)]
    Config(#[from] catctl_core::ConfigError),
}
