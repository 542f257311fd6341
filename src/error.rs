use reqwest::StatusCode;
use thiserror::Error;

/// Why a linked resource contributed no text
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Invalid action inputs, all problems reported together
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Failure to load the pull request event from the runner
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("failed to read event payload {path}: {source}")]
    ReadEvent {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event payload: {0}")]
    ParseEvent(#[from] serde_json::Error),
}

/// Errors returned by the test-generation service API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response, the body is kept for the failure message
    #[error("{}", render_status_error(.status, .body))]
    Status { status: StatusCode, body: String },

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// JSON error bodies are wrapped and stringified, anything else is passed through
fn render_status_error(status: &StatusCode, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => serde_json::json!({ "error": json }).to_string(),
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => format!("{status}: {}", body.trim()),
    }
}

/// The single terminal failure of an invocation
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error("unable to provision environment: {0}")]
    Environment(String),

    #[error("unable to start batch generation: {0}")]
    Submission(#[source] ApiError),

    #[error("failed to write action output: {0}")]
    Output(#[from] std::io::Error),
}
