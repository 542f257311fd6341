use crate::error::ContextError;
use serde_json::Value;
use std::fs;

/// The pull request that triggered the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestContext {
    /// Pull request number, `None` when the event is not about a pull request
    pub number: Option<u64>,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub repo: String,
    pub git_ref: String,
    pub sha: String,
}

impl PullRequestContext {
    /// Load the context the way the runner exposes it.
    ///
    /// `event_path` points at the JSON webhook payload, `repository` is
    /// `owner/name`. A missing event file is not an error, the context is then
    /// built from the ref alone.
    pub fn load(
        event_path: Option<&str>,
        repository: &str,
        git_ref: &str,
        sha: &str,
    ) -> Result<Self, ContextError> {
        let payload = match event_path.filter(|p| !p.is_empty()) {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ContextError::ReadEvent {
                    path: path.to_string(),
                    source,
                })?;
                serde_json::from_str(&raw)?
            }
            None => {
                ::log::debug!("No event payload available, using an empty one");
                Value::Null
            }
        };

        Ok(Self::from_event_payload(&payload, repository, git_ref, sha))
    }

    pub fn from_event_payload(payload: &Value, repository: &str, git_ref: &str, sha: &str) -> Self {
        let pull_request = payload.get("pull_request");
        let text = |field: &str| {
            pull_request
                .and_then(|pr| pr.get(field))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let (owner, repo) = repository.split_once('/').unwrap_or(("", repository));

        Self {
            number: number_from_payload(payload).or_else(|| number_from_ref(git_ref)),
            title: text("title"),
            body: text("body"),
            owner: owner.to_string(),
            repo: repo.to_string(),
            git_ref: git_ref.to_string(),
            sha: sha.to_string(),
        }
    }
}

/// Pull request or issue number from the payload, zero counts as missing
fn number_from_payload(payload: &Value) -> Option<u64> {
    ["pull_request", "issue"]
        .iter()
        .find_map(|key| payload.get(*key).and_then(|v| v.get("number")))
        .or_else(|| payload.get("number"))
        .and_then(Value::as_u64)
        .filter(|n| *n > 0)
}

/// `refs/pull/<n>/merge` and `refs/pull/<n>/head`
fn number_from_ref(git_ref: &str) -> Option<u64> {
    let mut parts = git_ref.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("refs"), Some("pull"), Some(number)) => number.parse().ok().filter(|n| *n > 0),
        _ => None,
    }
}
