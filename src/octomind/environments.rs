use crate::error::{ActionError, ApiError};
use crate::octomind::client::OctomindClient;
use crate::octomind::types::{Environment, NewEnvironment};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

impl OctomindClient {
    /// All environments of a test target
    pub async fn list_environments(
        &self,
        test_target_id: &str,
    ) -> Result<Vec<Environment>, ApiError> {
        let environments = self.list_raw_environments(test_target_id).await?;
        environments
            .into_iter()
            .map(|env| serde_json::from_value(env).map_err(ApiError::from))
            .collect()
    }

    /// `Ok(None)` when the test target has no environment with that name
    pub async fn get_environment_by_name(
        &self,
        test_target_id: &str,
        name: &str,
    ) -> Result<Option<Environment>, ApiError> {
        self.find_environment(test_target_id, |env| {
            env.get("name").and_then(Value::as_str) == Some(name)
        })
        .await
    }

    /// `Ok(None)` when the test target has no default environment
    pub async fn get_default_environment(
        &self,
        test_target_id: &str,
    ) -> Result<Option<Environment>, ApiError> {
        self.find_environment(test_target_id, |env| {
            env.get("type").and_then(Value::as_str) == Some("DEFAULT")
        })
        .await
    }

    async fn list_raw_environments(&self, test_target_id: &str) -> Result<Vec<Value>, ApiError> {
        let request = self
            .http()
            .get(self.environments_url(test_target_id))
            .header(CONTENT_TYPE, "application/json");
        self.send_json(request).await
    }

    /// Only the matching entry is decoded, other entries may have any shape
    async fn find_environment(
        &self,
        test_target_id: &str,
        matches: impl Fn(&Value) -> bool,
    ) -> Result<Option<Environment>, ApiError> {
        let environments = self.list_raw_environments(test_target_id).await?;
        match environments.into_iter().find(|env| matches(env)) {
            Some(env) => Ok(Some(serde_json::from_value(env)?)),
            None => Ok(None),
        }
    }

    pub async fn create_environment(
        &self,
        test_target_id: &str,
        environment: &NewEnvironment,
    ) -> Result<Environment, ApiError> {
        let request = self
            .http()
            .post(self.environments_url(test_target_id))
            .json(environment);
        self.send_json(request).await
    }
}

/// Find the environment called `name`, or clone the default environment into it.
///
/// Goes through lookup, then the default environment, then creation, stopping
/// at the first step that yields an environment. Service errors end the chain
/// instead of being read as "not found", so a flaky lookup cannot create a
/// duplicate environment.
pub async fn provision_environment(
    client: &OctomindClient,
    test_target_id: &str,
    name: &str,
    discovery_url: Option<&str>,
) -> Result<Environment, ActionError> {
    let lookup_failed =
        |e: ApiError| ActionError::Environment(format!("failed to look up environments: {e}"));

    if let Some(existing) = client
        .get_environment_by_name(test_target_id, name)
        .await
        .map_err(lookup_failed)?
    {
        ::log::info!("Using existing environment '{}' ({})", name, existing.id);
        return Ok(existing);
    }

    let default = client
        .get_default_environment(test_target_id)
        .await
        .map_err(lookup_failed)?
        .ok_or_else(|| {
            ActionError::Environment(format!(
                "test target {test_target_id} has no default environment to copy"
            ))
        })?;

    ::log::info!(
        "Creating environment '{}' from default environment {}",
        name,
        default.id
    );

    let new_environment =
        NewEnvironment::cloned_from(&default, name, test_target_id, discovery_url);
    let created = client
        .create_environment(test_target_id, &new_environment)
        .await
        .map_err(|e| {
            ActionError::Environment(format!("failed to create environment '{name}': {e}"))
        })?;

    ::log::info!("Created environment '{}' ({})", name, created.id);
    Ok(created)
}
