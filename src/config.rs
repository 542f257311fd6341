use crate::error::ConfigError;
use crate::fetchers::{DEFAULT_LINK_TIMEOUT_MS, DEFAULT_MAX_LINK_BYTES};
use url::Url;

/// Service origin used when `octomindBaseUrl` is not set
pub const DEFAULT_SERVICE_URL: &str = "https://app.octomind.dev";

/// Raw action inputs, exactly as the runner or command line provided them
#[derive(Debug, Clone)]
pub struct ActionInputs {
    /// API key for the test-generation service
    pub token: String,

    /// Test target the batch generation belongs to
    pub test_target_id: String,

    /// Override of the service origin
    pub octomind_base_url: String,

    /// Path appended to the base URL where test generation starts
    pub entrypoint_url_path: String,

    /// Environment to generate tests against
    pub environment_id: String,

    /// Test case that has to run before the generated ones
    pub prerequisite_id: String,

    /// URL of the application under test (also the discovery URL of provisioned environments)
    pub base_url: String,

    /// Boolean input, provision a per pull request environment when true
    pub create_environment: String,

    /// Per-link timeout for fetching linked content
    pub link_timeout_ms: u64,

    /// Per-link byte ceiling for fetching linked content
    pub max_link_bytes: usize,
}

impl Default for ActionInputs {
    fn default() -> Self {
        Self {
            token: String::new(),
            test_target_id: String::new(),
            octomind_base_url: String::new(),
            entrypoint_url_path: String::new(),
            environment_id: String::new(),
            prerequisite_id: String::new(),
            base_url: String::new(),
            create_environment: String::new(),
            link_timeout_ms: DEFAULT_LINK_TIMEOUT_MS,
            max_link_bytes: DEFAULT_MAX_LINK_BYTES,
        }
    }
}

/// Validated configuration for one invocation
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub token: String,
    pub test_target_id: String,

    /// Service origin without a trailing slash
    pub service_url: String,

    pub entrypoint_url_path: Option<String>,
    pub environment_id: Option<String>,
    pub prerequisite_id: Option<String>,
    pub base_url: Option<String>,
    pub create_environment: bool,
    pub link_timeout_ms: u64,
    pub max_link_bytes: usize,
}

impl ActionConfig {
    /// Validate raw inputs.
    ///
    /// Every check runs even after one fails so that the error lists all
    /// problems at once.
    pub fn from_inputs(inputs: ActionInputs) -> Result<Self, ConfigError> {
        let mut problems = Vec::new();

        let token = inputs.token.trim().to_string();
        if token.is_empty() {
            problems.push("token is set to an empty string".to_string());
        }

        let test_target_id = inputs.test_target_id.trim().to_string();
        if test_target_id.is_empty() {
            problems.push("testTargetId is set to an empty string".to_string());
        }

        let service_url = parse_service_url(&inputs.octomind_base_url).unwrap_or_else(|e| {
            problems.push(e);
            String::new()
        });

        let create_environment =
            parse_boolean_input("createEnvironment", &inputs.create_environment).unwrap_or_else(
                |e| {
                    problems.push(e);
                    false
                },
            );

        if !problems.is_empty() {
            return Err(ConfigError::Invalid(problems));
        }

        Ok(Self {
            token,
            test_target_id,
            service_url,
            entrypoint_url_path: non_empty(&inputs.entrypoint_url_path),
            environment_id: non_empty(&inputs.environment_id),
            prerequisite_id: non_empty(&inputs.prerequisite_id),
            base_url: non_empty(&inputs.base_url),
            create_environment,
            link_timeout_ms: inputs.link_timeout_ms,
            max_link_bytes: inputs.max_link_bytes,
        })
    }
}

/// Optional inputs are absent when empty
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Resolve the service origin, falling back to the default when empty
fn parse_service_url(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(DEFAULT_SERVICE_URL.to_string());
    }

    let url = Url::parse(value).map_err(|e| format!("octomindBaseUrl '{value}' is invalid: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url.as_str().trim_end_matches('/').to_string()),
        scheme => Err(format!(
            "octomindBaseUrl '{value}' must use http or https, not {scheme}"
        )),
    }
}

/// Boolean inputs follow the YAML 1.2 core schema the runner uses, empty means false
pub fn parse_boolean_input(name: &str, value: &str) -> Result<bool, String> {
    match value.trim() {
        "" | "false" | "False" | "FALSE" => Ok(false),
        "true" | "True" | "TRUE" => Ok(true),
        other => Err(format!(
            "{name} must be one of true, True, TRUE, false, False, FALSE (got '{other}')"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> ActionInputs {
        ActionInputs {
            token: "mock-token".to_string(),
            test_target_id: "mock-test-target-id".to_string(),
            ..ActionInputs::default()
        }
    }

    #[test]
    fn test_minimal_inputs() {
        let config = ActionConfig::from_inputs(valid_inputs()).unwrap();
        assert_eq!(config.token, "mock-token");
        assert_eq!(config.test_target_id, "mock-test-target-id");
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.entrypoint_url_path, None);
        assert_eq!(config.environment_id, None);
        assert_eq!(config.prerequisite_id, None);
        assert_eq!(config.base_url, None);
        assert!(!config.create_environment);
        assert_eq!(config.link_timeout_ms, 5000);
        assert_eq!(config.max_link_bytes, 4096);
    }

    #[test]
    fn test_all_missing_required_inputs_reported() {
        let err = ActionConfig::from_inputs(ActionInputs::default()).unwrap_err();
        let ConfigError::Invalid(problems) = err;
        assert_eq!(
            problems,
            vec![
                "token is set to an empty string",
                "testTargetId is set to an empty string"
            ]
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let inputs = ActionInputs {
            token: "  ".to_string(),
            environment_id: " \n".to_string(),
            ..valid_inputs()
        };
        assert!(ActionConfig::from_inputs(inputs).is_err());

        let inputs = ActionInputs {
            environment_id: " \n".to_string(),
            ..valid_inputs()
        };
        assert_eq!(ActionConfig::from_inputs(inputs).unwrap().environment_id, None);
    }

    #[test]
    fn test_optional_inputs_kept() {
        let inputs = ActionInputs {
            entrypoint_url_path: "/test-entrypoint".to_string(),
            environment_id: "env-789".to_string(),
            prerequisite_id: "prereq-101".to_string(),
            base_url: "https://example.com".to_string(),
            ..valid_inputs()
        };
        let config = ActionConfig::from_inputs(inputs).unwrap();
        assert_eq!(config.entrypoint_url_path.as_deref(), Some("/test-entrypoint"));
        assert_eq!(config.environment_id.as_deref(), Some("env-789"));
        assert_eq!(config.prerequisite_id.as_deref(), Some("prereq-101"));
        assert_eq!(config.base_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_service_url_override() {
        let inputs = ActionInputs {
            octomind_base_url: "https://custom.octomind.dev/".to_string(),
            ..valid_inputs()
        };
        let config = ActionConfig::from_inputs(inputs).unwrap();
        assert_eq!(config.service_url, "https://custom.octomind.dev");
    }

    #[test]
    fn test_invalid_service_url() {
        for bad in ["not a url", "ftp://files.example.com"] {
            let inputs = ActionInputs {
                octomind_base_url: bad.to_string(),
                ..valid_inputs()
            };
            assert!(ActionConfig::from_inputs(inputs).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_boolean_inputs() {
        assert_eq!(parse_boolean_input("flag", ""), Ok(false));
        assert_eq!(parse_boolean_input("flag", "False"), Ok(false));
        assert_eq!(parse_boolean_input("flag", "true"), Ok(true));
        assert_eq!(parse_boolean_input("flag", "TRUE"), Ok(true));
        assert!(parse_boolean_input("flag", "yes").is_err());

        let inputs = ActionInputs {
            create_environment: "maybe".to_string(),
            ..ActionInputs::default()
        };
        let ConfigError::Invalid(problems) = ActionConfig::from_inputs(inputs).unwrap_err();
        assert_eq!(problems.len(), 3);
    }
}
