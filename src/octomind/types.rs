use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Body of a batch generation submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGenerationRequest {
    pub prompt: String,

    pub image_urls: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint_url_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    pub context: GenerationContext,
}

/// Where the request came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    /// Always `github`
    pub source: String,

    /// Pull request number, omitted when the trigger was not a pull request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<u64>,

    pub repo: String,

    pub owner: String,

    #[serde(rename = "ref")]
    pub git_ref: String,

    pub sha: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGenerationResponse {
    pub batch_generation_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnvironmentType {
    Default,
    Custom,
    /// Types this client does not know about yet
    #[default]
    #[serde(other)]
    Unknown,
}

/// Explicit `null` in a service response reads as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAccount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp_initializer_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicAuth {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateLocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub location_type: String,
}

/// An environment as returned by the service.
///
/// Everything except the id tolerates missing or `null` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub test_target_id: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub environment_type: EnvironmentType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub discovery_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_header_fields: BTreeMap<String, String>,

    #[serde(default)]
    pub test_account: Option<TestAccount>,

    #[serde(default)]
    pub basic_auth: Option<BasicAuth>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub enable_cross_origin_iframes: bool,

    #[serde(default)]
    pub private_location: Option<PrivateLocation>,
}

/// Body of an environment creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnvironment {
    pub name: String,

    pub test_target_id: String,

    #[serde(rename = "type")]
    pub environment_type: EnvironmentType,

    pub discovery_url: String,

    pub additional_header_fields: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_account: Option<TestAccount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuth>,

    pub enable_cross_origin_iframes: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_location: Option<PrivateLocation>,
}

impl NewEnvironment {
    /// A custom environment carrying over every setting of `template`.
    ///
    /// `discovery_url` replaces the template's discovery URL when given.
    pub fn cloned_from(
        template: &Environment,
        name: &str,
        test_target_id: &str,
        discovery_url: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            test_target_id: test_target_id.to_string(),
            environment_type: EnvironmentType::Custom,
            discovery_url: discovery_url
                .map(str::to_string)
                .unwrap_or_else(|| template.discovery_url.clone()),
            additional_header_fields: template.additional_header_fields.clone(),
            test_account: template.test_account.clone(),
            basic_auth: template.basic_auth.clone(),
            enable_cross_origin_iframes: template.enable_cross_origin_iframes,
            private_location: template.private_location.clone(),
        }
    }
}
