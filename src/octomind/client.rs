use crate::config::ActionConfig;
use crate::error::ApiError;
use crate::octomind::types::{BatchGenerationRequest, BatchGenerationResponse};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

/// Prefix of every API-key authenticated endpoint
const API_PATH: &str = "/api/apiKey/v3";

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the test-generation service
#[derive(Debug, Clone)]
pub struct OctomindClient {
    http: reqwest::Client,
    service_url: String,
    api_key: String,
}

impl OctomindClient {
    /// `service_url` is the origin without a trailing slash
    pub fn new(
        http: reqwest::Client,
        service_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            service_url: service_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(http: reqwest::Client, config: &ActionConfig) -> Self {
        Self::new(http, config.service_url.clone(), config.token.clone())
    }

    pub fn batch_generations_url(&self, test_target_id: &str) -> String {
        format!(
            "{}{API_PATH}/test-targets/{test_target_id}/batch-generations",
            self.service_url
        )
    }

    pub fn environments_url(&self, test_target_id: &str) -> String {
        format!(
            "{}{API_PATH}/test-targets/{test_target_id}/environments",
            self.service_url
        )
    }

    /// Page where the user can follow a batch generation
    pub fn batch_generation_results_url(
        &self,
        test_target_id: &str,
        batch_generation_id: &str,
    ) -> String {
        format!(
            "{}/testtargets/{test_target_id}/batchgenerations/{batch_generation_id}",
            self.service_url
        )
    }

    /// Submit a batch generation for the test target
    pub async fn start_batch_generation(
        &self,
        test_target_id: &str,
        request: &BatchGenerationRequest,
    ) -> Result<BatchGenerationResponse, ApiError> {
        let url = self.batch_generations_url(test_target_id);
        ::log::info!("Starting batch generation at {}", url);

        self.send_json(self.http.post(&url).json(request)).await
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Authenticate, send, and decode a successful JSON response
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            ::log::debug!("Service responded with {}: {}", status, body);
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}
