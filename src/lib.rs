// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod github;
pub mod octomind;
pub mod parsers;
pub mod prompt;
pub mod results;
pub mod utils;


// Re-export commonly used types for convenience
pub use config::{ActionConfig, ActionInputs};
pub use error::ActionError;
pub use github::PullRequestContext;
pub use results::BatchGenerationOutcome;

use fetchers::LinkFetcher;
use octomind::{BatchGenerationRequest, GenerationContext, OctomindClient};
use parsers::Parser;

/// Value of `context.source` in every submission
const CONTEXT_SOURCE: &str = "github";

/// Turns a pull request into a batch generation request and submits it
pub struct BatchGeneration {
    config: ActionConfig,
    pull_request: PullRequestContext,
    http: reqwest::Client,
}

impl BatchGeneration {
    /// Create a batch generation for the given pull request
    pub fn new(config: ActionConfig, pull_request: PullRequestContext) -> Self {
        Self {
            config,
            pull_request,
            http: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured HTTP client for every outbound call
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Build the request body, provisioning an environment first if asked to
    pub async fn build_request(
        &self,
        client: &OctomindClient,
    ) -> Result<BatchGenerationRequest, ActionError> {
        let pull_request = &self.pull_request;
        let parsed = Parser::parse(&pull_request.body);

        let linked_content = LinkFetcher::new(self.http.clone())
            .with_timeout_ms(self.config.link_timeout_ms)
            .with_max_bytes(self.config.max_link_bytes)
            .fetch_links(&parsed.links)
            .await;

        let prompt =
            prompt::build_prompt(&pull_request.title, &pull_request.body, &linked_content);
        let environment_id = self.resolve_environment_id(client).await?;

        Ok(BatchGenerationRequest {
            prompt,
            image_urls: parsed.image_urls,
            entrypoint_url_path: self.config.entrypoint_url_path.clone(),
            environment_id,
            prerequisite_id: self.config.prerequisite_id.clone(),
            base_url: self.config.base_url.clone(),
            context: GenerationContext {
                source: CONTEXT_SOURCE.to_string(),
                issue_number: pull_request.number,
                repo: pull_request.repo.clone(),
                owner: pull_request.owner.clone(),
                git_ref: pull_request.git_ref.clone(),
                sha: pull_request.sha.clone(),
            },
        })
    }

    /// Submit the batch generation and return where to follow it
    pub async fn start(self) -> Result<BatchGenerationOutcome, ActionError> {
        if self.pull_request.number.is_none() {
            let message = "issue.number variable (Pull Request ID) not available. \
                Make sure you run this action in a workflow triggered by pull request \
                if you expect a comment with the batch generation results on your PR";
            ::log::warn!("{}", message);
            github::actions::warning(message);
        }

        let client = OctomindClient::from_config(self.http.clone(), &self.config);
        let test_target_id = &self.config.test_target_id;

        let request = self.build_request(&client).await?;

        ::log::debug!(
            "Batch generation API: {}, context: {:?}",
            client.batch_generations_url(test_target_id),
            request.context
        );
        if let Ok(body) = serde_json::to_string_pretty(&request) {
            ::log::debug!("Request body: {}", body);
        }

        let response = client
            .start_batch_generation(test_target_id, &request)
            .await
            .map_err(ActionError::Submission)?;

        let url =
            client.batch_generation_results_url(test_target_id, &response.batch_generation_id);
        ::log::info!(
            "Batch generation {} started: {}",
            response.batch_generation_id,
            url
        );

        Ok(BatchGenerationOutcome::new(response.batch_generation_id, url))
    }

    /// An explicit environment id wins, otherwise provision one when enabled
    async fn resolve_environment_id(
        &self,
        client: &OctomindClient,
    ) -> Result<Option<String>, ActionError> {
        if self.config.environment_id.is_some() || !self.config.create_environment {
            return Ok(self.config.environment_id.clone());
        }

        let number = self.pull_request.number.ok_or_else(|| {
            ActionError::Environment(
                "a pull request number is required to create a pull request environment"
                    .to_string(),
            )
        })?;

        let name = utils::pull_request_environment_name(number);
        let environment = octomind::provision_environment(
            client,
            &self.config.test_target_id,
            &name,
            self.config.base_url.as_deref(),
        )
        .await?;

        Ok(Some(environment.id))
    }
}
