use clap::Parser;
use pr_batchgen::ActionInputs;
use pr_batchgen::fetchers::{DEFAULT_LINK_TIMEOUT_MS, DEFAULT_MAX_LINK_BYTES};
use std::path::PathBuf;

/// Action inputs arrive as `INPUT_<NAME>` variables, runner context as `GITHUB_*`
#[derive(Parser, Debug)]
#[command(name = "pr-batchgen")]
#[command(about = "Starts a test batch generation from the pull request that triggered the run")]
#[command(version)]
pub struct Args {
    /// API key for the test-generation service
    #[arg(long, env = "INPUT_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// Test target to generate tests for
    #[arg(long, env = "INPUT_TESTTARGETID", default_value = "")]
    pub test_target_id: String,

    /// Service origin override (defaults to https://app.octomind.dev)
    #[arg(long, env = "INPUT_OCTOMINDBASEURL", default_value = "")]
    pub octomind_base_url: String,

    /// Path where test generation starts
    #[arg(long, env = "INPUT_ENTRYPOINTURLPATH", default_value = "")]
    pub entrypoint_url_path: String,

    /// Environment to run against
    #[arg(long, env = "INPUT_ENVIRONMENTID", default_value = "")]
    pub environment_id: String,

    /// Test case to run before the generated ones
    #[arg(long, env = "INPUT_PREREQUISITEID", default_value = "")]
    pub prerequisite_id: String,

    /// URL of the application under test
    #[arg(long, env = "INPUT_BASEURL", default_value = "")]
    pub base_url: String,

    /// Provision an environment for the pull request (true/false)
    #[arg(long, env = "INPUT_CREATEENVIRONMENT", default_value = "")]
    pub create_environment: String,

    /// Timeout in milliseconds for each link in the description
    #[arg(long, default_value_t = DEFAULT_LINK_TIMEOUT_MS)]
    pub link_timeout_ms: u64,

    /// Maximum bytes read from each link in the description
    #[arg(long, default_value_t = DEFAULT_MAX_LINK_BYTES)]
    pub max_link_bytes: usize,

    /// Webhook payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<String>,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "")]
    pub repository: String,

    /// Git ref of the run
    #[arg(long = "ref", env = "GITHUB_REF", default_value = "")]
    pub git_ref: String,

    /// Commit of the run
    #[arg(long, env = "GITHUB_SHA", default_value = "")]
    pub sha: String,

    /// File receiving step outputs
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// File receiving the job summary
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    pub summary_file: Option<PathBuf>,
}

impl Args {
    /// Collect the raw action inputs for validation
    pub fn inputs(&self) -> ActionInputs {
        ActionInputs {
            token: self.token.clone(),
            test_target_id: self.test_target_id.clone(),
            octomind_base_url: self.octomind_base_url.clone(),
            entrypoint_url_path: self.entrypoint_url_path.clone(),
            environment_id: self.environment_id.clone(),
            prerequisite_id: self.prerequisite_id.clone(),
            base_url: self.base_url.clone(),
            create_environment: self.create_environment.clone(),
            link_timeout_ms: self.link_timeout_ms,
            max_link_bytes: self.max_link_bytes,
        }
    }
}
