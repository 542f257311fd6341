use clap::Parser;
use pr_batchgen::github::{ActionOutput, PullRequestContext, actions};
use pr_batchgen::results::BATCH_GENERATION_URL_OUTPUT;
use pr_batchgen::{ActionConfig, ActionError, BatchGeneration, BatchGenerationOutcome};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(&args).await {
        Ok(outcome) => {
            ::log::info!("View your batch generation results: {}", outcome.url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("{}", e);
            actions::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Validate, submit, then publish outputs. Nothing is written unless submission succeeded.
async fn run(args: &Args) -> Result<BatchGenerationOutcome, ActionError> {
    let config = ActionConfig::from_inputs(args.inputs())?;
    let pull_request = PullRequestContext::load(
        args.event_path.as_deref(),
        &args.repository,
        &args.git_ref,
        &args.sha,
    )?;

    ::log::info!(
        "Starting batch generation for {}/{} ({})",
        pull_request.owner,
        pull_request.repo,
        pull_request.git_ref
    );

    let outcome = BatchGeneration::new(config, pull_request).start().await?;

    let output = ActionOutput::new(args.output_file.clone(), args.summary_file.clone());
    output.set_output(BATCH_GENERATION_URL_OUTPUT, &outcome.url)?;
    output.append_summary(&outcome.summary_markdown())?;

    Ok(outcome)
}
