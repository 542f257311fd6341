use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes step outputs and the job summary through the runner's files
#[derive(Debug, Clone, Default)]
pub struct ActionOutput {
    output_path: Option<PathBuf>,
    summary_path: Option<PathBuf>,
}

impl ActionOutput {
    /// Paths normally come from `GITHUB_OUTPUT` and `GITHUB_STEP_SUMMARY`
    pub fn new(output_path: Option<PathBuf>, summary_path: Option<PathBuf>) -> Self {
        let non_empty = |p: Option<PathBuf>| p.filter(|p| !p.as_os_str().is_empty());
        Self {
            output_path: non_empty(output_path),
            summary_path: non_empty(summary_path),
        }
    }

    /// Set a step output
    pub fn set_output(&self, name: &str, value: &str) -> io::Result<()> {
        let Some(path) = &self.output_path else {
            ::log::info!("Output {} = {}", name, value);
            return Ok(());
        };

        let entry = if value.contains('\n') {
            let delimiter = "PR_BATCHGEN_EOF";
            format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
        } else {
            format!("{name}={value}\n")
        };
        append(path, &entry)
    }

    /// Append markdown to the job summary
    pub fn append_summary(&self, markdown: &str) -> io::Result<()> {
        match &self.summary_path {
            Some(path) => append(path, markdown),
            None => {
                ::log::debug!("No step summary file, skipping summary");
                Ok(())
            }
        }
    }
}

fn append(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())
}

/// Emit a `::warning::` workflow command
pub fn warning(message: &str) {
    println!("::warning::{}", escape_data(message));
}

/// Emit an `::error::` workflow command, this is how the run shows its failure reason
pub fn error(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Workflow command payloads must not contain raw line breaks or percent signs
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
