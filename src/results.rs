use serde::{Deserialize, Serialize};

/// Name of the step output carrying the results page
pub const BATCH_GENERATION_URL_OUTPUT: &str = "batchGenerationUrl";

/// A batch generation the service accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchGenerationOutcome {
    /// Identifier assigned by the service
    pub batch_generation_id: String,

    /// Page where the generated tests show up
    pub url: String,
}

impl BatchGenerationOutcome {
    pub fn new(batch_generation_id: String, url: String) -> Self {
        Self {
            batch_generation_id,
            url,
        }
    }

    /// Job summary pointing at the results page
    pub fn summary_markdown(&self) -> String {
        format!(
            "# 🐙 Octomind\n\n[View your batch generation results]({})\n",
            self.url
        )
    }
}
