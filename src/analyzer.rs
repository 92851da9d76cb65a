//! Coordinates the fixed analysis chain over a loaded report.

use crate::chain::{ChainError, SequentialChain};
use crate::document::Document;
use crate::prompts;
use crate::summarization::Summarizer;

/// Runs the asset-allocation and risk-notification chain over a report.
///
/// The analyzer owns the summarization adapter so that model initialization stays visible
/// at process start. Construct it once in `main` and reuse it per report.
pub struct Analyzer {
    summarizer: Box<dyn Summarizer + Send + Sync>,
    chain: SequentialChain,
}

impl Analyzer {
    /// Build an analyzer around an explicitly constructed summarizer.
    pub fn new(summarizer: Box<dyn Summarizer + Send + Sync>) -> Self {
        Self {
            summarizer,
            chain: prompts::analysis_chain(),
        }
    }

    /// Run the chain over the report text and return the final string unmodified.
    pub async fn analyze(&self, document: &Document) -> Result<String, ChainError> {
        tracing::info!(chars = document.text.len(), "Running analysis chain");
        self.chain
            .run(self.summarizer.as_ref(), &document.text)
            .await
    }
}
