//! Prompt templates and the sequential chain runner.
//!
//! A chain is a fixed, strictly linear sequence of steps: each step formats its template
//! with the previous step's output and hands the result to the summarizer. There is no
//! branching, retry, or validation of intermediate output; the first error aborts the run.

use crate::summarization::{Summarizer, SummarizerError};
use thiserror::Error;

/// Errors raised while building or running a chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Template text does not contain its declared placeholder.
    #[error("Template is missing placeholder '{{{0}}}'")]
    MissingPlaceholder(String),
    /// A chain must contain at least one step.
    #[error("Chain requires at least one step")]
    Empty,
    /// The summarization provider failed while running a step.
    #[error(transparent)]
    Summarizer(#[from] SummarizerError),
}

/// A prompt template with a single named placeholder.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    input_variable: String,
}

impl PromptTemplate {
    /// Validate that `template` contains `{input_variable}` and build the template.
    pub fn new(template: &str, input_variable: &str) -> Result<Self, ChainError> {
        let placeholder = format!("{{{input_variable}}}");
        if !template.contains(&placeholder) {
            return Err(ChainError::MissingPlaceholder(input_variable.to_string()));
        }
        Ok(Self {
            template: template.to_string(),
            input_variable: input_variable.to_string(),
        })
    }

    /// Fill the placeholder with `value` and return the rendered prompt.
    pub fn render(&self, value: &str) -> String {
        self.template
            .replace(&format!("{{{}}}", self.input_variable), value)
    }
}

/// A named step of the chain: one template, one summarizer call.
#[derive(Debug, Clone)]
pub struct PromptStep {
    name: String,
    template: PromptTemplate,
}

impl PromptStep {
    /// Build a step from a name and a validated template.
    pub fn new(name: &str, template: PromptTemplate) -> Self {
        Self {
            name: name.to_string(),
            template,
        }
    }

    /// Name used in log events for this step.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered sequence of prompt steps where each output feeds the next input.
pub struct SequentialChain {
    steps: Vec<PromptStep>,
}

impl SequentialChain {
    /// Build a chain from an ordered list of steps. An empty list is rejected.
    pub fn new(steps: Vec<PromptStep>) -> Result<Self, ChainError> {
        if steps.is_empty() {
            return Err(ChainError::Empty);
        }
        Ok(Self { steps })
    }

    /// Number of steps in the chain.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps. Always false for a constructed chain.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, piping each output into the next step's template.
    ///
    /// Returns the final step's output unmodified. Errors from the summarizer
    /// propagate immediately; completed steps are not rolled back or retried.
    pub async fn run(
        &self,
        summarizer: &dyn Summarizer,
        input: &str,
    ) -> Result<String, ChainError> {
        let mut current = input.to_string();
        for step in &self.steps {
            let prompt = step.template.render(&current);
            tracing::debug!(
                step = %step.name,
                input_chars = current.len(),
                prompt_chars = prompt.len(),
                "Running chain step"
            );
            current = summarizer.generate(&prompt).await?;
            tracing::debug!(
                step = %step.name,
                output_chars = current.len(),
                "Chain step complete"
            );
        }
        Ok(current)
    }
}
