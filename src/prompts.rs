//! The two fixed prompt templates applied to every report.
//!
//! Both templates are fixed at startup and never mutated. The risk threshold and the
//! notification sentences are part of the prompt text itself, not configuration.

use crate::chain::{PromptStep, PromptTemplate, SequentialChain};

/// Literal sentence appended when stock exposure exceeds the threshold.
pub const HIGH_STOCK_RISK_SENTENCE: &str = "The mutual fund asset allocation has high stock \
     allocation and exceed the given threshold % may increase portfolio risk.";

/// Literal sentence used when the allocation stays within the threshold.
pub const ACCEPTABLE_RISK_SENTENCE: &str = "Risk level is acceptable.";

const ASSET_ALLOCATION_TEMPLATE: &str = "Extract the 'Asset Allocation' section from the \
     following text and provide a percentage breakdown of different asset classes (e.g., \
     equities, bonds, cash, etc.):\n\n{text}";

const RISK_NOTIFICATION_TEMPLATE: &str = "Given the following asset allocation:\n\n\
     {allocation}\n\nIf the allocation for stocks (or equities) exceeds 70%, add a risk \
     notification: 'The mutual fund asset allocation has high stock allocation and exceed \
     the given threshold % may increase portfolio risk.' Otherwise state: 'Risk level is \
     acceptable.'";

/// Build the fixed two-step analysis chain: allocation extraction, then risk notification.
pub fn analysis_chain() -> SequentialChain {
    let asset_allocation = PromptStep::new(
        "asset-allocation",
        PromptTemplate::new(ASSET_ALLOCATION_TEMPLATE, "text")
            .expect("asset allocation template is valid"),
    );
    let risk_notification = PromptStep::new(
        "risk-notification",
        PromptTemplate::new(RISK_NOTIFICATION_TEMPLATE, "allocation")
            .expect("risk notification template is valid"),
    );
    SequentialChain::new(vec![asset_allocation, risk_notification])
        .expect("analysis chain has two steps")
}
