#![deny(missing_docs)]

//! Core library for the fundreport CLI.

/// Runs the fixed analysis chain over a loaded report.
pub mod analyzer;
/// Prompt templates and the sequential chain runner.
pub mod chain;
/// Environment-driven configuration management.
pub mod config;
/// PDF loading and text extraction.
pub mod document;
/// Structured logging and tracing setup.
pub mod logging;
/// The fixed prompt templates applied to every report.
pub mod prompts;
/// Summarization adapter abstraction and providers.
pub mod summarization;
