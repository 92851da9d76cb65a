use std::path::Path;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use fundreport::analyzer::Analyzer;
use fundreport::config;
use fundreport::document::{self, Document, DocumentError};
use fundreport::prompts::HIGH_STOCK_RISK_SENTENCE;
use fundreport::summarization::bounds::{MAX_SUMMARY_TOKENS, count_tokens};
use fundreport::summarization::{ExtractiveSummarizer, Summarizer, SummarizerError};

static INIT: Once = Once::new();

fn set_default_env(key: &str, value: &str) {
    let needs_value = std::env::var(key).map(|v| v.trim().is_empty()).unwrap_or(true);
    if needs_value {
        // SAFETY: Tests run serially via Once and we intentionally mutate process env.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

fn init_config_once() {
    INIT.call_once(|| {
        set_default_env("SUMMARIZER_PROVIDER", "extractive");
        set_default_env("SUMMARIZER_MODEL", "t5-small");
        config::init_config();
    });
}

/// Instruction-following test double: records prompts and replays scripted outputs.
struct ScriptedSummarizer {
    prompts: Arc<Mutex<Vec<String>>>,
    outputs: Mutex<Vec<String>>,
}

impl ScriptedSummarizer {
    fn new(outputs: Vec<&str>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let summarizer = Self {
            prompts: Arc::clone(&prompts),
            outputs: Mutex::new(outputs.into_iter().rev().map(String::from).collect()),
        };
        (summarizer, prompts)
    }
}

#[async_trait]
impl Summarizer for ScriptedSummarizer {
    async fn generate(&self, prompt: &str) -> Result<String, SummarizerError> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());
        self.outputs
            .lock()
            .expect("outputs lock")
            .pop()
            .ok_or_else(|| SummarizerError::GenerationFailed("no scripted output left".into()))
    }
}

#[tokio::test]
async fn high_stock_allocation_yields_the_risk_sentence() {
    init_config_once();

    let allocation = "Equities: 75%, Bonds: 20%, Cash: 5%";
    let notification = format!("{allocation} {HIGH_STOCK_RISK_SENTENCE}");
    let (summarizer, prompts) = ScriptedSummarizer::new(vec![allocation, notification.as_str()]);
    let analyzer = Analyzer::new(Box::new(summarizer));

    let document = Document {
        text: format!("Morningstar quarterly report.\nAsset Allocation\n{allocation}\n"),
    };
    let result = analyzer.analyze(&document).await.expect("analysis");

    assert!(result.contains("Equities: 75%"));
    assert!(result.contains(HIGH_STOCK_RISK_SENTENCE));

    // Step 1 saw the raw report text; step 2 saw exactly step 1's output.
    let prompts = prompts.lock().expect("prompts lock");
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Morningstar quarterly report."));
    assert!(prompts[0].contains("'Asset Allocation'"));
    assert!(prompts[1].contains(allocation));
    assert!(prompts[1].contains("exceeds 70%"));
}

#[tokio::test]
async fn missing_report_fails_before_any_model_call() {
    init_config_once();

    let (summarizer, prompts) = ScriptedSummarizer::new(vec!["never used"]);
    let _analyzer = Analyzer::new(Box::new(summarizer));

    let error =
        document::load(Path::new("/does/not/exist.pdf")).expect_err("load should fail");
    assert!(matches!(error, DocumentError::NotFound(_)));
    assert!(prompts.lock().expect("prompts lock").is_empty());
}

#[tokio::test]
async fn extractive_pipeline_is_idempotent_and_bounded() {
    init_config_once();

    let analyzer = Analyzer::new(Box::new(ExtractiveSummarizer::new()));
    let document = Document {
        text: "The fund maintains a growth posture. Equities: 75%, Bonds: 20%, Cash: 5%. \
               Turnover stayed low across the quarter. Fees are unchanged. "
            .repeat(20),
    };

    let first = analyzer.analyze(&document).await.expect("first run");
    let second = analyzer.analyze(&document).await.expect("second run");

    assert_eq!(first, second);
    assert!(!first.is_empty());
    assert!(count_tokens(&first) <= MAX_SUMMARY_TOKENS);
}
