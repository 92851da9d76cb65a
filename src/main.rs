use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use fundreport::{analyzer::Analyzer, config, document, logging, summarization};

#[derive(Parser)]
#[command(
    name = "fundreport",
    about = "Extracts the asset allocation from a PDF fund report and flags high stock exposure"
)]
struct Cli {
    /// Path to the PDF report; prompted for on stdin when omitted.
    report: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    config::init_config();
    logging::init_tracing();

    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = match cli.report {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    println!("Extracting text from PDF...");
    let document = document::load(&path)?;

    let analyzer = Analyzer::new(summarization::get_summarizer());
    println!("Running the chain...");
    let result = analyzer.analyze(&document).await?;

    println!("\nAsset Allocation and Risk Notification:");
    println!("{result}");
    Ok(())
}

fn prompt_for_path() -> anyhow::Result<PathBuf> {
    print!("Enter the path to the PDF report: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        anyhow::bail!("no report path provided");
    }
    Ok(PathBuf::from(trimmed))
}
