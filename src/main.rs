// src/main.rs
mod carzone;
mod extractors;
mod listing;
mod output;
mod prompt;
mod scrape;
mod storage;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use carzone::ListingClient;
use extractors::{load_rules, FieldExtractor};
use prompt::{parse_locators, Prompter};
use storage::{ExportChoice, ExportSink};
use utils::AppError;

/// Scrape used-car listings from Carzone into a table, CSV or spreadsheet
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated listing URLs (prompted for when omitted)
    #[arg(short, long)]
    urls: Option<String>,

    /// Export format (prompted for when omitted)
    #[arg(short, long, value_enum)]
    export: Option<ExportChoice>,

    /// JSON selector table replacing the built-in Carzone selectors
    #[arg(short, long)]
    selectors: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = carzone::DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Extra attempts per URL after a failed fetch
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Directory for car_details.csv / car_details.xlsx (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also print the results as JSON after the table
    #[arg(long)]
    json: bool,
}

/// Fills `slot` with `init` on first use and hands back the value.
fn get_or_try_init<T, E, F>(slot: &mut Option<T>, init: F) -> Result<&mut T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let value = match slot.take() {
        Some(value) => value,
        None => init()?,
    };
    Ok(slot.insert(value))
}

/// Prompter is only created when a question actually has to be asked.
fn prompter(slot: &mut Option<Prompter>) -> Result<&mut Prompter, AppError> {
    Ok(get_or_try_init(slot, Prompter::new)?)
}

async fn run(args: Args) -> Result<(), AppError> {
    // 1. Selector table
    let extractor = match &args.selectors {
        Some(path) => FieldExtractor::from_rules(&load_rules(path)?)?,
        None => FieldExtractor::carzone()?,
    };
    let client = ListingClient::new(Duration::from_secs(args.timeout_secs), args.retries)?;
    let mut prompts = None;

    // 2. Locators
    let locators = match &args.urls {
        Some(urls) => parse_locators(urls),
        None => prompter(&mut prompts)?.ask_locators()?,
    };
    tracing::debug!("Processing {} URLs", locators.len());

    // 3. Fetch and extract, one page at a time
    let records = scrape::run(&locators, &client, &extractor).await;

    // 4. Render
    let rendered = output::render(&records);
    println!("{}", rendered.console_table);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendered.structured_rows)?);
    }

    // 5. Optional export
    let choice = match args.export {
        Some(choice) => choice,
        None => prompter(&mut prompts)?.ask_export_choice()?,
    };
    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    if let Some(path) = ExportSink::new(&output_dir).export(choice, &rendered)? {
        println!("Results saved to {}", path.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Unexpected error: {}", e);
            ExitCode::FAILURE
        }
    }
}
