//! # Nature Scrape Checker
//!
//! Grades the output of a web-scraping exercise. The scraper under test
//! visits the Nature 2020 article listing, keeps the articles of one type
//! and writes each one's teaser to `Page_<i>/<Title_Words>.txt`. This tool
//! scrapes the same pages itself and checks the files against what it finds.
//!
//! ## Usage
//!
//! ```sh
//! nature_scrape_checker --pages 2 --article-type "News Feature"
//! printf '1\nNews\n' | nature_scrape_checker --stdin --json
//! ```
//!
//! ## Pipeline
//!
//! 1. **Reference**: scrape the listing page for links of the requested type
//! 2. **Count**: the page directory must hold exactly that many `.txt` files
//! 3. **Spot-check**: one random article's body must match its file, modulo
//!    whitespace
//!
//! The exit status is 0 for a correct case and 1 otherwise.

use clap::Parser;
use std::error::Error;
use std::io::Read;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cleanup;
mod cli;
mod config;
mod errors;
mod models;
mod scrapers;
mod utils;
mod validator;

use cli::Cli;
use config::{CheckerConfig, load_config};
use models::{TestCase, Verdict};
use scrapers::HttpFetcher;
use scrapers::nature::ReferenceExtractor;
use validator::OutputValidator;

#[tokio::main]
#[instrument]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init (stderr, stdout is for verdicts) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    if args.list_cases {
        for case in TestCase::defaults() {
            println!("{}\n{}", case.pages, case.article_type);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => CheckerConfig::default(),
    };
    if args.keep_output {
        config.cleanup = false;
    }

    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };

    if args.clean {
        let removed = cleanup::remove_page_dirs(&root, &config.dir_prefix).await;
        info!(removed, root = %root.display(), "Clean complete");
        return Ok(ExitCode::SUCCESS);
    }

    let case = if args.stdin {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        input.parse::<TestCase>()?
    } else if let Some(case) = args.inline_case() {
        case?
    } else {
        error!("No case given: pass --pages with --article-type, or --stdin");
        return Err("a case is required (see --help)".into());
    };
    info!(%case, root = %root.display(), "Checking case");

    let fetcher = HttpFetcher::new(&config)?;
    let mut validator = OutputValidator::new(
        ReferenceExtractor::new(fetcher),
        config,
        root,
        args.spot_check(),
    );

    let verdict = match validator.run_case(&case).await {
        Ok(()) => Verdict::correct(&case),
        Err(e) => {
            if e.is_retryable() {
                warn!(error = %e, "Check hit a transport failure; re-running may help");
            }
            Verdict::wrong(&case, &e)
        }
    };

    if args.json {
        println!("{}", serde_json::to_string(&verdict)?);
    } else {
        println!("{verdict}");
    }

    let elapsed = start_time.elapsed();
    info!(
        passed = verdict.passed,
        millis = elapsed.as_millis() as u64,
        "Execution complete"
    );

    Ok(if verdict.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
