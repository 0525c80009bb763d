// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so --json output stays clean)
// 3. Run the crawl
// 4. Print the visited pages and their links
// 5. Exit with proper code (0 = success, 1 = some pages failed, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;
use web_crawler::{parse_target, CrawlOptions, CrawlResult, DefaultCrawler};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins if set, otherwise -v flags pick the level
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("web_crawler={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Returns:
//   Ok(0) = crawl finished, every page loaded
//   Ok(1) = crawl finished, but some pages failed or the deadline cut it short
//   Err   = the crawl could not run
async fn run(cli: Cli) -> Result<i32> {
    let target = parse_target(&cli.target).context("cannot start crawl")?;

    let crawler =
        DefaultCrawler::http(&cli.fetch_settings()).context("failed to set up the crawler")?;

    let mut options = CrawlOptions::new(target, cli.same_domain, cli.max_depth, cli.workers);
    if let Some(deadline) = cli.deadline() {
        options = options.with_deadline(deadline);
    }

    if !cli.json {
        println!("🔍 Crawling '{}'", options.target);
    }

    let result = crawler.crawl_with_options(options).await?;

    print_results(&result, cli.json)?;

    if result.completed() && result.failures().is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Prints the results either as text or JSON
fn print_results(result: &CrawlResult, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(result)?;
        println!("{}", json_output);
    } else {
        print_text(result);
    }
    Ok(())
}

fn print_text(result: &CrawlResult) {
    for (page, links) in result.urls() {
        if links.is_empty() {
            continue;
        }
        println!("{} links to:", page);
        for link in links {
            println!("- {}", link);
        }
    }

    if !result.failures().is_empty() {
        println!();
        println!("⚠️  Failed pages:");
        for (page, reason) in result.failures() {
            println!("- {} ({})", page, reason);
        }
    }

    println!();
    println!("crawled {} pages", result.page_count());
    if !result.completed() {
        println!("⏱️  crawl stopped early, results are partial");
    }
}
