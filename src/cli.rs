// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use std::time::Duration;

use clap::{ArgAction, Parser};
use web_crawler::FetchSettings;

#[derive(Parser, Debug)]
#[command(
    name = "web-crawler",
    version,
    about = "Crawl a website and list the links found on every page",
    long_about = "web-crawler starts from a single address, follows links with a pool of \
                  concurrent workers up to a maximum depth, and prints every visited page \
                  together with the links found on it."
)]
pub struct Cli {
    /// Address to start crawling from (e.g., https://example.com)
    pub target: String,

    /// Only crawl pages with the same scheme and host as the target
    ///
    /// Pass --same-domain false to follow links to other sites too
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub same_domain: bool,

    /// Maximum crawl depth, the target being depth 1 (0 = unlimited)
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub max_depth: i64,

    /// Number of workers in each worker pool (values below 1 mean 10)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub workers: i64,

    /// How many times a page is tried before it counts as failed
    #[arg(long, default_value_t = 5)]
    pub max_attempts: u32,

    /// Timeout for a single HTTP request, in seconds
    #[arg(long, default_value_t = 10)]
    pub request_timeout: u64,

    /// Stop the whole crawl after this many seconds and print what was found
    #[arg(long)]
    pub deadline: Option<u64>,

    /// Output results in JSON format instead of text
    #[arg(long)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            timeout: Duration::from_secs(self.request_timeout),
            max_attempts: self.max_attempts,
            ..FetchSettings::default()
        }
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline.map(Duration::from_secs)
    }
}
