use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use newsmood_acquire::search::DEFAULT_MAX_RESULTS;
use newsmood_acquire::{DuckDuckGoProvider, HttpFetcher};
use newsmood_analyze::{render, AnalyzeError, Classifier};
use newsmood_model::SearchQuery;

mod pipeline;

const PROMPT: &str = "Please enter your search query: ";

#[derive(Parser)]
#[command(name = "newsmood")]
#[command(about = "Search the web for a topic and report the sentiment of the articles found")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Search query; prompted for interactively when omitted
    query: Option<String>,

    /// Maximum number of article URLs to collect from search
    #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Write a JSON report of every article and the distribution to this path
    #[arg(short, long)]
    report: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directives for the level. The HTML parser crates stay quiet
    /// even at debug/trace.
    fn directives(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug,selectors=warn,html5ever=warn,hyper_util=info",
            LogLevel::Trace => "trace,selectors=warn,html5ever=warn,hyper_util=info",
        }
    }
}

/// Logs go to stderr; stdout carries only the chart and verdict.
fn init_logging(log_level: &LogLevel, utc: bool) {
    use tracing_subscriber::fmt::time::{ChronoLocal, ChronoUtc};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.directives()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr);

    // e.g. 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z".to_string();
    if utc {
        builder.with_timer(ChronoUtc::new(time_format)).init();
    } else {
        builder.with_timer(ChronoLocal::new(time_format)).init();
    }
}

/// Use the query argument if given, otherwise prompt for one line on stdin.
fn read_query(arg: Option<String>) -> Result<SearchQuery> {
    let raw = match arg {
        Some(q) => q,
        None => {
            print!("{PROMPT}");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read search query")?;
            line
        }
    };
    Ok(SearchQuery::new(&raw)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.utc);

    let query = read_query(cli.query)?;
    tracing::info!(query = %query, max_results = cli.max_results, "Starting run");

    let fetcher = HttpFetcher::new()?;
    // One connection pool for both the search provider and the article fetches
    let provider = DuckDuckGoProvider::new(fetcher.client().clone());
    let classifier = Classifier::english();

    let outcome = pipeline::run(&provider, &fetcher, &classifier, &query, cli.max_results).await;

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&outcome.to_report())?;
        std::fs::write(path, &json).with_context(|| format!("Failed to write report to {path}"))?;
        tracing::info!(path = %path, articles = outcome.pages.len(), "Wrote JSON report");
    }

    match &outcome.sentiment {
        Ok(report) => {
            println!("{}", render::render_distribution(report));
            println!();
            println!("{}", render::overall_line(report));
            Ok(())
        }
        Err(AnalyzeError::NoSentimentData) => {
            println!("No sentiment data available.");
            anyhow::bail!(
                "none of the {} candidate articles had classifiable text",
                outcome.pages.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_directives() {
        assert_eq!(LogLevel::Info.directives(), "info");
        assert!(LogLevel::Debug.directives().starts_with("debug,"));
        assert!(LogLevel::Trace.directives().contains("html5ever=warn"));
    }
}
