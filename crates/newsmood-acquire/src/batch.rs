// Concurrent fetch + extract over a URL list.
//
// All per-URL futures are driven together on the calling task with
// `join_all`, so concurrency comes from interleaving I/O waits rather than
// threads. Output slot `i` always belongs to input URL `i`.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::future::join_all;
use futures::FutureExt;
use newsmood_model::{ExtractedText, FetchFailure, FetchOutcome, FetchStats, PageStatus};

use crate::extract::extract;
use crate::fetch::PageFetcher;

/// Outcome of one URL in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub url: String,
    pub status: PageStatus,
    pub text: ExtractedText,
}

/// Fetch and extract every URL concurrently, returning one text per URL in
/// input order. Failed or panicking pages become `ExtractedText::NoContent`.
pub async fn process_all<F>(fetcher: &F, urls: &[String]) -> Vec<ExtractedText>
where
    F: PageFetcher + ?Sized,
{
    process_all_detailed(fetcher, urls)
        .await
        .into_iter()
        .map(|r| r.text)
        .collect()
}

/// Like [`process_all`], but keeps each page's URL and fetch status.
pub async fn process_all_detailed<F>(fetcher: &F, urls: &[String]) -> Vec<PageResult>
where
    F: PageFetcher + ?Sized,
{
    process_with(fetcher, urls, extract).await
}

/// Batch driver with the extraction step supplied by the caller. A panic in
/// either stage aborts only that URL's slot.
async fn process_with<F, X>(fetcher: &F, urls: &[String], extract: X) -> Vec<PageResult>
where
    F: PageFetcher + ?Sized,
    X: Fn(&str) -> ExtractedText + Sync,
{
    tracing::info!(urls = urls.len(), "Fetching articles");

    let extract = &extract;
    let tasks = urls.iter().map(|url| async move {
        let (status, text) = match AssertUnwindSafe(fetch_and_extract(fetcher, url, extract))
            .catch_unwind()
            .await
        {
            Ok(pair) => pair,
            Err(panic) => {
                tracing::error!(url = %url, panic = %panic_message(&*panic), "Page task panicked");
                (PageStatus::Aborted, ExtractedText::NoContent)
            }
        };
        PageResult {
            url: url.clone(),
            status,
            text,
        }
    });

    let results = join_all(tasks).await;

    let stats = fetch_stats(&results);
    tracing::info!(
        total = stats.total,
        fetched = stats.fetched,
        network_errors = stats.network_errors,
        http_errors = stats.http_errors,
        aborted = stats.aborted,
        empty_pages = stats.empty_pages,
        "Fetched articles"
    );

    results
}

async fn fetch_and_extract<F, X>(fetcher: &F, url: &str, extract: &X) -> (PageStatus, ExtractedText)
where
    F: PageFetcher + ?Sized,
    X: Fn(&str) -> ExtractedText + Sync,
{
    match fetcher.fetch(url).await {
        FetchOutcome::Success { body } => {
            let text = extract(&body);
            if !text.is_content() {
                tracing::debug!(url = %url, "No paragraph text on page");
            }
            (PageStatus::Fetched, text)
        }
        // Extraction is skipped entirely for failed fetches
        FetchOutcome::Failure(failure) => (PageStatus::Failed(failure), ExtractedText::NoContent),
    }
}

/// Tally page outcomes for logging and the run report.
pub fn fetch_stats(results: &[PageResult]) -> FetchStats {
    let mut stats = FetchStats {
        total: results.len(),
        ..Default::default()
    };
    for result in results {
        match &result.status {
            PageStatus::Fetched => {
                stats.fetched += 1;
                if !result.text.is_content() {
                    stats.empty_pages += 1;
                }
            }
            PageStatus::Failed(FetchFailure::Network { .. }) => stats.network_errors += 1,
            PageStatus::Failed(FetchFailure::HttpStatus { .. }) => stats.http_errors += 1,
            PageStatus::Aborted => stats.aborted += 1,
        }
    }
    stats
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
