// One end-to-end run: search, fetch + extract, classify, aggregate.

use newsmood_acquire::{fetch_stats, process_all_detailed, PageFetcher, PageResult, ResultProvider};
use newsmood_analyze::{aggregate, classify_all, AnalyzeError, Classification, Classifier, PolarityModel};
use newsmood_model::{ArticleRecord, ExtractedText, RunReport, SearchQuery, SentimentReport};

/// Everything a run produced, positionally aligned with the candidate URLs.
#[derive(Debug)]
pub struct RunOutcome {
    pub query: SearchQuery,
    pub pages: Vec<PageResult>,
    pub classifications: Vec<Option<Classification>>,
    pub sentiment: Result<SentimentReport, AnalyzeError>,
}

impl RunOutcome {
    pub fn to_report(&self) -> RunReport {
        let articles = self
            .pages
            .iter()
            .zip(&self.classifications)
            .map(|(page, classification)| ArticleRecord {
                url: page.url.clone(),
                status: page.status.clone(),
                text: page.text.clone(),
                polarity: classification.map(|c| c.polarity),
                label: classification.map(|c| c.label),
            })
            .collect();

        RunReport::new(
            self.query.as_str(),
            fetch_stats(&self.pages),
            articles,
            self.sentiment.as_ref().ok().cloned(),
        )
    }
}

pub async fn run<P, F, M>(
    provider: &P,
    fetcher: &F,
    classifier: &Classifier<M>,
    query: &SearchQuery,
    max_results: usize,
) -> RunOutcome
where
    P: ResultProvider + ?Sized,
    F: PageFetcher + ?Sized,
    M: PolarityModel,
{
    let urls = provider.search(query.as_str(), max_results).await;
    if urls.is_empty() {
        tracing::warn!(query = %query, "Search returned no article URLs");
    }

    let pages = process_all_detailed(fetcher, &urls).await;
    let texts: Vec<ExtractedText> = pages.iter().map(|p| p.text.clone()).collect();
    let classifications = classify_all(classifier, &texts);

    let labels: Vec<_> = classifications.iter().flatten().map(|c| c.label).collect();
    let sentiment = aggregate(&labels);

    RunOutcome {
        query: query.clone(),
        pages,
        classifications,
        sentiment,
    }
}
