use serde::Serialize;

use crate::article::{ArticleRecord, FetchStats};
use crate::sentiment::SentimentLabel;

/// Share of the classified articles carrying one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelShare {
    pub label: SentimentLabel,
    pub count: usize,
    /// Percentage of all classified articles, 0–100.
    pub percentage: f64,
}

/// Label distribution over a non-empty set of classified articles.
///
/// `shares` only lists labels that occurred, ordered by descending count
/// and then by label priority. `overall` is always `shares[0].label`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub total: usize,
    pub shares: Vec<LabelShare>,
    pub overall: SentimentLabel,
}

impl SentimentReport {
    pub fn share_of(&self, label: SentimentLabel) -> Option<&LabelShare> {
        self.shares.iter().find(|s| s.label == label)
    }

    pub fn percentage_of(&self, label: SentimentLabel) -> f64 {
        self.share_of(label).map(|s| s.percentage).unwrap_or(0.0)
    }
}

/// Everything one run produced, written by `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub query: String,
    /// RFC 3339 timestamp of when the run finished.
    pub generated_at: String,
    pub fetch: FetchStats,
    pub articles: Vec<ArticleRecord>,
    /// `None` when no article could be classified.
    pub sentiment: Option<SentimentReport>,
}

impl RunReport {
    pub fn new(
        query: &str,
        fetch: FetchStats,
        articles: Vec<ArticleRecord>,
        sentiment: Option<SentimentReport>,
    ) -> Self {
        Self {
            query: query.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            fetch,
            articles,
            sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{ExtractedText, PageStatus};

    #[test]
    fn test_percentage_of_missing_label_is_zero() {
        let report = SentimentReport {
            total: 2,
            shares: vec![LabelShare {
                label: SentimentLabel::Positive,
                count: 2,
                percentage: 100.0,
            }],
            overall: SentimentLabel::Positive,
        };
        assert_eq!(report.percentage_of(SentimentLabel::Positive), 100.0);
        assert_eq!(report.percentage_of(SentimentLabel::Negative), 0.0);
    }

    #[test]
    fn test_run_report_json_shape() {
        let articles = vec![ArticleRecord {
            url: "https://example.com/a".into(),
            status: PageStatus::Fetched,
            text: ExtractedText::NoContent,
            polarity: None,
            label: None,
        }];
        let report = RunReport::new("rust", FetchStats::default(), articles, None);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["query"], "rust");
        assert_eq!(value["articles"][0]["outcome"], "fetched");
        assert_eq!(value["articles"][0]["text"], "no content available");
        assert!(value["articles"][0].get("label").is_none());
        assert!(value["sentiment"].is_null());
    }
}
