use newsmood_model::{ExtractedText, LabelShare, SentimentLabel, SentimentReport};

use crate::classify::{Classification, Classifier};
use crate::polarity::PolarityModel;
use crate::AnalyzeError;

/// Whether a row should be scored at all.
///
/// Blank text is skipped, and so is the no-content sentinel: scoring the
/// placeholder string would count every failed fetch as a Neutral article.
pub fn classifiable(text: &ExtractedText) -> bool {
    match text {
        ExtractedText::Content(s) => !s.trim().is_empty(),
        ExtractedText::NoContent => false,
    }
}

/// Classify every classifiable row, keeping input positions. Skipped rows are `None`.
pub fn classify_all<M: PolarityModel>(
    classifier: &Classifier<M>,
    texts: &[ExtractedText],
) -> Vec<Option<Classification>> {
    let classified: Vec<Option<Classification>> = texts
        .iter()
        .map(|text| classifiable(text).then(|| classifier.classify(text.as_str())))
        .collect();

    tracing::info!(
        rows = texts.len(),
        classified = classified.iter().flatten().count(),
        "Classified articles"
    );
    classified
}

/// Tabulate labels into a percentage distribution with a majority label.
///
/// Shares are ordered by descending count; equal counts fall back to label
/// priority (Positive, Negative, Neutral), which also settles ties for the
/// overall label. An empty input is `AnalyzeError::NoSentimentData`.
pub fn aggregate(labels: &[SentimentLabel]) -> Result<SentimentReport, AnalyzeError> {
    if labels.is_empty() {
        return Err(AnalyzeError::NoSentimentData);
    }

    let total = labels.len();
    let mut shares: Vec<LabelShare> = SentimentLabel::ALL
        .iter()
        .map(|label| (*label, labels.iter().filter(|l| *l == label).count()))
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| LabelShare {
            label,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();

    shares.sort_by(|a, b| b.count.cmp(&a.count).then(a.label.cmp(&b.label)));

    let overall = shares[0].label;
    Ok(SentimentReport {
        total,
        shares,
        overall,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsmood_model::SentimentLabel::*;

    #[test]
    fn test_classifiable_excludes_sentinel_and_blank() {
        assert!(classifiable(&ExtractedText::Content("text".into())));
        assert!(!classifiable(&ExtractedText::Content("  \t".into())));
        assert!(!classifiable(&ExtractedText::NoContent));
    }

    #[test]
    fn test_classify_all_keeps_positions() {
        let classifier = Classifier::english();
        let texts = vec![
            ExtractedText::Content("An excellent, wonderful launch".into()),
            ExtractedText::NoContent,
            ExtractedText::Content("A terrible, awful outcome".into()),
        ];
        let out = classify_all(&classifier, &texts);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].unwrap().label, Positive);
        assert!(out[1].is_none());
        assert_eq!(out[2].unwrap().label, Negative);
    }

    #[test]
    fn test_aggregate_percentages() {
        let report = aggregate(&[Positive, Negative, Positive, Neutral]).unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(report.overall, Positive);
        assert_eq!(report.shares[0].label, Positive);
        assert_eq!(report.shares[0].count, 2);
        assert_eq!(report.percentage_of(Positive), 50.0);
        assert_eq!(report.percentage_of(Negative), 25.0);
        assert_eq!(report.percentage_of(Neutral), 25.0);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let samples: [&[SentimentLabel]; 4] = [
            &[Neutral],
            &[Positive, Negative, Neutral],
            &[Positive, Positive, Negative, Neutral, Neutral, Neutral, Negative],
            &[Negative; 11],
        ];
        for labels in samples {
            let report = aggregate(labels).unwrap();
            let sum: f64 = report.shares.iter().map(|s| s.percentage).sum();
            assert!((sum - 100.0).abs() < 1e-9, "{labels:?} sums to {sum}");
        }
    }

    #[test]
    fn test_only_present_labels_are_listed() {
        let report = aggregate(&[Negative, Negative]).unwrap();
        assert_eq!(report.shares.len(), 1);
        assert_eq!(report.overall, Negative);
        assert!(report.share_of(Positive).is_none());
    }

    #[test]
    fn test_ties_break_by_label_priority() {
        assert_eq!(aggregate(&[Neutral, Positive]).unwrap().overall, Positive);
        assert_eq!(aggregate(&[Neutral, Negative]).unwrap().overall, Negative);
        assert_eq!(aggregate(&[Negative, Positive]).unwrap().overall, Positive);
        assert_eq!(aggregate(&[Neutral, Negative, Positive]).unwrap().overall, Positive);
        // a strict majority still wins over priority
        assert_eq!(aggregate(&[Neutral, Neutral, Positive]).unwrap().overall, Neutral);
    }

    #[test]
    fn test_empty_is_no_data() {
        assert_eq!(aggregate(&[]), Err(AnalyzeError::NoSentimentData));
    }
}
