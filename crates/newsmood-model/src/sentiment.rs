use serde::Serialize;
use std::fmt;

/// Polarity strictly above this is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity strictly below this is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Three-way sentiment of one article.
///
/// Declaration order is also the tie-break priority when two labels share
/// the largest share of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Map a polarity scalar in [-1, 1] to a label. Both thresholds are strict,
    /// so exactly 0.1 and -0.1 are Neutral. NaN is Neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_polarity_thresholds() {
        assert_eq!(SentimentLabel::from_polarity(0.15), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.2), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_from_polarity_boundaries_are_neutral() {
        assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(f64::NAN), SentimentLabel::Neutral);
    }

    #[test]
    fn test_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }
}
