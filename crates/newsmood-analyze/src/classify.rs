use newsmood_model::SentimentLabel;

use crate::polarity::{LexiconModel, PolarityModel};

/// Polarity of one text and the label it maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub polarity: f64,
    pub label: SentimentLabel,
}

/// Labels texts by thresholding a polarity model's score.
#[derive(Debug, Clone)]
pub struct Classifier<M = LexiconModel> {
    model: M,
}

impl Classifier<LexiconModel> {
    pub fn english() -> Self {
        Self::new(LexiconModel::new())
    }
}

impl<M: PolarityModel> Classifier<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn classify(&self, text: &str) -> Classification {
        let polarity = self.model.polarity(text);
        Classification {
            polarity,
            label: SentimentLabel::from_polarity(polarity),
        }
    }
}
