use regex::Regex;

use crate::lexicon::Lexicon;

/// Scores text on a [-1, 1] polarity scale (negative to positive).
pub trait PolarityModel: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// Tokens after a negator that it still applies to.
const NEGATION_WINDOW: usize = 3;

/// Factor applied to a negated word's score: flips and dampens it, so
/// "not good" reads mildly negative rather than as bad as "bad".
const NEGATION_FACTOR: f64 = -0.5;

/// Averages lexicon scores over the words of a text.
///
/// An intensifier scales the next word only; a negator flips every scored
/// word within the next [`NEGATION_WINDOW`] tokens. Text with no scored words
/// is 0.0.
#[derive(Debug, Clone)]
pub struct LexiconModel {
    lexicon: Lexicon,
    tokenizer: Regex,
}

impl LexiconModel {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::english())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            // Words with an optional apostrophe suffix: don't, isn't, world's
            tokenizer: Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("valid regex"),
        }
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase().replace('\u{2019}', "'");
        self.tokenizer
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityModel for LexiconModel {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores = Vec::new();
        let mut intensity = 1.0;
        let mut negation_left = 0usize;

        for token in self.tokens(text) {
            if self.lexicon.is_negator(&token) {
                negation_left = NEGATION_WINDOW;
                intensity = 1.0;
                continue;
            }
            if let Some(factor) = self.lexicon.intensity(&token) {
                intensity = factor;
                continue;
            }

            if let Some(base) = self.lexicon.score(&token) {
                let mut score = base * intensity;
                if negation_left > 0 {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score.clamp(-1.0, 1.0));
            }

            intensity = 1.0;
            negation_left = negation_left.saturating_sub(1);
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
