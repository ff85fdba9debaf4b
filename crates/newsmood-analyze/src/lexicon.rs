//! Built-in English polarity lexicon.
//!
//! Scores are in [-1, 1] and follow the adjective-centric style of common
//! pattern-based sentiment lexicons: evaluative adjectives and a handful of
//! verbs/nouns that carry clear sentiment in news copy.

use std::collections::HashMap;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("benefit", 0.4),
    ("beneficial", 0.5),
    ("best", 1.0),
    ("better", 0.5),
    ("boost", 0.4),
    ("bright", 0.7),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("celebrate", 0.5),
    ("clean", 0.37),
    ("confident", 0.5),
    ("delighted", 0.7),
    ("easy", 0.43),
    ("effective", 0.6),
    ("efficient", 0.5),
    ("encouraging", 0.5),
    ("enjoy", 0.4),
    ("excellent", 1.0),
    ("exciting", 0.3),
    ("fantastic", 0.4),
    ("favorable", 0.5),
    ("fine", 0.42),
    ("fortunate", 0.5),
    ("free", 0.4),
    ("fresh", 0.3),
    ("friendly", 0.38),
    ("gain", 0.4),
    ("gains", 0.4),
    ("generous", 0.5),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("healthy", 0.5),
    ("helpful", 0.5),
    ("hope", 0.3),
    ("hopeful", 0.5),
    ("impressive", 1.0),
    ("improve", 0.4),
    ("improved", 0.4),
    ("improvement", 0.4),
    ("innovative", 0.5),
    ("interesting", 0.5),
    ("love", 0.5),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("nice", 0.6),
    ("optimistic", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("popular", 0.6),
    ("positive", 0.23),
    ("powerful", 0.3),
    ("progress", 0.4),
    ("promising", 0.5),
    ("proud", 0.8),
    ("recover", 0.3),
    ("recovery", 0.3),
    ("reliable", 0.5),
    ("remarkable", 0.75),
    ("rich", 0.38),
    ("safe", 0.5),
    ("secure", 0.4),
    ("smart", 0.21),
    ("solid", 0.3),
    ("strong", 0.43),
    ("succeed", 0.5),
    ("success", 0.5),
    ("successful", 0.75),
    ("superb", 1.0),
    ("support", 0.3),
    ("thrilled", 0.7),
    ("thriving", 0.6),
    ("useful", 0.3),
    ("valuable", 0.5),
    ("welcome", 0.8),
    ("win", 0.8),
    ("winning", 0.5),
    ("wonderful", 1.0),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("abuse", -0.6),
    ("afraid", -0.6),
    ("alarming", -0.5),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("catastrophic", -0.9),
    ("collapse", -0.6),
    ("concern", -0.3),
    ("concerned", -0.3),
    ("crash", -0.6),
    ("crisis", -0.6),
    ("critical", -0.3),
    ("cruel", -1.0),
    ("damage", -0.5),
    ("dangerous", -0.6),
    ("dead", -0.2),
    ("deadly", -0.7),
    ("decline", -0.3),
    ("difficult", -0.5),
    ("disappointing", -0.6),
    ("disaster", -0.8),
    ("disgusting", -1.0),
    ("dreadful", -0.9),
    ("dull", -0.31),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.32),
    ("fake", -0.5),
    ("fear", -0.5),
    ("fraud", -0.6),
    ("guilty", -0.5),
    ("harm", -0.5),
    ("harmful", -0.6),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("hostile", -0.6),
    ("hurt", -0.5),
    ("illegal", -0.5),
    ("inferior", -0.6),
    ("injured", -0.5),
    ("lose", -0.4),
    ("losing", -0.4),
    ("loss", -0.4),
    ("losses", -0.4),
    ("mediocre", -0.5),
    ("miserable", -1.0),
    ("negative", -0.3),
    ("painful", -0.7),
    ("pathetic", -1.0),
    ("poor", -0.4),
    ("problem", -0.3),
    ("risk", -0.3),
    ("risky", -0.5),
    ("sad", -0.5),
    ("scandal", -0.6),
    ("scary", -0.5),
    ("serious", -0.33),
    ("severe", -0.5),
    ("sick", -0.71),
    ("slump", -0.5),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("threat", -0.5),
    ("tragic", -0.75),
    ("ugly", -0.7),
    ("unfair", -0.5),
    ("unhappy", -0.6),
    ("unstable", -0.5),
    ("upset", -0.5),
    ("violent", -0.8),
    ("weak", -0.38),
    ("worried", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Words that scale the polarity of the word right after them.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("barely", 0.4),
    ("deeply", 1.4),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("hugely", 1.4),
    ("incredibly", 1.5),
    ("particularly", 1.2),
    ("quite", 1.1),
    ("really", 1.3),
    ("remarkably", 1.3),
    ("slightly", 0.5),
    ("so", 1.2),
    ("somewhat", 0.7),
    ("too", 1.2),
    ("truly", 1.3),
    ("very", 1.3),
];

/// Words that flip the polarity of what follows within a short window.
const NEGATORS: &[&str] = &[
    "aren't", "cannot", "can't", "couldn't", "didn't", "doesn't", "don't", "hardly", "isn't",
    "neither", "never", "no", "nor", "not", "nothing", "shouldn't", "wasn't", "weren't",
    "without", "won't", "wouldn't",
];

/// Lookup tables for a lexicon-based polarity model.
#[derive(Debug, Clone)]
pub struct Lexicon {
    scores: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negators: Vec<String>,
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        let scores = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(w, s)| (w.to_string(), *s))
            .collect();
        let intensifiers = INTENSIFIERS.iter().map(|(w, m)| (w.to_string(), *m)).collect();
        let negators = NEGATORS.iter().map(|w| w.to_string()).collect();
        Self {
            scores,
            intensifiers,
            negators,
        }
    }

    /// Add or replace a scored word.
    pub fn with_word(mut self, word: &str, score: f64) -> Self {
        self.scores.insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
        self
    }

    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.iter().any(|n| n == word)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
