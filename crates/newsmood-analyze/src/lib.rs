use thiserror::Error;

pub mod aggregate;
pub mod classify;
pub mod lexicon;
pub mod polarity;
pub mod render;

pub use aggregate::{aggregate, classifiable, classify_all};
pub use classify::{Classification, Classifier};
pub use polarity::{LexiconModel, PolarityModel};

#[derive(Debug, Error, PartialEq)]
pub enum AnalyzeError {
    /// Nothing survived filtering, so there is no distribution to report.
    #[error("no sentiment data available")]
    NoSentimentData,
}
