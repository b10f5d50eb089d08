//! Classification strategies.
//!
//! Every strategy implements [`Classifier`], so the pipeline around it does
//! not change when configuration swaps the keyword rules for a trained model.

pub mod bayes;
pub mod model;
pub mod rules;

pub use bayes::{tokenize, NaiveBayesModel};
pub use model::{ModelClassifier, Prediction, Predictor};
pub use rules::{KeywordClassifier, KeywordSet, RuleThresholds};

use crate::error::Result;
use crate::input::ClassificationInput;
use crate::label::Label;
use serde::{Deserialize, Serialize};

/// Label produced for one input, with whatever evidence the strategy has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    pub strategy: String,
    /// Number of distinct fake-signal keywords found (rule strategy).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<usize>,
    /// Posterior probability of the label (model strategy).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

pub trait Classifier: Send + Sync {
    /// Short strategy name shown in reports.
    fn name(&self) -> &'static str;

    fn classify(&self, input: &ClassificationInput) -> Result<Classification>;
}
