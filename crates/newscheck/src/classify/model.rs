//! Delegate strategy backed by a pre-trained artifact.
//!
//! The artifact is loaded once. When loading fails the classifier stays
//! constructed but answers every request with
//! [`NewscheckError::ClassifierUnavailable`], so a missing model disables
//! only this strategy.

use crate::classify::bayes::NaiveBayesModel;
use crate::classify::{Classification, Classifier};
use crate::error::{NewscheckError, Result};
use crate::input::ClassificationInput;
use crate::label::Label;
use std::path::Path;

/// One prediction from an artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Label,
    pub confidence: Option<f64>,
}

/// Fixed predict interface of an opaque trained model.
pub trait Predictor: Send + Sync {
    /// Predict a label for every text in `batch`, in order.
    fn predict(&self, batch: &[&str]) -> Result<Vec<Prediction>>;
}

enum ArtifactState {
    Loaded(Box<dyn Predictor>),
    Unavailable(String),
}

pub struct ModelClassifier {
    state: ArtifactState,
}

impl ModelClassifier {
    pub fn new(predictor: Box<dyn Predictor>) -> Self {
        Self {
            state: ArtifactState::Loaded(predictor),
        }
    }

    /// A classifier that reports `reason` for every request.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: ArtifactState::Unavailable(reason.into()),
        }
    }

    /// Load a Naive Bayes artifact, logging a failure once instead of
    /// returning it.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match NaiveBayesModel::from_file(path) {
            Ok(model) => {
                log::info!(
                    "Loaded model artifact {} ({} labels, {} terms)",
                    path.display(),
                    model.labels().len(),
                    model.vocabulary_size()
                );
                Self::new(Box::new(model))
            }
            Err(err) => {
                log::error!("{}", err);
                Self::unavailable(err.to_string())
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, ArtifactState::Loaded(_))
    }

    /// Reason recorded when the artifact could not be loaded.
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            ArtifactState::Loaded(_) => None,
            ArtifactState::Unavailable(reason) => Some(reason),
        }
    }
}

impl Classifier for ModelClassifier {
    fn name(&self) -> &'static str {
        "model"
    }

    fn classify(&self, input: &ClassificationInput) -> Result<Classification> {
        let predictor = match &self.state {
            ArtifactState::Loaded(predictor) => predictor,
            ArtifactState::Unavailable(reason) => {
                return Err(NewscheckError::ClassifierUnavailable(reason.clone()));
            }
        };

        let mut predictions = predictor.predict(&[input.text()])?;
        if predictions.len() != 1 {
            return Err(NewscheckError::Prediction(format!(
                "expected 1 prediction, model returned {}",
                predictions.len()
            )));
        }
        let prediction = predictions.remove(0);
        log::debug!("model predicted {} ({:?})", prediction.label, prediction.confidence);

        Ok(Classification {
            label: prediction.label,
            strategy: self.name().to_string(),
            score: None,
            confidence: prediction.confidence,
        })
    }
}
