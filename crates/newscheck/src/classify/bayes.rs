//! Multinomial Naive Bayes text model stored as a JSON artifact.
//!
//! Scoring for a label `c` over in-vocabulary tokens `t`:
//!
//! ```text
//! ln P(c) + Σ ln((count(t, c) + α) / (tokens(c) + α·V))
//! ```
//!
//! where `V` is the vocabulary size. Tokens never seen in training are
//! ignored.

use crate::classify::model::{Prediction, Predictor};
use crate::error::{NewscheckError, Result};
use crate::label::Label;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

pub const FORMAT_VERSION: u32 = 1;

/// Lowercase and split on anything that is not alphanumeric.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Training counts for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStats {
    /// Label these counts belong to
    pub label: Label,
    /// Training documents carrying the label
    pub documents: u64,
    /// Sum of all token occurrences in those documents
    pub total_tokens: u64,
    /// Occurrences of each token
    pub token_counts: BTreeMap<String, u64>,
}

/// Trained model as written to and read from the JSON artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    /// Artifact layout version, must equal [`FORMAT_VERSION`]
    format_version: u32,
    /// Additive smoothing applied to every token count
    alpha: f64,
    /// Number of distinct tokens across all labels
    vocabulary_size: usize,
    /// Per-label counts; ties between labels resolve to the earlier entry
    classes: Vec<LabelStats>,
}

impl NaiveBayesModel {
    /// Train from in-memory `(text, label)` pairs with Laplace smoothing
    /// `alpha`.
    pub fn train<I, S>(samples: I, alpha: f64) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Label)>,
        S: AsRef<str>,
    {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(NewscheckError::Training(format!(
                "alpha must be a positive number, got {}",
                alpha
            )));
        }

        let mut by_label: BTreeMap<Label, LabelStats> = BTreeMap::new();
        let mut vocabulary: BTreeSet<String> = BTreeSet::new();

        for (text, label) in samples {
            let stats = by_label.entry(label).or_insert_with(|| LabelStats {
                label,
                documents: 0,
                total_tokens: 0,
                token_counts: BTreeMap::new(),
            });
            stats.documents += 1;

            for token in tokenize(text.as_ref()) {
                stats.total_tokens += 1;
                *stats.token_counts.entry(token.clone()).or_insert(0) += 1;
                vocabulary.insert(token);
            }
        }

        if by_label.is_empty() {
            return Err(NewscheckError::Training("no training samples".to_string()));
        }
        if vocabulary.is_empty() {
            return Err(NewscheckError::Training(
                "training samples contain no tokens".to_string(),
            ));
        }

        log::info!(
            "Trained Naive Bayes model: {} labels, {} terms",
            by_label.len(),
            vocabulary.len()
        );

        Ok(Self {
            format_version: FORMAT_VERSION,
            alpha,
            vocabulary_size: vocabulary.len(),
            classes: by_label.into_values().collect(),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |reason: String| NewscheckError::ArtifactLoad {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let model: NaiveBayesModel =
            serde_json::from_str(&content).map_err(|e| load_error(e.to_string()))?;
        model.validate().map_err(load_error)?;
        Ok(model)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn labels(&self) -> Vec<Label> {
        self.classes.iter().map(|c| c.label).collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.format_version != FORMAT_VERSION {
            return Err(format!(
                "unsupported format version {} (expected {})",
                self.format_version, FORMAT_VERSION
            ));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(format!("alpha must be positive, got {}", self.alpha));
        }
        if self.classes.is_empty() {
            return Err("artifact has no labels".to_string());
        }
        if self.vocabulary_size == 0 {
            return Err("artifact has an empty vocabulary".to_string());
        }
        if let Some(empty) = self.classes.iter().find(|c| c.documents == 0) {
            return Err(format!("label {} has no training documents", empty.label));
        }

        let mut seen = BTreeSet::new();
        let mut total_documents: u64 = 0;
        for class in &self.classes {
            if !seen.insert(class.label) {
                return Err(format!("label {} appears more than once", class.label));
            }
            total_documents = total_documents
                .checked_add(class.documents)
                .ok_or_else(|| "document counts overflow".to_string())?;
        }

        let vocabulary: BTreeSet<&str> = self
            .classes
            .iter()
            .flat_map(|c| c.token_counts.keys().map(String::as_str))
            .collect();
        if vocabulary.len() != self.vocabulary_size {
            return Err(format!(
                "vocabulary_size is {} but token counts hold {} terms",
                self.vocabulary_size,
                vocabulary.len()
            ));
        }
        Ok(())
    }

    fn in_vocabulary(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c.token_counts.contains_key(token))
    }

    fn log_scores(&self, tokens: &[String]) -> Vec<f64> {
        let total_documents: f64 = self.classes.iter().map(|c| c.documents as f64).sum();
        let known: Vec<&String> = tokens.iter().filter(|t| self.in_vocabulary(t)).collect();

        self.classes
            .iter()
            .map(|class| {
                let denominator =
                    class.total_tokens as f64 + self.alpha * self.vocabulary_size as f64;
                let prior = (class.documents as f64 / total_documents).ln();

                known.iter().fold(prior, |score, token| {
                    let count = class.token_counts.get(token.as_str()).copied().unwrap_or(0);
                    score + ((count as f64 + self.alpha) / denominator).ln()
                })
            })
            .collect()
    }

    pub fn predict_one(&self, text: &str) -> Result<Prediction> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(NewscheckError::Prediction(
                "input contains no words the model can read".to_string(),
            ));
        }

        let scores = self.log_scores(&tokens);
        let mut best = 0;
        for (idx, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = idx;
            }
        }

        let normalizer: f64 = scores.iter().map(|s| (s - scores[best]).exp()).sum();

        Ok(Prediction {
            label: self.classes[best].label,
            confidence: Some(1.0 / normalizer),
        })
    }
}

impl Predictor for NaiveBayesModel {
    fn predict(&self, batch: &[&str]) -> Result<Vec<Prediction>> {
        batch.iter().map(|text| self.predict_one(text)).collect()
    }
}
