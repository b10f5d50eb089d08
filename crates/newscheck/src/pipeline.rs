//! classify → explain → advise → links, for one input at a time.

use crate::advice::{AdviceEntry, Advisor};
use crate::classify::{Classification, Classifier, KeywordClassifier, ModelClassifier};
use crate::config::{Config, Strategy};
use crate::error::{NewscheckError, Result};
use crate::explain::Explainer;
use crate::input::ClassificationInput;
use crate::label::Label;
use crate::links::LinkGenerator;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub input: String,
    pub classification: Classification,
    pub reasoning: String,
    pub advice: AdviceEntry,
    pub links: BTreeMap<String, String>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn label(&self) -> Label {
        self.classification.label
    }
}

/// Result of one request that got past input validation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Analyzed(AnalysisReport),
    /// The delegate artifact never loaded.
    Unavailable { reason: String },
    /// The delegate rejected this input.
    PredictionFailed { message: String },
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Analyzed(report) => Some(report),
            _ => None,
        }
    }

    /// Label string, or the message that stands in for it.
    pub fn summary(&self) -> String {
        match self {
            AnalysisOutcome::Analyzed(report) => report.label().to_string(),
            AnalysisOutcome::Unavailable { reason } => {
                format!("Classification unavailable: {}", reason)
            }
            AnalysisOutcome::PredictionFailed { message } => {
                format!("Prediction failed: {}", message)
            }
        }
    }
}

pub struct Pipeline {
    classifier: Box<dyn Classifier>,
    explainer: Explainer,
    advisor: Advisor,
    links: LinkGenerator,
    load_warning: Option<String>,
}

impl Pipeline {
    pub fn new(
        classifier: Box<dyn Classifier>,
        explainer: Explainer,
        advisor: Advisor,
        links: LinkGenerator,
    ) -> Self {
        Self {
            classifier,
            explainer,
            advisor,
            links,
            load_warning: None,
        }
    }

    /// Build the pipeline for the configured strategy.
    ///
    /// A model artifact that fails to load does not fail construction; it is
    /// kept as [`Pipeline::load_warning`] and every request answers
    /// [`AnalysisOutcome::Unavailable`].
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut load_warning = None;
        let classifier: Box<dyn Classifier> = match config.strategy {
            Strategy::Rules => Box::new(KeywordClassifier::new(
                config.keywords.fake_signal.clone(),
                config.rules,
            )?),
            Strategy::Model => {
                let model = match &config.model_path {
                    Some(path) => ModelClassifier::load(path),
                    None => {
                        let reason = "no model_path configured for the model strategy";
                        log::error!("{}", reason);
                        ModelClassifier::unavailable(reason)
                    }
                };
                load_warning = model.load_error().map(str::to_string);
                Box::new(model)
            }
        };

        log::info!("Using {} classifier", classifier.name());

        let mut pipeline = Self::new(
            classifier,
            Explainer::new(
                config.keywords.fake_signal.clone(),
                config.keywords.credibility.clone(),
                config.explanations.clone(),
            ),
            Advisor::new(config.advice.clone()),
            LinkGenerator::new(config.links.clone())?,
        );
        pipeline.load_warning = load_warning;
        Ok(pipeline)
    }

    pub fn strategy(&self) -> &'static str {
        self.classifier.name()
    }

    /// Startup failure of the model artifact, if any.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Analyze raw text. Empty or whitespace-only text is an
    /// [`NewscheckError::Input`] and nothing else runs.
    pub fn analyze(&self, raw: &str) -> Result<AnalysisOutcome> {
        let input = ClassificationInput::new(raw)?;
        self.analyze_input(&input)
    }

    /// Analyze a headline and article body joined with a space.
    pub fn analyze_parts(&self, headline: &str, article: &str) -> Result<AnalysisOutcome> {
        let input = ClassificationInput::from_parts(headline, article)?;
        self.analyze_input(&input)
    }

    pub fn analyze_input(&self, input: &ClassificationInput) -> Result<AnalysisOutcome> {
        let classification = match self.classifier.classify(input) {
            Ok(classification) => classification,
            Err(NewscheckError::ClassifierUnavailable(reason)) => {
                return Ok(AnalysisOutcome::Unavailable { reason });
            }
            Err(NewscheckError::Prediction(message)) => {
                log::warn!("Prediction failed: {}", message);
                return Ok(AnalysisOutcome::PredictionFailed { message });
            }
            Err(err) => return Err(err),
        };

        let label = classification.label;
        let reasoning = self.explainer.explain(input.text(), label);
        let advice = self.advisor.entry(label).clone();
        let links = self
            .links
            .links(input.text())?
            .into_iter()
            .map(|(name, url)| (name, url.to_string()))
            .collect();

        Ok(AnalysisOutcome::Analyzed(AnalysisReport {
            input: input.text().to_string(),
            classification,
            reasoning,
            advice,
            links,
            analyzed_at: Utc::now(),
        }))
    }
}
