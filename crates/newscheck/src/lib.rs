pub mod advice;
pub mod classify;
pub mod config;
pub mod error;
pub mod explain;
pub mod input;
pub mod label;
pub mod links;
pub mod pipeline;

pub use advice::{AdviceEntry, AdviceTable, Advisor, TrustedSource};
pub use classify::{
    Classification, Classifier, KeywordClassifier, KeywordSet, ModelClassifier, NaiveBayesModel,
    Prediction, Predictor,
};
pub use config::{Config, Strategy};
pub use error::{NewscheckError, Result};
pub use explain::{ExplanationTable, Explainer};
pub use input::ClassificationInput;
pub use label::{Label, LabelCategory};
pub use links::LinkGenerator;
pub use pipeline::{AnalysisOutcome, AnalysisReport, Pipeline};
