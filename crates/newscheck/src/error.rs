use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewscheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Failed to load model artifact {path}: {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },

    #[error("Classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("Prediction error: {0}")]
    Prediction(String),

    #[error("Training error: {0}")]
    Training(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("User input error: {0}")]
    UserInput(String),
}

impl From<dialoguer::Error> for NewscheckError {
    fn from(err: dialoguer::Error) -> Self {
        NewscheckError::UserInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NewscheckError>;
