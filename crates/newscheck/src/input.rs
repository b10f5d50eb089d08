use crate::error::{NewscheckError, Result};

/// Text accepted for classification.
///
/// Construction trims the raw text and rejects it when nothing is left, so
/// every value that reaches a classifier is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationInput {
    text: String,
    normalized: String,
}

impl ClassificationInput {
    pub fn new(raw: &str) -> Result<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(NewscheckError::Input(
                "Please enter some text first".to_string(),
            ));
        }

        Ok(Self {
            text: text.to_string(),
            normalized: text.to_lowercase(),
        })
    }

    /// Join a headline and an article body with a single space.
    pub fn from_parts(headline: &str, article: &str) -> Result<Self> {
        Self::new(&format!("{} {}", headline, article))
    }

    /// Trimmed text with its original casing.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased form used for keyword scans.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}
