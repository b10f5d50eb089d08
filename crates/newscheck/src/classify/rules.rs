//! Keyword-score rule engine.
//!
//! The score of a text is the number of distinct fake-signal keywords it
//! contains as plain substrings after lowercasing. Two thresholds turn the
//! score into a label.

use crate::classify::{Classification, Classifier};
use crate::error::{NewscheckError, Result};
use crate::input::ClassificationInput;
use crate::label::Label;
use serde::{Deserialize, Serialize};

/// Ordered list of lowercase trigger substrings without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !unique.contains(&keyword) {
                unique.push(keyword);
            }
        }
        Self { keywords: unique }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keywords contained in `normalized`, in list order.
    ///
    /// `normalized` must already be lowercase.
    pub fn matches<'a>(&'a self, normalized: &str) -> Vec<&'a str> {
        self.keywords
            .iter()
            .filter(|keyword| normalized.contains(keyword.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn count_matches(&self, normalized: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| normalized.contains(keyword.as_str()))
            .count()
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(keywords: Vec<String>) -> Self {
        KeywordSet::new(keywords)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.keywords
    }
}

/// Score boundaries for the rule strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// Minimum score labelled Fake.
    pub fake_threshold: usize,
    /// Minimum score labelled Possibly Fake.
    pub possibly_fake_threshold: usize,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            fake_threshold: 2,
            possibly_fake_threshold: 1,
        }
    }
}

impl RuleThresholds {
    pub fn validate(&self) -> Result<()> {
        if self.possibly_fake_threshold == 0 {
            return Err(NewscheckError::Config(
                "possibly_fake_threshold must be at least 1".to_string(),
            ));
        }
        if self.fake_threshold <= self.possibly_fake_threshold {
            return Err(NewscheckError::Config(format!(
                "fake_threshold ({}) must be greater than possibly_fake_threshold ({})",
                self.fake_threshold, self.possibly_fake_threshold
            )));
        }
        Ok(())
    }

    pub fn label_for(&self, score: usize) -> Label {
        if score >= self.fake_threshold {
            Label::Fake
        } else if score >= self.possibly_fake_threshold {
            Label::PossiblyFake
        } else {
            Label::Real
        }
    }
}

pub struct KeywordClassifier {
    fake_signal: KeywordSet,
    thresholds: RuleThresholds,
}

impl KeywordClassifier {
    pub fn new(fake_signal: KeywordSet, thresholds: RuleThresholds) -> Result<Self> {
        thresholds.validate()?;
        if fake_signal.is_empty() {
            return Err(NewscheckError::Config(
                "Fake-signal keyword list is empty".to_string(),
            ));
        }
        Ok(Self {
            fake_signal,
            thresholds,
        })
    }

    pub fn score(&self, normalized: &str) -> usize {
        self.fake_signal.count_matches(normalized)
    }
}

impl Classifier for KeywordClassifier {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn classify(&self, input: &ClassificationInput) -> Result<Classification> {
        let score = self.score(input.normalized());
        let label = self.thresholds.label_for(score);
        log::debug!("keyword score {} -> {}", score, label);

        Ok(Classification {
            label,
            strategy: self.name().to_string(),
            score: Some(score),
            confidence: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> KeywordClassifier {
        KeywordClassifier::new(
            KeywordSet::new(["shocking", "secret", "conspiracy", "cure"]),
            RuleThresholds::default(),
        )
        .unwrap()
    }

    fn classify(text: &str) -> Classification {
        let input = ClassificationInput::new(text).unwrap();
        classifier().classify(&input).unwrap()
    }

    #[test]
    fn test_keyword_set_normalizes_and_dedups() {
        let set = KeywordSet::new(["Secret", " secret ", "", "CURE"]);
        assert_eq!(set.as_slice(), &["secret".to_string(), "cure".to_string()]);
    }

    #[test]
    fn test_matches_keep_list_order() {
        let set = KeywordSet::new(["secret", "shocking"]);
        assert_eq!(set.matches("shocking secret"), vec!["secret", "shocking"]);
    }

    #[test]
    fn test_score_counts_distinct_keywords() {
        let result = classify("secret secret SECRET");
        assert_eq!(result.score, Some(1));
        assert_eq!(result.label, Label::PossiblyFake);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(classify("Weather is mild today").label, Label::Real);
        assert_eq!(classify("A shocking turn").label, Label::PossiblyFake);
        assert_eq!(classify("Shocking secret revealed").label, Label::Fake);
    }

    #[test]
    fn test_substring_containment() {
        // "cure" is found inside "secure"; no tokenization is applied.
        assert_eq!(classify("A secure vault").score, Some(1));
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = RuleThresholds {
            fake_threshold: 3,
            possibly_fake_threshold: 2,
        };
        let engine = KeywordClassifier::new(
            KeywordSet::new(["shocking", "secret", "conspiracy"]),
            thresholds,
        )
        .unwrap();

        let input = ClassificationInput::new("shocking secret").unwrap();
        assert_eq!(engine.classify(&input).unwrap().label, Label::PossiblyFake);
        let input = ClassificationInput::new("shocking").unwrap();
        assert_eq!(engine.classify(&input).unwrap().label, Label::Real);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let thresholds = RuleThresholds {
            fake_threshold: 1,
            possibly_fake_threshold: 1,
        };
        assert!(thresholds.validate().is_err());

        let zero = RuleThresholds {
            fake_threshold: 2,
            possibly_fake_threshold: 0,
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_empty_keyword_list_rejected() {
        let result = KeywordClassifier::new(KeywordSet::default(), RuleThresholds::default());
        assert!(matches!(result, Err(NewscheckError::Config(_))));
    }
}
