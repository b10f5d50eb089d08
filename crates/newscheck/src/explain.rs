//! Reasoning sentences for a label.

use crate::classify::KeywordSet;
use crate::label::{Label, LabelCategory};
use serde::{Deserialize, Serialize};

/// Fixed sentences used when no keyword of the label's category matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationTable {
    /// Used for `Fake` when no fake-signal keyword is found.
    pub fake: String,
    /// Used for `Possibly Fake` when no fake-signal keyword is found.
    pub possibly_fake: String,
    /// Used for `Real` when no credibility keyword is found.
    pub real: String,
}

impl Default for ExplanationTable {
    fn default() -> Self {
        Self {
            fake: "The text contains several sensational or misleading signals, which indicate a high likelihood of misinformation.".to_string(),
            possibly_fake: "At least one suspicious signal is detected. It may or may not be accurate, but requires verification.".to_string(),
            real: "There are no common signals of misinformation or exaggerated keywords detected.".to_string(),
        }
    }
}

impl ExplanationTable {
    pub fn get(&self, label: Label) -> &str {
        match label {
            Label::Fake => &self.fake,
            Label::PossiblyFake => &self.possibly_fake,
            Label::Real => &self.real,
        }
    }
}

/// Builds the reasoning sentence for a label from the keywords of its
/// category, falling back to [`ExplanationTable`].
pub struct Explainer {
    fake_signal: KeywordSet,
    credibility: KeywordSet,
    fallbacks: ExplanationTable,
}

impl Explainer {
    pub fn new(fake_signal: KeywordSet, credibility: KeywordSet, fallbacks: ExplanationTable) -> Self {
        Self {
            fake_signal,
            credibility,
            fallbacks,
        }
    }

    fn keywords_for(&self, label: Label) -> &KeywordSet {
        match label.category() {
            LabelCategory::FakeSignal => &self.fake_signal,
            LabelCategory::Credibility => &self.credibility,
        }
    }

    /// Keywords of the label's category found in `text`, in list order.
    pub fn matched_keywords<'a>(&'a self, text: &str, label: Label) -> Vec<&'a str> {
        self.keywords_for(label).matches(&text.to_lowercase())
    }

    pub fn explain(&self, text: &str, label: Label) -> String {
        let matched = self.matched_keywords(text, label);
        if matched.is_empty() {
            return self.fallbacks.get(label).to_string();
        }

        let noun = if matched.len() == 1 { "keyword" } else { "keywords" };
        let listed = join_quoted(&matched);

        match label {
            Label::Fake => format!(
                "The text contains sensational or misleading {} {}, which indicates a high likelihood of misinformation.",
                noun, listed
            ),
            Label::PossiblyFake => format!(
                "The text contains the suspicious {} {}. It may or may not be accurate, but requires verification.",
                noun, listed
            ),
            Label::Real => format!(
                "The text uses credible reporting language ({}) and shows no common signals of misinformation.",
                listed
            ),
        }
    }
}

fn join_quoted(words: &[&str]) -> String {
    let quoted: Vec<String> = words.iter().map(|w| format!("\"{}\"", w)).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explainer() -> Explainer {
        Explainer::new(
            KeywordSet::new(["shocking", "secret", "conspiracy"]),
            KeywordSet::new(["announced", "confirmed"]),
            ExplanationTable::default(),
        )
    }

    #[test]
    fn test_join_quoted() {
        assert_eq!(join_quoted(&[]), "");
        assert_eq!(join_quoted(&["a"]), "\"a\"");
        assert_eq!(join_quoted(&["a", "b"]), "\"a\" and \"b\"");
        assert_eq!(join_quoted(&["a", "b", "c"]), "\"a\", \"b\" and \"c\"");
    }

    #[test]
    fn test_fake_lists_matches() {
        let text = explainer().explain("SHOCKING secret conspiracy uncovered", Label::Fake);
        insta::assert_snapshot!(text, @r#"The text contains sensational or misleading keywords "shocking", "secret" and "conspiracy", which indicates a high likelihood of misinformation."#);
    }

    #[test]
    fn test_possibly_fake_singular() {
        let text = explainer().explain("A secret meeting", Label::PossiblyFake);
        assert!(text.contains("suspicious keyword \"secret\"."));
    }

    #[test]
    fn test_real_uses_credibility_list() {
        let text = explainer().explain("Government announced new policy today", Label::Real);
        assert!(text.contains("\"announced\""));
        assert!(!text.contains("shocking"));
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let explainer = explainer();
        assert_eq!(
            explainer.explain("Nothing to see", Label::Fake),
            ExplanationTable::default().fake
        );
        assert_eq!(
            explainer.explain("Nothing to see", Label::Real),
            ExplanationTable::default().real
        );
    }

    #[test]
    fn test_deterministic() {
        let explainer = explainer();
        let text = "Officials confirmed and announced";
        assert_eq!(
            explainer.explain(text, Label::Real),
            explainer.explain(text, Label::Real)
        );
    }
}
