use crate::label::Label;
use serde::{Deserialize, Serialize};

/// A fact-checking or reference site offered alongside advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedSource {
    /// Display name, e.g. "Alt News".
    pub name: String,
    /// Absolute `http(s)` address.
    pub url: String,
}

impl TrustedSource {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Static advice shown for one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceEntry {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub sources: Vec<TrustedSource>,
}

impl AdviceEntry {
    fn new(title: &str, steps: &[&str], sources: Vec<TrustedSource>) -> Self {
        Self {
            title: title.to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
            sources,
        }
    }

    /// Title followed by one `- step` line per step.
    pub fn render(&self) -> String {
        let mut out = self.title.clone();
        for step in &self.steps {
            out.push_str("\n- ");
            out.push_str(step);
        }
        out
    }
}

/// One entry per label, so every lookup succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceTable {
    pub real: AdviceEntry,
    pub possibly_fake: AdviceEntry,
    pub fake: AdviceEntry,
}

impl Default for AdviceTable {
    fn default() -> Self {
        Self {
            fake: AdviceEntry::new(
                "Advice if Fake:",
                &[
                    "Immediately verify using trusted fact-checking sites",
                    "Do NOT share this information unless verified",
                    "Look for official government or credible news sources",
                ],
                vec![
                    TrustedSource::new("Alt News", "https://www.altnews.in/"),
                    TrustedSource::new("BOOM Fact Check", "https://www.boomlive.in/"),
                    TrustedSource::new("Factly", "https://factly.in/"),
                ],
            ),
            possibly_fake: AdviceEntry::new(
                "Advice if Possibly Fake:",
                &[
                    "Cross-check with multiple reliable news outlets",
                    "Check publication time and author credibility",
                    "Search if reputed media outlets covered the same story",
                ],
                vec![
                    TrustedSource::new(
                        "Google Fact Check Explorer",
                        "https://toolbox.google.com/factcheck/explorer",
                    ),
                    TrustedSource::new("Snopes", "https://www.snopes.com/"),
                ],
            ),
            real: AdviceEntry::new(
                "Advice if Real:",
                &[
                    "Still check original source for any updates",
                    "Share responsibly from official/reputed outlets",
                    "Verify facts from authentic government or national agencies",
                ],
                vec![
                    TrustedSource::new("Reuters", "https://www.reuters.com/"),
                    TrustedSource::new("BBC News", "https://www.bbc.com/"),
                    TrustedSource::new("The Hindu", "https://www.thehindu.com/"),
                ],
            ),
        }
    }
}

impl AdviceTable {
    pub fn get(&self, label: Label) -> &AdviceEntry {
        match label {
            Label::Real => &self.real,
            Label::PossiblyFake => &self.possibly_fake,
            Label::Fake => &self.fake,
        }
    }
}

/// Looks up the advice entry for a label. Every label has one.
pub struct Advisor {
    table: AdviceTable,
}

impl Advisor {
    pub fn new(table: AdviceTable) -> Self {
        Self { table }
    }

    pub fn entry(&self, label: Label) -> &AdviceEntry {
        self.table.get(label)
    }

    pub fn advise(&self, label: Label) -> String {
        self.entry(label).render()
    }
}
