use crate::error::{NewscheckError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome assigned to a piece of text.
///
/// Serialized with its canonical spelling (`"Real"`, `"Possibly Fake"`,
/// `"Fake"`). Parsing ignores case, so binary models that emit `"REAL"` and
/// `"FAKE"` map onto the same labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Label {
    Real,
    PossiblyFake,
    Fake,
}

/// Which keyword list explains a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCategory {
    FakeSignal,
    Credibility,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Real, Label::PossiblyFake, Label::Fake];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "Real",
            Label::PossiblyFake => "Possibly Fake",
            Label::Fake => "Fake",
        }
    }

    pub fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "real" => Ok(Label::Real),
            "possibly fake" => Ok(Label::PossiblyFake),
            "fake" => Ok(Label::Fake),
            _ => Err(NewscheckError::Config(format!("Invalid label: {}", s))),
        }
    }

    pub fn category(&self) -> LabelCategory {
        match self {
            Label::Real => LabelCategory::Credibility,
            Label::PossiblyFake | Label::Fake => LabelCategory::FakeSignal,
        }
    }

    pub fn is_suspicious(&self) -> bool {
        self.category() == LabelCategory::FakeSignal
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Label {
    type Error = NewscheckError;

    fn try_from(value: String) -> Result<Self> {
        Label::from_str(&value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.as_str().to_string()
    }
}
