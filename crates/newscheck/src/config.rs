use crate::advice::AdviceTable;
use crate::classify::{KeywordSet, RuleThresholds};
use crate::error::{NewscheckError, Result};
use crate::explain::ExplanationTable;
use crate::links::{default_templates, LinkGenerator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

pub const CONFIG_ENV: &str = "NEWSCHECK_CONFIG";
pub const CONFIG_FILE: &str = "newscheck.toml";

/// Which classifier answers requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Rules,
    Model,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Rules => "rules",
            Strategy::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub fake_signal: KeywordSet,
    pub credibility: KeywordSet,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            fake_signal: KeywordSet::new([
                "shocking",
                "secret",
                "breaking!!!",
                "miracle",
                "unbelievable",
                "banned",
                "hidden truth",
                "exposed",
                "100% guarantee",
                "cure",
                "conspiracy",
            ]),
            credibility: KeywordSet::new([
                "announced",
                "according to",
                "confirmed",
                "official",
                "reported",
                "statement",
                "spokesperson",
                "published",
                "government",
                "ministry",
                "study",
                "data",
            ]),
        }
    }
}

/// Process-wide tables, loaded once and never mutated.
///
/// Every field is optional in the TOML file; missing ones keep their
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_path: Option<PathBuf>,
    pub rules: RuleThresholds,
    pub keywords: KeywordConfig,
    pub explanations: ExplanationTable,
    pub advice: AdviceTable,
    pub links: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            model_path: None,
            rules: RuleThresholds::default(),
            keywords: KeywordConfig::default(),
            explanations: ExplanationTable::default(),
            advice: AdviceTable::default(),
            links: default_templates(),
        }
    }
}

impl Config {
    /// Resolve and load the configuration.
    ///
    /// Order: explicit path, `NEWSCHECK_CONFIG`, the XDG config file, then
    /// built-in defaults.
    pub fn load(path_override: Option<&Path>) -> Result<Self> {
        let path = match path_override {
            Some(path) => Some(path.to_path_buf()),
            None => match std::env::var(CONFIG_ENV) {
                Ok(env_path) => Some(PathBuf::from(env_path)),
                Err(_) => BaseDirectories::with_prefix("newscheck")
                    .ok()
                    .and_then(|xdg| xdg.find_config_file(CONFIG_FILE)),
            },
        };

        let config = match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                log::info!("No configuration file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NewscheckError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NewscheckError::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Location `config init` writes to.
    pub fn default_path() -> Result<PathBuf> {
        let xdg = BaseDirectories::with_prefix("newscheck").map_err(|e| {
            NewscheckError::Config(format!("Failed to initialize XDG directories: {}", e))
        })?;
        xdg.place_config_file(CONFIG_FILE).map_err(|e| {
            NewscheckError::Config(format!("Failed to create config directory: {}", e))
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;

        if self.keywords.fake_signal.is_empty() {
            return Err(NewscheckError::Config(
                "keywords.fake_signal cannot be empty".to_string(),
            ));
        }
        if self.keywords.credibility.is_empty() {
            return Err(NewscheckError::Config(
                "keywords.credibility cannot be empty".to_string(),
            ));
        }

        LinkGenerator::new(self.links.clone())?;
        Ok(())
    }
}
