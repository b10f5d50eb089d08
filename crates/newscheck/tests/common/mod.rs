#![allow(dead_code)]

use newscheck_lib::{Config, Label, NaiveBayesModel, Pipeline, Result, Strategy};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Train a small model and save it as `model.json`.
    pub fn model_artifact(&self) -> Result<PathBuf> {
        let path = self.path("model.json");
        NaiveBayesModel::train(training_corpus(), 1.0)?.save_to_file(&path)?;
        Ok(path)
    }
}

pub fn training_corpus() -> Vec<(&'static str, Label)> {
    vec![
        ("Miracle cure that doctors do not want you to know", Label::Fake),
        ("Secret plan exposed by anonymous insider", Label::Fake),
        ("Celebrity clone spotted at secret base", Label::Fake),
        ("You will not believe this banned trick", Label::Fake),
        ("Parliament passed the budget bill on Tuesday", Label::Real),
        ("The ministry announced new rail investment", Label::Real),
        ("Officials confirmed the election results", Label::Real),
        ("Central bank reported inflation figures for March", Label::Real),
    ]
}

pub fn rules_pipeline() -> Pipeline {
    Pipeline::from_config(&Config::default()).expect("default config builds a pipeline")
}

pub fn model_pipeline(model_path: &Path) -> Pipeline {
    let config = Config {
        strategy: Strategy::Model,
        model_path: Some(model_path.to_path_buf()),
        ..Config::default()
    };
    Pipeline::from_config(&config).expect("model config builds a pipeline")
}
