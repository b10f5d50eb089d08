mod common;

use common::*;
use newscheck_lib::{AnalysisOutcome, Config, Label, NewscheckError, Pipeline, Strategy};

#[test]
fn test_sensational_headline_is_fake() {
    let outcome = rules_pipeline()
        .analyze("SHOCKING secret conspiracy uncovered")
        .unwrap();
    let report = outcome.report().expect("classified");

    assert_eq!(report.label(), Label::Fake);
    assert_eq!(report.classification.score, Some(3));
    for keyword in ["shocking", "secret", "conspiracy"] {
        assert!(report.reasoning.contains(keyword), "{} missing", keyword);
    }
    assert_eq!(report.advice.title, "Advice if Fake:");
}

#[test]
fn test_neutral_headline_is_real() {
    let outcome = rules_pipeline()
        .analyze("Government announced new policy today")
        .unwrap();
    let report = outcome.report().expect("classified");

    assert_eq!(report.label(), Label::Real);
    assert_eq!(report.classification.score, Some(0));
    assert!(report.reasoning.contains("announced"));
    assert_eq!(report.advice.title, "Advice if Real:");
}

#[test]
fn test_single_keyword_is_possibly_fake() {
    let outcome = rules_pipeline().analyze("Unbelievable weather this weekend").unwrap();
    let report = outcome.report().expect("classified");
    assert_eq!(report.label(), Label::PossiblyFake);
    assert!(report.reasoning.contains("\"unbelievable\""));
}

#[test]
fn test_whitespace_input_produces_nothing() {
    let err = rules_pipeline().analyze("  ").unwrap_err();
    assert!(matches!(err, NewscheckError::Input(_)));
}

#[test]
fn test_whitespace_rejected_for_model_strategy() {
    let fixture = TestFixture::new().unwrap();
    let pipeline = model_pipeline(&fixture.model_artifact().unwrap());
    assert!(matches!(
        pipeline.analyze("\t \n"),
        Err(NewscheckError::Input(_))
    ));
}

#[test]
fn test_missing_artifact_is_reported_and_unavailable() {
    let fixture = TestFixture::new().unwrap();
    let pipeline = model_pipeline(&fixture.path("does-not-exist.json"));

    let warning = pipeline.load_warning().expect("load failure reported");
    assert!(warning.contains("does-not-exist.json"));

    for text in ["SHOCKING secret conspiracy", "Government announced new policy"] {
        let outcome = pipeline.analyze(text).unwrap();
        match &outcome {
            AnalysisOutcome::Unavailable { reason } => assert_eq!(reason, warning),
            other => panic!("expected unavailable, got {:?}", other),
        }
        assert!(outcome.report().is_none());
        assert!(outcome.summary().starts_with("Classification unavailable"));
    }
}

#[test]
fn test_model_strategy_classifies() {
    let fixture = TestFixture::new().unwrap();
    let pipeline = model_pipeline(&fixture.model_artifact().unwrap());
    assert!(pipeline.load_warning().is_none());
    assert_eq!(pipeline.strategy(), "model");

    let outcome = pipeline.analyze("Secret miracle cure exposed").unwrap();
    let report = outcome.report().expect("classified");
    assert_eq!(report.label(), Label::Fake);
    assert!(report.classification.confidence.is_some());
    assert!(report.classification.score.is_none());
    assert!(report.reasoning.contains("\"miracle\""));

    let outcome = pipeline.analyze("The ministry confirmed the budget").unwrap();
    assert_eq!(outcome.report().unwrap().label(), Label::Real);
}

#[test]
fn test_model_explanation_falls_back_without_keywords() {
    let fixture = TestFixture::new().unwrap();
    let pipeline = model_pipeline(&fixture.model_artifact().unwrap());

    // Fake according to the model, but no fake-signal keyword is present.
    let outcome = pipeline.analyze("celebrity clone spotted").unwrap();
    let report = outcome.report().unwrap();
    assert_eq!(report.label(), Label::Fake);
    assert_eq!(report.reasoning, Config::default().explanations.fake);
}

#[test]
fn test_unreadable_input_is_prediction_failure() {
    let fixture = TestFixture::new().unwrap();
    let pipeline = model_pipeline(&fixture.model_artifact().unwrap());

    let outcome = pipeline.analyze("?!?!").unwrap();
    assert!(matches!(outcome, AnalysisOutcome::PredictionFailed { .. }));
    assert!(outcome.summary().starts_with("Prediction failed"));

    // The failure does not affect the next request.
    let outcome = pipeline.analyze("secret miracle").unwrap();
    assert!(outcome.report().is_some());
}

#[test]
fn test_corrupt_artifact_is_unavailable() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.write("corrupt.json", "{ not a model").unwrap();
    let pipeline = model_pipeline(&path);

    assert!(pipeline.load_warning().is_some());
    assert!(matches!(
        pipeline.analyze("anything").unwrap(),
        AnalysisOutcome::Unavailable { .. }
    ));
}

#[test]
fn test_config_file_selects_strategy() {
    let fixture = TestFixture::new().unwrap();
    let model = fixture.model_artifact().unwrap();
    let config_path = fixture
        .write(
            "newscheck.toml",
            &format!("strategy = \"model\"\nmodel_path = {:?}\n", model.display().to_string()),
        )
        .unwrap();

    let config = Config::load(Some(config_path.as_path())).unwrap();
    assert_eq!(config.strategy, Strategy::Model);

    let pipeline = Pipeline::from_config(&config).unwrap();
    assert_eq!(pipeline.strategy(), "model");
    assert!(pipeline.load_warning().is_none());
}

#[test]
fn test_custom_keywords_change_classification() {
    let config = Config::from_toml(
        r#"
        [keywords]
        fake_signal = ["aliens", "hoax"]
        "#,
    )
    .unwrap();
    let pipeline = Pipeline::from_config(&config).unwrap();

    let outcome = pipeline.analyze("Aliens behind moon landing hoax").unwrap();
    assert_eq!(outcome.report().unwrap().label(), Label::Fake);

    let outcome = pipeline.analyze("SHOCKING secret conspiracy").unwrap();
    assert_eq!(outcome.report().unwrap().label(), Label::Real);
}

#[test]
fn test_links_use_trimmed_input() {
    let outcome = rules_pipeline().analyze("  Moon made of cheese  ").unwrap();
    let report = outcome.report().unwrap();
    assert_eq!(report.input, "Moon made of cheese");
    assert_eq!(
        report.links["google_news"],
        "https://news.google.com/search?q=Moon+made+of+cheese"
    );
}
