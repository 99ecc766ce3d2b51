use std::{fs, path::Path, sync::Arc};

use machine_learning::{
    Artifact,
    artifact::{ActFnSpec, LayerSpec, ModelSpec},
};
use predictor::{
    EmbarkPort, FEATURE_NAMES, ModelCache, PassengerInput, PredictionError, Sex, TicketClass,
    load_model, predict_survival,
};

fn logistic(feature_names: &[&str]) -> Artifact {
    Artifact {
        feature_names: Some(feature_names.iter().map(|s| s.to_string()).collect()),
        classes: vec![0, 1],
        model: ModelSpec::Sequential {
            layers: vec![LayerSpec::Dense {
                dim: (5, 1),
                act_fn: Some(ActFnSpec::Sigmoid { amp: 1. }),
                params: vec![-1.1, -2.6, -0.04, 0.002, -0.2, 5.],
            }],
        },
    }
}

fn save(artifact: &Artifact, dir: &Path) -> std::path::PathBuf {
    let path = dir.join("titanic_model.json");
    artifact.save(&path).unwrap();
    path
}

fn woman() -> PassengerInput {
    PassengerInput {
        sex: Sex::Female,
        age: 25.,
        ticket_class: TicketClass::First,
        fare: 100.,
        embark_port: EmbarkPort::Southampton,
    }
}

fn man() -> PassengerInput {
    PassengerInput {
        sex: Sex::Male,
        age: 40.,
        ticket_class: TicketClass::Third,
        fare: 7.5,
        embark_port: EmbarkPort::Queenstown,
    }
}

#[test]
fn saved_artifact_predicts() {
    let tmp = tempfile::tempdir().unwrap();
    let path = save(&logistic(&FEATURE_NAMES), tmp.path());

    let model = load_model(&path).unwrap();

    let woman = predict_survival(&woman(), Some(model.as_ref())).unwrap();
    assert!(woman.survived);
    assert!(woman.confidence > 0.9);

    let man = predict_survival(&man(), Some(model.as_ref())).unwrap();
    assert!(!man.survived);
    assert!(man.confidence < 0.1);
}

#[test]
fn confidence_is_the_survival_probability_for_both_outcomes() {
    let tmp = tempfile::tempdir().unwrap();
    let path = save(&logistic(&FEATURE_NAMES), tmp.path());
    let model = load_model(&path).unwrap();

    for input in [woman(), man()] {
        let res = predict_survival(&input, Some(model.as_ref())).unwrap();
        assert_eq!(res.survived, res.confidence >= 0.5);
    }
}

#[test]
fn mismatched_feature_names_fail_inference() {
    let tmp = tempfile::tempdir().unwrap();
    let path = save(
        &logistic(&["Sex", "Pclass", "Age", "Fare", "Embarked"]),
        tmp.path(),
    );
    let model = load_model(&path).unwrap();

    let res = predict_survival(&woman(), Some(model.as_ref()));

    let Err(PredictionError::InferenceFailed(msg)) = res else {
        panic!("expected an inference failure, got {res:?}");
    };
    assert!(msg.contains("feature names should match"));
    assert!(
        PredictionError::InferenceFailed(msg)
            .to_string()
            .starts_with("Error during prediction: ")
    );
}

#[test]
fn artifact_without_feature_names_matches_by_position() {
    let tmp = tempfile::tempdir().unwrap();
    let mut artifact = logistic(&FEATURE_NAMES);
    artifact.feature_names = None;
    let path = save(&artifact, tmp.path());

    let model = load_model(&path).unwrap();

    assert!(predict_survival(&woman(), Some(model.as_ref())).is_ok());
}

#[test]
fn hand_written_artifact_loads() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("titanic_model.json");
    fs::write(
        &path,
        r#"{
            "feature_names": ["Pclass", "Sex", "Age", "Fare", "Embarked"],
            "model": {
                "forest": {
                    "nfeatures": 5,
                    "trees": [
                        { "nodes": [
                            { "split": { "feature": 1, "threshold": 0.5, "left": 1, "right": 2 } },
                            { "leaf": { "value": [1.0, 3.0] } },
                            { "leaf": { "value": [4.0, 1.0] } }
                        ] }
                    ]
                }
            }
        }"#,
    )
    .unwrap();

    let model = load_model(&path).unwrap();

    let woman = predict_survival(&woman(), Some(model.as_ref())).unwrap();
    assert!(woman.survived);
    assert_eq!(woman.confidence, 0.75);

    let man = predict_survival(&man(), Some(model.as_ref())).unwrap();
    assert!(!man.survived);
    assert_eq!(man.confidence, 0.2);
}

#[test]
fn cache_reads_the_artifact_once() {
    let tmp = tempfile::tempdir().unwrap();
    let path = save(&logistic(&FEATURE_NAMES), tmp.path());
    let cache = ModelCache::new(&path);

    let first = cache.get().unwrap();
    fs::remove_file(&path).unwrap();
    let second = cache.get().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn cache_remembers_a_failed_load() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("titanic_model.json");
    let cache = ModelCache::new(&path);

    assert!(cache.get().is_err());
    save(&logistic(&FEATURE_NAMES), tmp.path());

    assert!(cache.model().is_none());
}

#[test]
fn shipped_demo_artifact_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../titanic_model.json");

    let model = load_model(&path).unwrap();

    let res = predict_survival(&PassengerInput::default(), Some(model.as_ref())).unwrap();
    assert!((0.0..=1.0).contains(&res.confidence));
}
