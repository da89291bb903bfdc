use correction_forecast::models::ModelFamily;
use correction_forecast::{FileModelStore, ForecastError};
use correction_math::{CorrectionTableKind, Period, RateObservation};
use tempfile::TempDir;

fn artifact() -> correction_forecast::ModelArtifact {
    let samples = vec![
        RateObservation::new(Period::new(2024, 1).unwrap(), 0.9),
        RateObservation::new(Period::new(2024, 2).unwrap(), 0.8),
    ];
    ModelFamily::DecisionTree.train(&samples).unwrap()
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let store = FileModelStore::new(dir.path());
    let kind = CorrectionTableKind::Selic;

    assert!(!store.exists(kind));
    let path = store.save(kind, &artifact()).unwrap();

    assert!(path.ends_with("selic.apk"));
    assert!(store.exists(kind));
    assert_eq!(store.load(kind).unwrap(), artifact());
}

#[test]
fn test_missing_model() {
    let dir = TempDir::new().unwrap();
    let store = FileModelStore::new(dir.path());
    let kind = CorrectionTableKind::JusticaFederal;

    assert!(matches!(store.load(kind), Err(ForecastError::ModelNotFound(_))));
    assert!(matches!(store.delete(kind), Err(ForecastError::ModelNotFound(_))));
    let bytes = artifact().to_bytes().unwrap();
    assert!(matches!(
        store.replace_bytes(kind, &bytes),
        Err(ForecastError::ModelNotFound(_))
    ));
}

#[test]
fn test_upload_replace_delete() {
    let dir = TempDir::new().unwrap();
    let store = FileModelStore::new(dir.path().join("models"));
    let kind = CorrectionTableKind::Selic;
    let bytes = artifact().to_bytes().unwrap();

    store.write_bytes(kind, &bytes).unwrap();
    assert_eq!(store.read_bytes(kind).unwrap(), bytes);

    store.replace_bytes(kind, &bytes).unwrap();
    store.delete(kind).unwrap();
    assert!(!store.exists(kind));
}

#[test]
fn test_rejects_invalid_upload() {
    let dir = TempDir::new().unwrap();
    let store = FileModelStore::new(dir.path());

    let result = store.write_bytes(CorrectionTableKind::Selic, b"\x00\x01garbage");
    assert!(matches!(result, Err(ForecastError::ModelError(_))));
    assert!(!store.exists(CorrectionTableKind::Selic));
}
