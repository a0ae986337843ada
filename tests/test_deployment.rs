//! # tests/test_deployment.rs
//!
//! Tests des Deployment-Verzeichnisses: das Nachschlagen registrierter
//! Vertrags-Identitäten, die JSON-Serialisierung und das Speichern und
//! Laden über das Dateisystem.

use market_lib::{DeploymentRecord, MarketCoreError};
use tempfile::tempdir;

#[test]
fn test_register_and_lookup() {
    let mut record = DeploymentRecord::new();
    record.register("market", "did:web:market.example");
    record.register("galerie-collection", "did:key:zCollection");

    assert_eq!(record.identity_of("market").unwrap(), "did:web:market.example");
    assert_eq!(
        record.identity_of("galerie-collection").unwrap(),
        "did:key:zCollection"
    );
}

#[test]
fn test_unknown_contract_lookup() {
    let record = DeploymentRecord::new();
    let result = record.identity_of("missing");
    assert!(matches!(
        result,
        Err(MarketCoreError::UnknownContract(name)) if name == "missing"
    ));
}

#[test]
fn test_register_overwrites_previous_identity() {
    let mut record = DeploymentRecord::new();
    record.register("market", "did:web:old.example");
    record.register("market", "did:web:new.example");
    assert_eq!(record.identity_of("market").unwrap(), "did:web:new.example");
}

#[test]
fn test_json_round_trip() {
    let mut record = DeploymentRecord::new();
    record.register("market", "did:web:market.example");
    record.register("token", "did:key:zToken");

    let json = record.to_json().unwrap();
    let restored = DeploymentRecord::from_json(&json).unwrap();
    assert_eq!(restored, record);
}

#[test]
fn test_save_and_load_from_disk() {
    let dir = tempdir().expect("temp dir must be creatable");
    let path = dir.path().join("deployment.json");

    let mut record = DeploymentRecord::new();
    record.register("market", "did:web:market.example");
    record.save(&path).unwrap();

    let loaded = DeploymentRecord::load(&path).unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempdir().expect("temp dir must be creatable");
    let path = dir.path().join("does-not-exist.json");
    assert!(matches!(
        DeploymentRecord::load(&path),
        Err(MarketCoreError::Io(_))
    ));
}
