use std::path::PathBuf;

use checkwise_core::{TemplateCache, TemplateCacheBuilder, WizardBuilder, WizardSession};
use tempfile::TempDir;

pub const UPS_TEMPLATE: &str = r#"{
    "items": [
        {"id": 101, "checkpoint": "Cabinet door seal", "resulttype": "YesNo"},
        {"id": 102, "checkpoint": "Input voltage", "resulttype": "NumericEntry",
         "startVoltage": "210", "endVoltage": 240},
        {"id": 103, "checkpoint": "Fan rotation", "resulttype": "OkNotOk", "remark": null}
    ],
    "globalRemark": "Seeded remark",
    "equipmentUsedSerial": "MM-100",
    "calibrationDueDate": "2026-12-31"
}"#;

/// Helper function to create a template directory holding `ups-install`
pub fn create_template_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("ups-install.json");
    std::fs::write(&path, UPS_TEMPLATE).expect("Failed to write template");
    (temp_dir, path)
}

/// Helper function to create a template cache over a fresh directory
pub fn create_test_cache() -> (TempDir, TemplateCache) {
    let (temp_dir, _) = create_template_dir();
    let cache = TemplateCacheBuilder::new()
        .with_root(Some(temp_dir.path()))
        .build()
        .expect("Failed to create cache");
    (temp_dir, cache)
}

/// Helper function to start a session from the `ups-install` template
pub fn create_test_session() -> (TempDir, WizardSession) {
    let (temp_dir, mut cache) = create_test_cache();
    let input = cache
        .load("ups-install")
        .expect("Failed to load template")
        .clone();
    let session = WizardBuilder::from_input(input)
        .build()
        .expect("Failed to build session");
    (temp_dir, session)
}
