//! Parameter structures for checklist operations
//!
//! These structures are shared across interfaces (CLI, tests, embedding
//! applications) without framework-specific derives. Interface layers wrap
//! them with their own argument types and convert via `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │
//! └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::ChecklistItem};

/// Contents of a checklist input file.
///
/// Carries the ordered items plus optional seeds for the session. A bare
/// JSON array of items is accepted as well, see [`ChecklistInput::from_json`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChecklistInput {
    /// Ordered checklist items (required, non-empty)
    pub items: Vec<ChecklistItem>,
    /// Initial global remark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_remark: Option<String>,
    /// Default equipment serial, used when the first item carries none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_used_serial: Option<String>,
    /// Default calibration due date, used when the first item carries none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration_due_date: Option<String>,
}

impl ChecklistInput {
    /// Parse a checklist document, accepting either the full object form or
    /// a bare array of items.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Serialization` if the document is malformed.
    /// The error names the offending field of the form that was picked.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim_start().starts_with('[') {
            let items = serde_json::from_str::<Vec<ChecklistItem>>(json)?;
            return Ok(items.into());
        }
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<ChecklistItem>> for ChecklistInput {
    fn from(items: Vec<ChecklistItem>) -> Self {
        ChecklistInput {
            items,
            ..Default::default()
        }
    }
}

/// Parameters for evaluating a single reading outside a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EvaluateReading {
    /// Measured value as entered
    pub reading: String,
    /// Lower bound of the acceptable range
    pub start: String,
    /// Upper bound of the acceptable range
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemCheck;

    #[test]
    fn test_from_json_full_form() {
        let json = r#"{
            "items": [
                {"id": 1, "checkpoint": "Earthing", "resulttype": "OkNotOk"}
            ],
            "globalRemark": "site A",
            "equipmentUsedSerial": "MM-100"
        }"#;

        let input = ChecklistInput::from_json(json).expect("valid document");
        assert_eq!(input.items.len(), 1);
        assert_eq!(input.global_remark.as_deref(), Some("site A"));
        assert_eq!(input.equipment_used_serial.as_deref(), Some("MM-100"));
        assert_eq!(input.calibration_due_date, None);
    }

    #[test]
    fn test_from_json_bare_array() {
        let json = r#"[
            {"id": 1, "checkpoint": "Cabinet clean", "resulttype": "YesNo", "remark": null},
            {"id": 2, "checkpoint": "Input", "resulttype": "NumericEntry",
             "startVoltage": "210", "endVoltage": 240}
        ]"#;

        let input = ChecklistInput::from_json(json).expect("valid document");
        assert_eq!(input.items.len(), 2);
        assert_eq!(input.items[0].remark, "");
        assert!(matches!(
            input.items[1].check,
            ItemCheck::NumericEntry { .. }
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_result_type() {
        let json = r#"[{"id": 1, "checkpoint": "x", "resulttype": "Photo"}]"#;
        assert!(ChecklistInput::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_reports_the_missing_field() {
        let bare = r#"[{"id": 1, "resulttype": "YesNo"}]"#;
        let err = ChecklistInput::from_json(bare).expect_err("checkpoint is required");
        assert!(err.to_string().contains("missing field `checkpoint`"), "{err}");

        let full = r#"  {"items": [{"id": 1, "resulttype": "YesNo"}]}"#;
        let err = ChecklistInput::from_json(full).expect_err("checkpoint is required");
        assert!(err.to_string().contains("missing field `checkpoint`"), "{err}");

        let err = ChecklistInput::from_json(r#"{"globalRemark": "x"}"#).expect_err("no items");
        assert!(err.to_string().contains("missing field `items`"), "{err}");
    }
}
