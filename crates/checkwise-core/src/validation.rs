//! Validators gating forward progress through the wizard.
//!
//! Each checklist question is validated according to its [`ItemCheck`]
//! variant. Yes/No and OK/NOT OK questions pass on a positive answer and
//! require a remark on a negative one. Numeric questions require a parseable
//! reading, which the step controller then hands to the numeric evaluator.

use crate::{
    error::ValidationError,
    evaluator::parse_decimal,
    models::{ChecklistItem, EquipmentInfo, ItemCheck},
};

/// What the step controller must do after a question validated cleanly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Nothing further; the step may advance
    Clear,
    /// Evaluate this reading before advancing
    Evaluate(f64),
}

/// Validate the current question.
///
/// `pending_reading` is the scratch input for numeric questions and is
/// ignored for the other variants.
///
/// # Errors
///
/// Returns the [`ValidationError`] describing what the user must fix.
pub fn check_item(item: &ChecklistItem, pending_reading: &str) -> Result<Gate, ValidationError> {
    match &item.check {
        ItemCheck::OkNotOk { result: None } | ItemCheck::YesNo { result: None } => {
            Err(ValidationError::ResultRequired {
                checkpoint: item.checkpoint.clone(),
            })
        }
        ItemCheck::OkNotOk { result: Some(r) } if r.is_negative() => {
            require_remark(item, r.as_str())
        }
        ItemCheck::YesNo { result: Some(r) } if r.is_negative() => require_remark(item, r.as_str()),
        ItemCheck::OkNotOk { result: Some(_) } | ItemCheck::YesNo { result: Some(_) } => {
            Ok(Gate::Clear)
        }
        ItemCheck::NumericEntry { .. } => parse_decimal(pending_reading)
            .map(Gate::Evaluate)
            .ok_or(ValidationError::InvalidReading),
    }
}

fn require_remark(item: &ChecklistItem, result: &'static str) -> Result<Gate, ValidationError> {
    if item.remark.trim().is_empty() {
        Err(ValidationError::RemarkRequired {
            checkpoint: item.checkpoint.clone(),
            result,
        })
    } else {
        Ok(Gate::Clear)
    }
}

/// Validate the Equipment-Info step.
///
/// The serial must be non-blank; the calibration due date must be non-empty.
///
/// # Errors
///
/// Returns `MissingEquipmentSerial` or `MissingCalibrationDate`, serial
/// first.
pub fn check_equipment(equipment: &EquipmentInfo) -> Result<(), ValidationError> {
    if equipment.serial.trim().is_empty() {
        return Err(ValidationError::MissingEquipmentSerial);
    }
    if equipment.calibration_due_date.is_empty() {
        return Err(ValidationError::MissingCalibrationDate);
    }
    Ok(())
}
