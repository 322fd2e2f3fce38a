//! Session-level models: phase, equipment metadata and completion payloads.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ChecklistItem;

/// Coarse state of a wizard session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Equipment-Info form is displayed
    EquipmentForm,
    /// One of the checklist questions is displayed
    InProgress,
    /// All questions answered; awaiting finish
    FinalReview,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::EquipmentForm => "equipment_form",
            Phase::InProgress => "in_progress",
            Phase::FinalReview => "final_review",
        }
    }

    /// Human-readable label for the phase.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::EquipmentForm => "Equipment Info",
            Phase::InProgress => "Checklist",
            Phase::FinalReview => "Final Review",
        }
    }
}

/// Measuring equipment used for the inspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentInfo {
    /// Serial number of the equipment used
    #[serde(rename = "equipmentUsedSerial")]
    pub serial: String,

    /// Calibration due date of the equipment used
    pub calibration_due_date: String,
}

/// Payload handed off when a checklist is finished.
///
/// `items[0]` carries the equipment metadata, which is the shape the
/// consuming backend expects; `equipment` repeats it as a sibling object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinishedChecklist {
    /// All items with their final results and remarks
    pub items: Vec<ChecklistItem>,

    /// Free-text remark for the checklist as a whole
    pub global_remark: String,

    /// Equipment metadata as entered in the session
    pub equipment: EquipmentInfo,

    /// Timestamp when the checklist was finished (UTC)
    pub completed_at: Timestamp,
}

/// Terminal result of running a wizard session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The checklist was finished from the final review
    Finished(FinishedChecklist),
    /// The wizard was closed without finishing
    Cancelled,
}

impl SessionOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionOutcome::Finished(_))
    }
}
