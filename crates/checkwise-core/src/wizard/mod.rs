//! Checklist wizard session: step controller, item store and finish
//! assembler.
//!
//! A [`WizardSession`] walks a technician through an ordered checklist:
//!
//! ```text
//! ┌────────────────┐    ┌──────────────────────┐    ┌────────────────┐
//! │ Equipment Info │───▶│ Question 0 .. N-1    │───▶│  Final Review  │──▶ finish
//! │ (serial, date) │◀───│ (validated per type) │◀───│ (global remark)│
//! └────────────────┘    └──────────────────────┘    └────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Creates sessions from caller-supplied items and seeds
//! - [`step_ops`]: Advance/back transitions under validation gates
//! - [`item_ops`]: Edits to the displayed question and session fields
//! - [`finish`]: Finish assembler and cancellation
//! - [`actions`]: Single-action reducer used by the async runner
//!
//! # Examples
//!
//! ```rust
//! use checkwise_core::{
//!     models::{Answer, ChecklistItem, ItemCheck, Phase},
//!     WizardBuilder,
//! };
//!
//! # fn main() -> checkwise_core::Result<()> {
//! let items = vec![
//!     ChecklistItem::new(1, "Cabinet earthing", ItemCheck::ok_not_ok()),
//!     ChecklistItem::new(2, "Input voltage", ItemCheck::numeric(210.0, 240.0)),
//! ];
//! let mut session = WizardBuilder::new(items)
//!     .with_equipment_used(Some("MM-100"))
//!     .with_calibration_date(Some("2026-12-31"))
//!     .build()?;
//!
//! session.advance()?;
//! session.set_answer(Answer::Ok)?;
//! session.advance()?;
//! session.set_numeric_input("229.5")?;
//! assert_eq!(session.advance()?, Phase::FinalReview);
//!
//! let finished = session.finish()?;
//! assert_eq!(finished.items[1].remark, "Measured: 229.5V (Range: 210V - 240V)");
//! assert_eq!(finished.items[0].equipment_used_serial.as_deref(), Some("MM-100"));
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod builder;
pub mod finish;
pub mod item_ops;
pub mod step_ops;


pub use actions::Action;
pub use builder::WizardBuilder;

use crate::{
    error::{Result, WizardError},
    models::{ChecklistItem, ChecklistSummary, EquipmentInfo, Phase},
};

/// One checklist run, from the equipment form to finish or cancellation.
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub(crate) items: Vec<ChecklistItem>,
    pub(crate) current_index: usize,
    pub(crate) show_equipment_form: bool,
    pub(crate) equipment: EquipmentInfo,
    pub(crate) global_remark: String,
    pub(crate) pending_numeric_input: String,
    pub(crate) closed: bool,
}

impl WizardSession {
    /// Current phase, derived from the step index and the equipment form
    /// flag.
    pub fn phase(&self) -> Phase {
        if self.show_equipment_form {
            Phase::EquipmentForm
        } else if self.current_index >= self.items.len() {
            Phase::FinalReview
        } else {
            Phase::InProgress
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Index of the displayed question; equals `items().len()` during the
    /// final review.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The displayed question, if the session is in progress.
    pub fn current_item(&self) -> Option<&ChecklistItem> {
        match self.phase() {
            Phase::InProgress => self.items.get(self.current_index),
            Phase::EquipmentForm | Phase::FinalReview => None,
        }
    }

    pub fn equipment(&self) -> &EquipmentInfo {
        &self.equipment
    }

    pub fn global_remark(&self) -> &str {
        &self.global_remark
    }

    /// Scratch input of the displayed numeric question.
    pub fn pending_numeric_input(&self) -> &str {
        &self.pending_numeric_input
    }

    /// Whether the session has finished or been cancelled.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Progress through the checklist as a percentage.
    ///
    /// `0` on the equipment form, `100` at final review, otherwise the share
    /// of questions reached including the displayed one.
    pub fn progress_percent(&self) -> f64 {
        match self.phase() {
            Phase::EquipmentForm => 0.0,
            Phase::FinalReview => 100.0,
            Phase::InProgress => {
                (self.current_index + 1) as f64 / self.items.len() as f64 * 100.0
            }
        }
    }

    pub fn summary(&self) -> ChecklistSummary {
        ChecklistSummary::from_items(&self.items)
    }

    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(WizardError::SessionClosed)
        } else {
            Ok(())
        }
    }

    /// Move to another question index, clearing the numeric scratch input.
    pub(crate) fn move_to(&mut self, index: usize) {
        self.current_index = index;
        self.pending_numeric_input.clear();
    }
}
