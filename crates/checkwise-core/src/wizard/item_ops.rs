//! Edits to the displayed question and to session-level fields.

use log::debug;

use super::WizardSession;
use crate::{
    error::{Result, WizardError},
    models::{cap_remark, Answer, ChecklistItem, ItemCheck, Phase},
};

impl WizardSession {
    /// Records an answer for the displayed Yes/No or OK/NOT OK question.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` if the answer does not fit the
    /// question's result type (numeric questions take a reading instead),
    /// `WizardError::NoCurrentItem` outside a question step.
    pub fn set_answer(&mut self, answer: Answer) -> Result<()> {
        let item = self.current_item_mut()?;
        let id = item.id.clone();

        match &mut item.check {
            ItemCheck::YesNo { result } => {
                *result = Some(answer.as_yes_no().ok_or_else(|| mismatch(answer, "Yes or No"))?);
            }
            ItemCheck::OkNotOk { result } => {
                *result = Some(answer.as_ok_not_ok().ok_or_else(|| mismatch(answer, "OK or NOT OK"))?);
            }
            ItemCheck::NumericEntry { .. } => {
                return Err(WizardError::invalid_input("result")
                    .with_reason("numeric results are computed from the reading"));
            }
        }

        debug!("Item {id} answered {}", answer.as_str());
        Ok(())
    }

    /// Sets the remark of the displayed Yes/No or OK/NOT OK question,
    /// truncated to 400 characters.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` for numeric questions, whose remark
    /// is generated, `WizardError::NoCurrentItem` outside a question step.
    pub fn set_remark(&mut self, remark: &str) -> Result<()> {
        let item = self.current_item_mut()?;
        if let ItemCheck::NumericEntry { .. } = item.check {
            return Err(WizardError::invalid_input("remark")
                .with_reason("numeric remarks are generated from the reading"));
        }
        item.remark = cap_remark(remark);
        Ok(())
    }

    /// Sets the scratch reading for the displayed numeric question.
    ///
    /// The reading is only parsed and evaluated on advance.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` if the displayed question is not
    /// numeric, `WizardError::NoCurrentItem` outside a question step.
    pub fn set_numeric_input(&mut self, reading: &str) -> Result<()> {
        let item = self.current_item_mut()?;
        if !matches!(item.check, ItemCheck::NumericEntry { .. }) {
            return Err(WizardError::invalid_input("reading")
                .with_reason(format!("'{}' does not take a reading", item.checkpoint)));
        }
        self.pending_numeric_input = reading.to_string();
        Ok(())
    }

    /// Sets the working copy of the equipment serial.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::SessionClosed` after finish or cancel.
    pub fn set_equipment_serial(&mut self, serial: &str) -> Result<()> {
        self.ensure_open()?;
        self.equipment.serial = serial.to_string();
        Ok(())
    }

    /// Sets the working copy of the calibration due date.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::SessionClosed` after finish or cancel.
    pub fn set_calibration_due_date(&mut self, date: &str) -> Result<()> {
        self.ensure_open()?;
        self.equipment.calibration_due_date = date.to_string();
        Ok(())
    }

    /// Sets the global remark, truncated to 400 characters. Only editable at
    /// the final review.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NotAtFinalReview` in any other phase.
    pub fn set_global_remark(&mut self, remark: &str) -> Result<()> {
        self.ensure_open()?;
        if self.phase() != Phase::FinalReview {
            return Err(WizardError::NotAtFinalReview);
        }
        self.global_remark = cap_remark(remark);
        Ok(())
    }

    fn current_item_mut(&mut self) -> Result<&mut ChecklistItem> {
        self.ensure_open()?;
        if self.phase() != Phase::InProgress {
            return Err(WizardError::NoCurrentItem);
        }
        self.items
            .get_mut(self.current_index)
            .ok_or(WizardError::NoCurrentItem)
    }
}

fn mismatch(answer: Answer, expected: &str) -> WizardError {
    WizardError::invalid_input("result").with_reason(format!(
        "'{}' is not a valid answer, expected {expected}",
        answer.as_str()
    ))
}
