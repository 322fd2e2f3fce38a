//! User actions and the single-action reducer.

use super::WizardSession;
use crate::{
    error::Result,
    models::{Answer, SessionOutcome},
};

/// One discrete user action on a wizard session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Move forward (validated)
    Advance,
    /// Move back one step
    Back,
    /// Answer the displayed Yes/No or OK/NOT OK question
    Answer(Answer),
    /// Set the remark of the displayed question
    Remark(String),
    /// Set the reading of the displayed numeric question
    Reading(String),
    /// Set the equipment serial
    EquipmentSerial(String),
    /// Set the calibration due date
    CalibrationDueDate(String),
    /// Set the global remark (final review only)
    GlobalRemark(String),
    /// Finish from the final review
    Finish,
    /// Close the wizard without finishing
    Cancel,
}

impl WizardSession {
    /// Applies one action.
    ///
    /// Returns the terminal outcome when the action ends the session, `None`
    /// while it keeps running.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation; the session state is
    /// unchanged when an action fails.
    pub fn apply(&mut self, action: Action) -> Result<Option<SessionOutcome>> {
        match action {
            Action::Advance => self.advance().map(|_| None),
            Action::Back => self.back().map(|_| None),
            Action::Answer(answer) => self.set_answer(answer).map(|()| None),
            Action::Remark(text) => self.set_remark(&text).map(|()| None),
            Action::Reading(text) => self.set_numeric_input(&text).map(|()| None),
            Action::EquipmentSerial(text) => self.set_equipment_serial(&text).map(|()| None),
            Action::CalibrationDueDate(text) => {
                self.set_calibration_due_date(&text).map(|()| None)
            }
            Action::GlobalRemark(text) => self.set_global_remark(&text).map(|()| None),
            Action::Finish => self
                .finish()
                .map(|finished| Some(SessionOutcome::Finished(finished))),
            Action::Cancel => {
                self.cancel();
                Ok(Some(SessionOutcome::Cancelled))
            }
        }
    }
}
