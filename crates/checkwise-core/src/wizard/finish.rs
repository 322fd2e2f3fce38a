//! Finish assembler and cancellation.

use jiff::Timestamp;
use log::info;

use super::WizardSession;
use crate::{
    error::{Result, WizardError},
    models::{FinishedChecklist, Phase},
};

impl WizardSession {
    /// Finishes the checklist and closes the session.
    ///
    /// The session's equipment serial and calibration due date are written to
    /// the first item, whatever its result type, before the payload is
    /// assembled. The payload is produced at most once per session.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NotAtFinalReview` outside the final review and
    /// `WizardError::SessionClosed` if the session already finished or was
    /// cancelled.
    pub fn finish(&mut self) -> Result<FinishedChecklist> {
        self.ensure_open()?;
        if self.phase() != Phase::FinalReview {
            return Err(WizardError::NotAtFinalReview);
        }

        let first = self.items.first_mut().ok_or_else(|| {
            WizardError::invalid_input("items").with_reason("a checklist needs at least one item")
        })?;
        first.equipment_used_serial = Some(self.equipment.serial.clone());
        first.calibration_due_date = Some(self.equipment.calibration_due_date.clone());

        self.closed = true;
        let summary = self.summary();
        info!(
            "Checklist finished: {} items, {} negative",
            summary.total, summary.negative
        );

        Ok(FinishedChecklist {
            items: self.items.clone(),
            global_remark: self.global_remark.clone(),
            equipment: self.equipment.clone(),
            completed_at: Timestamp::now(),
        })
    }

    /// Closes the session without producing a payload.
    ///
    /// Cancelling an already closed session does nothing.
    pub fn cancel(&mut self) {
        if !self.closed {
            self.closed = true;
            info!("Checklist cancelled in phase {}", self.phase().as_str());
        }
    }
}
