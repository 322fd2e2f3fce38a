//! Step controller operations for the wizard session.

use log::debug;

use super::WizardSession;
use crate::{
    error::Result,
    evaluator::evaluate_item,
    models::Phase,
    validation::{check_equipment, check_item, Gate},
};

impl WizardSession {
    /// Moves one step forward if the displayed step validates.
    ///
    /// From the equipment form this enters question 0. From a question it
    /// runs the validator for the item's result type, evaluating numeric
    /// readings, and then moves to the next question or to the final review.
    /// At the final review it does nothing.
    ///
    /// Returns the phase after the call.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Validation` or `WizardError::RangeData` when the
    /// step is blocked; the session is left unchanged.
    /// Returns `WizardError::SessionClosed` after finish or cancel.
    pub fn advance(&mut self) -> Result<Phase> {
        self.ensure_open()?;

        match self.phase() {
            Phase::EquipmentForm => {
                check_equipment(&self.equipment)?;
                self.show_equipment_form = false;
                self.move_to(0);
                debug!("Equipment info accepted, entering question 0");
            }
            Phase::InProgress => {
                let index = self.current_index;
                let item = &mut self.items[index];
                if let Gate::Evaluate(reading) = check_item(item, &self.pending_numeric_input)? {
                    evaluate_item(item, reading)?;
                }

                let next = index + 1;
                self.move_to(next);
                if next < self.items.len() {
                    debug!("Question {index} accepted, entering question {next}");
                } else {
                    debug!("Question {index} accepted, entering final review");
                }
            }
            Phase::FinalReview => {
                debug!("Advance ignored at final review");
            }
        }

        Ok(self.phase())
    }

    /// Moves one step back.
    ///
    /// From question 0 this returns to the equipment form; from any later
    /// question, or from the final review, to the previous question. On the
    /// equipment form it does nothing.
    ///
    /// Returns the phase after the call.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::SessionClosed` after finish or cancel.
    pub fn back(&mut self) -> Result<Phase> {
        self.ensure_open()?;

        match self.phase() {
            Phase::EquipmentForm => {
                debug!("Back ignored on equipment form");
            }
            Phase::InProgress | Phase::FinalReview if self.current_index == 0 => {
                self.show_equipment_form = true;
                self.pending_numeric_input.clear();
                debug!("Returning to equipment form");
            }
            Phase::InProgress | Phase::FinalReview => {
                let previous = self.current_index - 1;
                self.move_to(previous);
                debug!("Returning to question {previous}");
            }
        }

        Ok(self.phase())
    }
}
