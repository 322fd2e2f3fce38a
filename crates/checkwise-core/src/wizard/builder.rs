//! Builder for creating and configuring wizard sessions.

use std::collections::HashSet;

use log::info;

use super::WizardSession;
use crate::{
    error::{Result, WizardError},
    models::{cap_remark, ChecklistItem, EquipmentInfo},
    params::ChecklistInput,
};

/// Builder for creating wizard sessions from caller-supplied items.
#[derive(Debug, Clone)]
pub struct WizardBuilder {
    items: Vec<ChecklistItem>,
    global_remark: Option<String>,
    equipment_used: Option<String>,
    calibration_date: Option<String>,
}

impl WizardBuilder {
    /// Creates a builder for the given ordered items.
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        Self {
            items,
            global_remark: None,
            equipment_used: None,
            calibration_date: None,
        }
    }

    /// Creates a builder from a parsed checklist document, carrying over its
    /// seeds.
    pub fn from_input(input: ChecklistInput) -> Self {
        Self {
            items: input.items,
            global_remark: input.global_remark,
            equipment_used: input.equipment_used_serial,
            calibration_date: input.calibration_due_date,
        }
    }

    /// Sets the initial global remark.
    pub fn with_global_remark<S: Into<String>>(mut self, remark: Option<S>) -> Self {
        if let Some(remark) = remark {
            self.global_remark = Some(remark.into());
        }
        self
    }

    /// Sets the default equipment serial.
    ///
    /// A serial already stored on the first item takes precedence.
    pub fn with_equipment_used<S: Into<String>>(mut self, serial: Option<S>) -> Self {
        if let Some(serial) = serial {
            self.equipment_used = Some(serial.into());
        }
        self
    }

    /// Sets the default calibration due date.
    ///
    /// A date already stored on the first item takes precedence.
    pub fn with_calibration_date<S: Into<String>>(mut self, date: Option<S>) -> Self {
        if let Some(date) = date {
            self.calibration_date = Some(date.into());
        }
        self
    }

    /// Builds the session, starting on the equipment form.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` if the item list is empty or two
    /// items share an id.
    pub fn build(self) -> Result<WizardSession> {
        let Some(first) = self.items.first() else {
            return Err(WizardError::invalid_input("items")
                .with_reason("a checklist needs at least one item"));
        };

        let mut seen = HashSet::with_capacity(self.items.len());
        if let Some(duplicate) = self.items.iter().find(|item| !seen.insert(&item.id)) {
            return Err(WizardError::invalid_input("items")
                .with_reason(format!("duplicate item id {}", duplicate.id)));
        }

        let equipment = EquipmentInfo {
            serial: prefer_stored(first.equipment_used_serial.as_deref(), self.equipment_used),
            calibration_due_date: prefer_stored(
                first.calibration_due_date.as_deref(),
                self.calibration_date,
            ),
        };

        info!("Checklist session started with {} items", self.items.len());

        Ok(WizardSession {
            items: self.items,
            current_index: 0,
            show_equipment_form: true,
            equipment,
            global_remark: self.global_remark.as_deref().map(cap_remark).unwrap_or_default(),
            pending_numeric_input: String::new(),
            closed: false,
        })
    }
}

fn prefer_stored(stored: Option<&str>, fallback: Option<String>) -> String {
    match stored {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.unwrap_or_default(),
    }
}
