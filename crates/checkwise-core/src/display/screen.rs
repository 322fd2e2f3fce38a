//! Display of the current wizard screen.

use std::fmt;

use super::models::or_not_set;
use crate::{
    models::{ItemCheck, Phase},
    wizard::WizardSession,
};

/// Wrapper that formats what a wizard session currently shows: the
/// equipment form, the displayed question, or the final review.
///
/// Progress is rounded to a whole percentage here and nowhere else.
pub struct Screen<'a>(pub &'a WizardSession);

impl Screen<'_> {
    fn fmt_equipment_form(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Equipment Info")?;
        writeln!(f)?;
        write!(f, "{}", self.0.equipment())
    }

    fn fmt_question(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let Some(item) = session.current_item() else {
            return Ok(());
        };

        writeln!(
            f,
            "# Question {} of {} ({:.0}%)",
            session.current_index() + 1,
            session.items().len(),
            session.progress_percent()
        )?;
        writeln!(f)?;
        writeln!(f, "## {}", item.checkpoint)?;
        writeln!(f)?;

        match &item.check {
            ItemCheck::NumericEntry { .. } => {
                item.check.fmt_range(f)?;
                writeln!(
                    f,
                    "- Reading: {}",
                    or_not_set(session.pending_numeric_input())
                )?;
                if let Some(verdict) = item.check.result_label() {
                    writeln!(f, "- Last result: {verdict}")?;
                }
            }
            ItemCheck::OkNotOk { .. } | ItemCheck::YesNo { .. } => {
                writeln!(
                    f,
                    "- Result: {}",
                    item.check.result_label().unwrap_or("not answered")
                )?;
                if !item.remark.is_empty() {
                    writeln!(f, "- Remark: {}", item.remark)?;
                }
            }
        }
        Ok(())
    }

    fn fmt_final_review(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        writeln!(f, "# Final Review")?;
        writeln!(f)?;
        write!(f, "{}", session.equipment())?;
        writeln!(f, "- Results: {}", session.summary())?;
        writeln!(f, "- Remark: {}", or_not_set(session.global_remark()))?;
        writeln!(f)?;
        writeln!(f, "## Items")?;
        writeln!(f)?;
        for item in session.items() {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_closed() {
            return writeln!(f, "Checklist session closed.");
        }
        match self.0.phase() {
            Phase::EquipmentForm => self.fmt_equipment_form(f),
            Phase::InProgress => self.fmt_question(f),
            Phase::FinalReview => self.fmt_final_review(f),
        }
    }
}
