//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    ChecklistItem, ChecklistSummary, EquipmentInfo, FinishedChecklist, ItemCheck, ItemId, Phase,
    RangeBound, ResultType,
};

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(id) => write!(f, "{id}"),
            ItemId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Number(v) => write!(f, "{v}"),
            RangeBound::Text(s) => write!(f, "{s}"),
        }
    }
}

impl ItemCheck {
    /// Format the acceptable range of a numeric check, if it has one.
    pub(crate) fn fmt_range(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let ItemCheck::NumericEntry {
            start_voltage,
            end_voltage,
            ..
        } = self
        {
            match (start_voltage, end_voltage) {
                (Some(start), Some(end)) => writeln!(f, "- Range: {start}V - {end}V")?,
                _ => writeln!(f, "- Range: not set")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.checkpoint,
            self.result_type()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Result: {}",
            self.check.result_label().unwrap_or("not answered")
        )?;
        self.check.fmt_range(f)?;
        if !self.remark.is_empty() {
            writeln!(f, "- Remark: {}", self.remark)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for EquipmentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Equipment used: {}", or_not_set(&self.serial))?;
        writeln!(
            f,
            "- Calibration due: {}",
            or_not_set(&self.calibration_due_date)
        )
    }
}

impl fmt::Display for ChecklistSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items: {} passed, {} failed, {} unanswered",
            self.total, self.positive, self.negative, self.unanswered
        )
    }
}

impl fmt::Display for FinishedChecklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Checklist completed")?;
        writeln!(f)?;
        write!(f, "{}", self.equipment)?;
        writeln!(f, "- Completed: {}", LocalDateTime(&self.completed_at))?;
        writeln!(
            f,
            "- Results: {}",
            ChecklistSummary::from_items(&self.items)
        )?;
        if !self.global_remark.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.global_remark)?;
        }
        Ok(())
    }
}

pub(crate) fn or_not_set(value: &str) -> &str {
    if value.trim().is_empty() {
        "not set"
    } else {
        value
    }
}
