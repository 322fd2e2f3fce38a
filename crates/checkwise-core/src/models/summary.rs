//! Checklist summary model for final review and listings.

use serde::{Deserialize, Serialize};

use super::ChecklistItem;

/// Result counts over a set of checklist items.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistSummary {
    /// Total number of items
    pub total: usize,

    /// Items with a positive result (`Yes`, `OK`, `Pass`)
    pub positive: usize,

    /// Items with a negative result (`No`, `NOT OK`, `Failed`)
    pub negative: usize,

    /// Items without any result yet
    pub unanswered: usize,
}

impl ChecklistSummary {
    /// Count results across `items`.
    pub fn from_items(items: &[ChecklistItem]) -> Self {
        items.iter().fold(
            Self {
                total: items.len(),
                ..Default::default()
            },
            |mut summary, item| {
                if !item.check.is_answered() {
                    summary.unanswered += 1;
                } else if item.check.is_negative() {
                    summary.negative += 1;
                } else {
                    summary.positive += 1;
                }
                summary
            },
        )
    }
}

impl From<&[ChecklistItem]> for ChecklistSummary {
    fn from(items: &[ChecklistItem]) -> Self {
        Self::from_items(items)
    }
}
