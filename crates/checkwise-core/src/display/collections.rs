//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::ChecklistItem;

/// Newtype wrapper for displaying the items of a checklist.
///
/// # Examples
///
/// ```rust
/// use checkwise_core::{
///     display::Items,
///     models::{ChecklistItem, ItemCheck},
/// };
///
/// let items = Items(vec![ChecklistItem::new(1, "Door seal", ItemCheck::yes_no())]);
/// assert!(items.to_string().contains("### 1. Door seal (YesNo)"));
/// ```
pub struct Items(pub Vec<ChecklistItem>);

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No checklist items.")
        } else {
            for item in &self.0 {
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying available template names.
pub struct Templates(pub Vec<String>);

impl fmt::Display for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No checklist templates found.")
        } else {
            for name in &self.0 {
                writeln!(f, "- {name}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemCheck;

    #[test]
    fn test_items_display_empty() {
        assert_eq!(Items(vec![]).to_string(), "No checklist items.\n");
    }

    #[test]
    fn test_items_display_multiple() {
        let items = Items(vec![
            ChecklistItem::new(1, "Door seal", ItemCheck::yes_no()),
            ChecklistItem::new(2, "Input voltage", ItemCheck::numeric(210.0, 240.0)),
        ]);
        let output = items.to_string();

        assert_eq!(items.0.len(), 2);
        assert!(output.contains("### 1. Door seal (YesNo)"));
        assert!(output.contains("### 2. Input voltage (NumericEntry)"));
        assert!(output.contains("- Range: 210V - 240V"));
    }

    #[test]
    fn test_templates_display() {
        assert_eq!(
            Templates(vec![]).to_string(),
            "No checklist templates found.\n"
        );
        assert_eq!(
            Templates(vec!["ups-install".to_string()]).to_string(),
            "- ups-install\n"
        );
    }
}
