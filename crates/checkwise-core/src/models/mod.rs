//! Data models for checklists and wizard sessions.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! Each [`ChecklistItem`] carries an [`ItemCheck`]: a tagged union over the
//! item's result type, so that validation and evaluation dispatch on the
//! variant instead of comparing strings.
//!
//! # Examples
//!
//! ```rust
//! use checkwise_core::models::{ChecklistItem, ItemCheck, ResultType};
//!
//! let item = ChecklistItem::new(1, "Input voltage", ItemCheck::numeric(210.0, 240.0));
//! assert_eq!(item.result_type(), ResultType::NumericEntry);
//!
//! let json = serde_json::to_string(&item).unwrap();
//! assert!(json.contains(r#""resulttype":"NumericEntry""#));
//! assert!(json.contains(r#""startVoltage":210.0"#));
//! ```

pub mod answer;
pub mod item;
pub mod session;
pub mod summary;

#[cfg(test)]
mod tests;

pub use answer::{Answer, OkNotOk, ResultType, Verdict, YesNo};
pub use item::{cap_remark, ChecklistItem, ItemCheck, ItemId, RangeBound, REMARK_MAX_CHARS};
pub use session::{EquipmentInfo, FinishedChecklist, Phase, SessionOutcome};
pub use summary::ChecklistSummary;
