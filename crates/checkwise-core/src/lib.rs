//! Core library for the Checkwise equipment checklist wizard.
//!
//! This crate provides the checklist wizard engine used when installing or
//! servicing equipment: a step controller that walks through an equipment
//! form, one question per checklist item and a final review; per-type
//! validators; a numeric evaluator that turns voltage readings into
//! Pass/Failed verdicts; and a finish assembler that produces the payload
//! handed to the backend.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): checklist items as a tagged union over their
//!   result type, session phases and the finished payload
//! - **Wizard** ([`wizard`]): the synchronous state reducer
//! - **Runner** ([`runner`]): async "run session" returning a terminal
//!   outcome
//! - **Display** ([`display`]): markdown formatting for terminal output
//! - **Cache** ([`cache`]): explicit checklist template cache
//!
//! # Quick Start
//!
//! ```rust
//! use checkwise_core::{
//!     models::{Answer, ChecklistItem, ItemCheck, Phase},
//!     WizardBuilder,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = WizardBuilder::new(vec![
//!     ChecklistItem::new(1, "Battery bank earthing", ItemCheck::ok_not_ok()),
//! ])
//! .with_equipment_used(Some("MM-100"))
//! .with_calibration_date(Some("2026-12-31"))
//! .build()?;
//!
//! session.advance()?;
//! session.set_answer(Answer::NotOk)?;
//! assert!(session.advance().is_err()); // a remark is required
//!
//! session.set_remark("Lug replaced")?;
//! assert_eq!(session.advance()?, Phase::FinalReview);
//!
//! let finished = session.finish()?;
//! println!("{}", finished);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod display;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod notify;
pub mod params;
pub mod runner;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use cache::{load_checklist_file, TemplateCache, TemplateCacheBuilder};
pub use display::{Items, LocalDateTime, Notice, Screen, Templates};
pub use error::{Result, ValidationError, WizardError};
pub use evaluator::{evaluate_reading, Evaluation, VoltageRange};
pub use models::{
    Answer, ChecklistItem, ChecklistSummary, EquipmentInfo, FinishedChecklist, ItemCheck, ItemId,
    Phase, SessionOutcome, Verdict,
};
pub use notify::Notifier;
pub use params::{ChecklistInput, EvaluateReading};
pub use runner::run_session;
pub use wizard::{Action, WizardBuilder, WizardSession};
