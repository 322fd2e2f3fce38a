//! Display formatting for checklists, wizard screens and notices.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers give contextual formatting for collections and for the
//! screen a running session currently shows.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (items, session)│───▶│ (Items, Screen) │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Items, Templates)
//! - [`screen`]: The current wizard screen (Screen)
//! - [`status`]: User-facing notices (Notice)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod screen;
pub mod status;

pub use collections::{Items, Templates};
pub use datetime::LocalDateTime;
pub use screen::Screen;
pub use status::Notice;
