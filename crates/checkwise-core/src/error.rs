//! Error types for the checklist wizard library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ItemId;

/// A user-correctable validation failure that blocks a step transition.
///
/// Each variant renders a distinct message suitable for the notify sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Negative answer given without an explanation
    #[error("Remark required for '{checkpoint}' when the result is {result}")]
    RemarkRequired {
        checkpoint: String,
        result: &'static str,
    },
    /// Question has no answer selected yet
    #[error("Select a result for '{checkpoint}' before continuing")]
    ResultRequired { checkpoint: String },
    /// Numeric reading is empty or not a finite decimal
    #[error("Enter a valid voltage reading")]
    InvalidReading,
    /// Equipment serial is blank
    #[error("Enter the serial number of the equipment used")]
    MissingEquipmentSerial,
    /// Calibration due date is blank
    #[error("Enter the calibration due date of the equipment used")]
    MissingCalibrationDate,
}

/// Comprehensive error type for all wizard operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// A validator rejected the attempted transition
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The current numeric item has no usable acceptable range
    #[error("Voltage range missing or invalid for item {id}")]
    RangeData { id: ItemId },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// An item edit was attempted while no question is displayed
    #[error("No checklist question is currently displayed")]
    NoCurrentItem,
    /// Finish was requested before the final review step
    #[error("The checklist can only be finished from the final review")]
    NotAtFinalReview,
    /// The session has already finished or been cancelled
    #[error("The checklist session is closed")]
    SessionClosed,
    /// Checklist template not found in the template directory
    #[error("Checklist template '{name}' not found")]
    TemplateNotFound { name: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the session can continue after this error.
    ///
    /// Recoverable errors are reported to the user and the session keeps
    /// running; anything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WizardError::Validation(_)
                | WizardError::RangeData { .. }
                | WizardError::InvalidInput { .. }
                | WizardError::NoCurrentItem
                | WizardError::NotAtFinalReview
        )
    }
}

/// Extension trait for Result to attach file system context.
pub trait ResultExt<T> {
    /// Map an io error to [`WizardError::FileSystem`] for the given path.
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| WizardError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;
