//! Result enumerations for checklist items.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declared result type of a checklist item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ResultType {
    /// Answered with Yes / No
    YesNo,
    /// Answered with OK / NOT OK
    OkNotOk,
    /// Answered with a measured value checked against a range
    NumericEntry,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::YesNo => "YesNo",
            ResultType::OkNotOk => "OkNotOk",
            ResultType::NumericEntry => "NumericEntry",
        }
    }
}

/// Result of a `YesNo` item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    /// Whether this answer demands a remark.
    pub fn is_negative(&self) -> bool {
        *self == YesNo::No
    }
}

/// Result of an `OkNotOk` item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum OkNotOk {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOT OK")]
    NotOk,
}

impl OkNotOk {
    pub fn as_str(&self) -> &'static str {
        match self {
            OkNotOk::Ok => "OK",
            OkNotOk::NotOk => "NOT OK",
        }
    }

    /// Whether this answer demands a remark.
    pub fn is_negative(&self) -> bool {
        *self == OkNotOk::NotOk
    }
}

/// Pass/Failed outcome computed for a `NumericEntry` item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Verdict {
    Pass,
    Failed,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "Pass",
            Verdict::Failed => "Failed",
        }
    }

    /// Get the verdict with an icon for display.
    ///
    /// ```rust
    /// use checkwise_core::models::Verdict;
    ///
    /// assert_eq!(Verdict::Pass.with_icon(), "✓ Pass");
    /// assert_eq!(Verdict::Failed.with_icon(), "✗ Failed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Verdict::Pass => "✓ Pass",
            Verdict::Failed => "✗ Failed",
        }
    }
}

/// A user's answer to a Yes/No or OK/NOT OK question.
///
/// Numeric items are never answered directly; their result comes from the
/// numeric evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Ok,
    NotOk,
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            "ok" => Ok(Answer::Ok),
            "notok" | "not ok" | "not_ok" | "nok" => Ok(Answer::NotOk),
            _ => Err(format!("Invalid answer: {s}")),
        }
    }
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => YesNo::Yes.as_str(),
            Answer::No => YesNo::No.as_str(),
            Answer::Ok => OkNotOk::Ok.as_str(),
            Answer::NotOk => OkNotOk::NotOk.as_str(),
        }
    }

    /// The Yes/No result this answer maps to, if any.
    pub fn as_yes_no(&self) -> Option<YesNo> {
        match self {
            Answer::Yes => Some(YesNo::Yes),
            Answer::No => Some(YesNo::No),
            Answer::Ok | Answer::NotOk => None,
        }
    }

    /// The OK/NOT OK result this answer maps to, if any.
    pub fn as_ok_not_ok(&self) -> Option<OkNotOk> {
        match self {
            Answer::Ok => Some(OkNotOk::Ok),
            Answer::NotOk => Some(OkNotOk::NotOk),
            Answer::Yes | Answer::No => None,
        }
    }
}
