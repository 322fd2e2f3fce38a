//! Checklist item model definition and related functionality.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{de::IntoDeserializer, Deserialize, Deserializer, Serialize};

use super::{OkNotOk, ResultType, Verdict, YesNo};
use crate::evaluator::parse_decimal;

/// Maximum length, in characters, of any remark field.
pub const REMARK_MAX_CHARS: usize = 400;

/// Represents one inspection point of a checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Unique identifier for the item, stable across the session
    pub id: ItemId,

    /// Description of what is being inspected
    pub checkpoint: String,

    /// Result type together with the type-specific result fields
    #[serde(flatten)]
    pub check: ItemCheck,

    /// Free-text remark, required for negative answers
    #[serde(default, deserialize_with = "capped_remark")]
    pub remark: String,

    /// Serial of the measuring equipment (only meaningful on the first item)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_used_serial: Option<String>,

    /// Calibration due date of the measuring equipment (only meaningful on
    /// the first item)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration_due_date: Option<String>,
}

/// Type-specific result state of a checklist item, tagged by `resulttype`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "resulttype")]
pub enum ItemCheck {
    OkNotOk {
        #[serde(
            default,
            deserialize_with = "empty_as_none",
            skip_serializing_if = "Option::is_none"
        )]
        result: Option<OkNotOk>,
    },
    YesNo {
        #[serde(
            default,
            deserialize_with = "empty_as_none",
            skip_serializing_if = "Option::is_none"
        )]
        result: Option<YesNo>,
    },
    NumericEntry {
        #[serde(rename = "startVoltage", default, skip_serializing_if = "Option::is_none")]
        start_voltage: Option<RangeBound>,
        #[serde(rename = "endVoltage", default, skip_serializing_if = "Option::is_none")]
        end_voltage: Option<RangeBound>,
        #[serde(
            default,
            deserialize_with = "empty_as_none",
            skip_serializing_if = "Option::is_none"
        )]
        result: Option<Verdict>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        measured: Option<f64>,
    },
}

/// Identifier of a checklist item.
///
/// Backends use either numeric ids or string ids such as document ids; the
/// original form is kept on the way back out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId::Number(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_string())
    }
}

/// One end of a numeric acceptable range as it appears in checklist data.
///
/// Backends send either JSON numbers or strings; strings are parsed only
/// when the range is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum RangeBound {
    Number(f64),
    Text(String),
}

impl RangeBound {
    /// The finite decimal value of this bound, if it has one.
    pub fn value(&self) -> Option<f64> {
        match self {
            RangeBound::Number(v) if v.is_finite() => Some(*v),
            RangeBound::Number(_) => None,
            RangeBound::Text(s) => parse_decimal(s),
        }
    }
}

impl From<f64> for RangeBound {
    fn from(value: f64) -> Self {
        RangeBound::Number(value)
    }
}

impl ItemCheck {
    /// An unanswered Yes/No check.
    pub fn yes_no() -> Self {
        ItemCheck::YesNo { result: None }
    }

    /// An unanswered OK/NOT OK check.
    pub fn ok_not_ok() -> Self {
        ItemCheck::OkNotOk { result: None }
    }

    /// An unevaluated numeric check with the given acceptable range.
    pub fn numeric(start: impl Into<RangeBound>, end: impl Into<RangeBound>) -> Self {
        ItemCheck::NumericEntry {
            start_voltage: Some(start.into()),
            end_voltage: Some(end.into()),
            result: None,
            measured: None,
        }
    }

    pub fn result_type(&self) -> ResultType {
        match self {
            ItemCheck::OkNotOk { .. } => ResultType::OkNotOk,
            ItemCheck::YesNo { .. } => ResultType::YesNo,
            ItemCheck::NumericEntry { .. } => ResultType::NumericEntry,
        }
    }

    /// Display label of the current result, if one is set.
    pub fn result_label(&self) -> Option<&'static str> {
        match self {
            ItemCheck::OkNotOk { result } => result.map(|r| r.as_str()),
            ItemCheck::YesNo { result } => result.map(|r| r.as_str()),
            ItemCheck::NumericEntry { result, .. } => result.map(|r| r.as_str()),
        }
    }

    pub fn is_answered(&self) -> bool {
        self.result_label().is_some()
    }

    /// Whether the current result is the negative variant (`No`, `NOT OK`
    /// or `Failed`).
    pub fn is_negative(&self) -> bool {
        match self {
            ItemCheck::OkNotOk { result } => result.is_some_and(|r| r.is_negative()),
            ItemCheck::YesNo { result } => result.is_some_and(|r| r.is_negative()),
            ItemCheck::NumericEntry { result, .. } => *result == Some(Verdict::Failed),
        }
    }
}

impl ChecklistItem {
    /// Creates an item with an empty remark and no equipment metadata.
    pub fn new(id: u64, checkpoint: impl Into<String>, check: ItemCheck) -> Self {
        Self {
            id: ItemId::Number(id),
            checkpoint: checkpoint.into(),
            check,
            remark: String::new(),
            equipment_used_serial: None,
            calibration_due_date: None,
        }
    }

    pub fn result_type(&self) -> ResultType {
        self.check.result_type()
    }
}

/// Truncate free text to [`REMARK_MAX_CHARS`] characters.
pub fn cap_remark(text: &str) -> String {
    text.chars().take(REMARK_MAX_CHARS).collect()
}

fn capped_remark<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let remark = Option::<String>::deserialize(deserializer)?;
    Ok(remark.as_deref().map(cap_remark).unwrap_or_default())
}

/// Reads `null` and `""` as "no result yet".
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.trim().is_empty() => {
            T::deserialize(value.into_deserializer()).map(Some)
        }
        _ => Ok(None),
    }
}
