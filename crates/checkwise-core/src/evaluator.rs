//! Numeric evaluation of measured readings against acceptable ranges.
//!
//! The evaluator turns a measured value and an item's stored range into a
//! [`Verdict`] and a generated remark. The range is closed on both ends, so a
//! reading exactly equal to either bound passes.
//!
//! ```rust
//! use checkwise_core::evaluator::{evaluate, VoltageRange};
//! use checkwise_core::models::Verdict;
//!
//! let range = VoltageRange::new(10.0, 20.0);
//! assert_eq!(evaluate(range, 10.0).verdict, Verdict::Pass);
//! assert_eq!(evaluate(range, 20.01).verdict, Verdict::Failed);
//! assert_eq!(
//!     evaluate(range, 12.5).remark,
//!     "Measured: 12.5V (Range: 10V - 20V)"
//! );
//! ```

use log::debug;

use crate::{
    error::{Result, ValidationError, WizardError},
    models::{ChecklistItem, ItemCheck, RangeBound, Verdict},
    params::EvaluateReading,
};

/// Parse free-form text as a finite decimal number.
///
/// Surrounding whitespace is ignored. Empty input, trailing garbage, `NaN`
/// and infinities are rejected.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Inclusive acceptable range for a measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageRange {
    pub start: f64,
    pub end: f64,
}

impl VoltageRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Build a range from stored bounds; `None` if either bound is missing
    /// or unparsable.
    pub fn from_bounds(start: Option<&RangeBound>, end: Option<&RangeBound>) -> Option<Self> {
        Some(Self::new(start?.value()?, end?.value()?))
    }

    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Outcome of evaluating one reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub measured: f64,
    pub remark: String,
}

/// Evaluate `measured` against `range`.
pub fn evaluate(range: VoltageRange, measured: f64) -> Evaluation {
    let verdict = if range.contains(measured) {
        Verdict::Pass
    } else {
        Verdict::Failed
    };

    Evaluation {
        verdict,
        measured,
        remark: format_remark(range, measured),
    }
}

/// The generated remark for a numeric reading.
pub fn format_remark(range: VoltageRange, measured: f64) -> String {
    format!(
        "Measured: {measured}V (Range: {}V - {}V)",
        range.start, range.end
    )
}

/// Evaluate `measured` for a numeric item and write the verdict, reading and
/// generated remark back into it.
///
/// The previous remark is always replaced. The item is left untouched when
/// its range is missing or invalid.
///
/// # Errors
///
/// Returns `WizardError::RangeData` if the range cannot be parsed and
/// `WizardError::InvalidInput` if the item is not a numeric item.
pub fn evaluate_item(item: &mut ChecklistItem, measured: f64) -> Result<Verdict> {
    let id = item.id.clone();
    let ItemCheck::NumericEntry {
        start_voltage,
        end_voltage,
        result,
        measured: stored,
    } = &mut item.check
    else {
        return Err(WizardError::invalid_input("resulttype")
            .with_reason(format!("item {id} is not a numeric entry")));
    };

    let range = VoltageRange::from_bounds(start_voltage.as_ref(), end_voltage.as_ref())
        .ok_or_else(|| WizardError::RangeData { id: id.clone() })?;

    let evaluation = evaluate(range, measured);
    debug!(
        "Item {id} evaluated: {measured} -> {}",
        evaluation.verdict.as_str()
    );

    *result = Some(evaluation.verdict);
    *stored = Some(evaluation.measured);
    item.remark = evaluation.remark;

    Ok(evaluation.verdict)
}

/// Evaluate a standalone reading given as text.
///
/// # Errors
///
/// Returns `ValidationError::InvalidReading` for an unparsable reading and
/// `WizardError::InvalidInput` naming the bound that cannot be parsed.
pub fn evaluate_reading(params: &EvaluateReading) -> Result<Evaluation> {
    let measured = parse_decimal(&params.reading).ok_or(ValidationError::InvalidReading)?;
    let start = parse_decimal(&params.start).ok_or_else(|| {
        WizardError::invalid_input("start").with_reason("voltage range missing/invalid")
    })?;
    let end = parse_decimal(&params.end).ok_or_else(|| {
        WizardError::invalid_input("end").with_reason("voltage range missing/invalid")
    })?;

    Ok(evaluate(VoltageRange::new(start, end), measured))
}
