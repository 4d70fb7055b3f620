//! Structural well-formedness checks run before any rule.

use thiserror::Error;

use crate::record::{AGE, Record};

/// Inclusive bounds for a well-formed age.
pub const AGE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=120.0;

/// Why a record is not well-formed. Checks run in declaration order and the
/// first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing age")]
    MissingAge,
    #[error("age not a number")]
    AgeNotNumber,
    #[error("age out of range")]
    AgeOutOfRange,
}

/// `Ok(())` for a well-formed record; otherwise the first failing check.
pub type ValidationOutcome = Result<(), ValidationError>;

pub fn validate(record: &Record) -> ValidationOutcome {
    let Some(age) = record.get(AGE) else {
        return Err(ValidationError::MissingAge);
    };
    let Some(age) = age.as_number() else {
        return Err(ValidationError::AgeNotNumber);
    };
    // NaN is not contained in any range, so it lands here too.
    if !AGE_RANGE.contains(&age) {
        return Err(ValidationError::AgeOutOfRange);
    }
    Ok(())
}
