//! Business rules: each one maps a validated record to a pass/fail verdict.
//!
//! Rules are independent and pure. A rule must tolerate missing fields by
//! reading through the record's defaulting accessors; well-formedness is the
//! validator's job, not the rule's.

/// Minimum-age rule.
pub mod age;
/// Restricted-region rule.
pub mod region;
/// Account verification rule.
pub mod verified;

use crate::eval::RuleVerdict;
use crate::record::Record;

/// Trait for rules run by the [`RuleEvaluator`](crate::eval::RuleEvaluator).
pub trait Rule: Send + Sync {
    /// Stable name, as used in the `[rules].enabled` config list.
    fn name(&self) -> &str;

    /// Evaluate the record and return a verdict.
    fn evaluate(&self, record: &Record) -> RuleVerdict;
}
