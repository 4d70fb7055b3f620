use crate::eval::RuleVerdict;
use crate::record::Record;
use crate::rules::Rule;

/// Passes only when the verified flag is exactly `true`.
pub struct VerifiedRule;

impl Rule for VerifiedRule {
    fn name(&self) -> &str {
        "verified"
    }

    fn evaluate(&self, record: &Record) -> RuleVerdict {
        if record.is_verified() {
            RuleVerdict::Pass
        } else {
            RuleVerdict::fail("account not verified")
        }
    }
}
