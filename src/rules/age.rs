use crate::eval::RuleVerdict;
use crate::record::Record;
use crate::rules::Rule;

/// Passes when the record's age is at least `min_age`. Missing age counts as 0.
pub struct AgeRule {
    min_age: i64,
}

impl AgeRule {
    pub fn new(min_age: i64) -> Self {
        Self { min_age }
    }
}

impl Rule for AgeRule {
    fn name(&self) -> &str {
        "age"
    }

    fn evaluate(&self, record: &Record) -> RuleVerdict {
        if record.age_or_default() >= self.min_age as f64 {
            RuleVerdict::Pass
        } else {
            RuleVerdict::fail("age below minimum")
        }
    }
}
