use crate::eval::RuleVerdict;
use crate::record::Record;
use crate::rules::Rule;

/// Fails when the record's region is in the restricted set.
pub struct RegionRule {
    restricted: Vec<String>,
}

impl RegionRule {
    pub fn new(restricted: Vec<String>) -> Self {
        Self { restricted }
    }
}

impl Rule for RegionRule {
    fn name(&self) -> &str {
        "region"
    }

    fn evaluate(&self, record: &Record) -> RuleVerdict {
        let region = record.region_or_default();
        if self.restricted.iter().any(|r| r == region) {
            RuleVerdict::fail("region restricted")
        } else {
            RuleVerdict::Pass
        }
    }
}
