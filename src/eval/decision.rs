use super::validate::ValidationError;

/// Verdict of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleVerdict {
    Pass,
    Fail(String),
}

impl RuleVerdict {
    pub fn fail(reason: impl Into<String>) -> Self {
        RuleVerdict::Fail(reason.into())
    }

    pub fn passed(&self) -> bool {
        matches!(self, RuleVerdict::Pass)
    }

    /// Failure reason; `None` for a passing verdict.
    pub fn reason(&self) -> Option<&str> {
        match self {
            RuleVerdict::Pass => None,
            RuleVerdict::Fail(reason) => Some(reason),
        }
    }
}

/// Aggregated result of running every rule against a valid record.
///
/// `allowed` is derived from `reasons`, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    reasons: Vec<String>,
}

impl Decision {
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        Self { reasons }
    }

    pub fn allowed(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Failure reasons in rule-list order.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn as_str(&self) -> &'static str {
        if self.allowed() { "allow" } else { "deny" }
    }
}

/// Whatever the pipeline stopped at: a validation failure or a rule decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Invalid(ValidationError),
    Decided(Decision),
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Invalid(_) => "invalid",
            Outcome::Decided(d) => d.as_str(),
        }
    }

    /// Reasons carried by the outcome; a validation failure has exactly one.
    pub fn reasons(&self) -> Vec<String> {
        match self {
            Outcome::Invalid(e) => vec![e.to_string()],
            Outcome::Decided(d) => d.reasons().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_decision_is_allowed() {
        let d = Decision::default();
        assert!(d.allowed());
        assert_eq!(d.as_str(), "allow");
    }

    #[test]
    fn any_reason_denies() {
        let d = Decision::from_reasons(vec!["region restricted".into()]);
        assert!(!d.allowed());
        assert_eq!(d.as_str(), "deny");
    }

    #[test]
    fn verdict_reason_only_on_failure() {
        assert_eq!(RuleVerdict::Pass.reason(), None);
        assert_eq!(RuleVerdict::fail("nope").reason(), Some("nope"));
        assert!(!RuleVerdict::fail("nope").passed());
    }

    #[test]
    fn invalid_outcome_reports_single_reason() {
        let o = Outcome::Invalid(ValidationError::MissingAge);
        assert_eq!(o.as_str(), "invalid");
        assert_eq!(o.reasons(), vec!["missing age".to_string()]);
    }
}
