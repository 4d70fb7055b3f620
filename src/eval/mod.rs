pub mod decision;
pub mod format;
pub mod validate;

pub use decision::{Decision, Outcome, RuleVerdict};
pub use format::format_outcome;
pub use validate::{ValidationError, ValidationOutcome, validate};

use crate::config::RulesConfig;
use crate::record::Record;
use crate::rules::Rule;

/// Ordered rule list. Every rule runs on every evaluation.
pub struct RuleEvaluator {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEvaluator {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Build the rule list from configuration, in `enabled` order.
    /// Unknown rule names are skipped with a warning.
    pub fn from_config(config: &RulesConfig) -> Self {
        use crate::rules::{age::AgeRule, region::RegionRule, verified::VerifiedRule};

        let mut rules: Vec<Box<dyn Rule>> = Vec::new();
        for name in &config.enabled {
            match name.as_str() {
                "age" => rules.push(Box::new(AgeRule::new(config.min_age))),
                "verified" => rules.push(Box::new(VerifiedRule)),
                "region" => rules.push(Box::new(RegionRule::new(
                    config.restricted_regions.clone(),
                ))),
                other => log::warn!("ignoring unknown rule in config: {other}"),
            }
        }
        Self { rules }
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule against an already validated record and collect the
    /// failure reasons in rule order. Never stops at the first failure.
    pub fn evaluate(&self, record: &Record) -> Decision {
        let mut reasons = Vec::new();
        for rule in &self.rules {
            let verdict = rule.evaluate(record);
            log::debug!("rule {} -> {:?}", rule.name(), verdict);
            if let RuleVerdict::Fail(reason) = verdict {
                reasons.push(reason);
            }
        }
        Decision::from_reasons(reasons)
    }
}

/// Sequences validate → evaluate → format.
///
/// Rules only ever see records that passed validation.
pub struct PolicyOrchestrator {
    evaluator: RuleEvaluator,
}

impl PolicyOrchestrator {
    pub fn new(evaluator: RuleEvaluator) -> Self {
        Self { evaluator }
    }

    /// Validate and, if well-formed, evaluate; stop short of formatting.
    pub fn decide(&self, record: &Record) -> Outcome {
        if let Err(err) = validate(record) {
            return Outcome::Invalid(err);
        }
        Outcome::Decided(self.evaluator.evaluate(record))
    }

    /// Decide each record in order, paired with its id in string form.
    /// Records without an id are still decided.
    pub fn decide_all(&self, records: &[Record]) -> Vec<(Option<String>, Outcome)> {
        records
            .iter()
            .map(|r| (r.id_string(), self.decide(r)))
            .collect()
    }

    /// Full pipeline: the decision as a display string.
    pub fn run(&self, record: &Record) -> String {
        format_outcome(&self.decide(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Always fails with a fixed reason and counts its calls.
    struct Counting {
        reason: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl Rule for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn evaluate(&self, _record: &Record) -> RuleVerdict {
            self.calls.fetch_add(1, Ordering::SeqCst);
            RuleVerdict::fail(self.reason)
        }
    }

    fn counting(reason: &'static str, calls: &Arc<AtomicUsize>) -> Box<dyn Rule> {
        Box::new(Counting {
            reason,
            calls: Arc::clone(calls),
        })
    }

    fn default_evaluator() -> RuleEvaluator {
        RuleEvaluator::from_config(&Config::default_config().rules)
    }

    #[test]
    fn default_rule_order() {
        assert_eq!(default_evaluator().names(), vec!["age", "verified", "region"]);
    }

    #[test]
    fn unknown_rule_names_skipped() {
        let mut config = Config::default_config().rules;
        config.enabled = vec!["region".into(), "bogus".into(), "age".into()];
        assert_eq!(RuleEvaluator::from_config(&config).names(), vec!["region", "age"]);
    }

    #[test]
    fn every_rule_runs_once_without_short_circuit() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let evaluator =
            RuleEvaluator::new(vec![counting("first", &first), counting("second", &second)]);

        let decision = evaluator.evaluate(&Record::user("u", 30, true, "US"));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(decision.reasons(), ["first", "second"]);
        assert!(!decision.allowed());
    }

    #[test]
    fn empty_rule_list_allows() {
        let decision = RuleEvaluator::new(Vec::new()).evaluate(&Record::new());
        assert!(decision.allowed());
    }

    #[test]
    fn all_reasons_collected_in_rule_order() {
        let decision = default_evaluator().evaluate(&Record::user("u", 10, false, "XX"));
        assert_eq!(
            decision.reasons(),
            ["age below minimum", "account not verified", "region restricted"]
        );
    }

    #[test]
    fn invalid_record_never_reaches_rules() {
        let calls = Arc::new(AtomicUsize::new(0));
        let orchestrator = PolicyOrchestrator::new(RuleEvaluator::new(vec![counting("x", &calls)]));

        assert_eq!(orchestrator.run(&Record::new()), "Validation failed: missing age");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn orchestrator_runs_rules_for_valid_record() {
        let orchestrator = PolicyOrchestrator::new(default_evaluator());
        assert_eq!(orchestrator.run(&Record::user("u1", 25, true, "US")), "Allowed");
        assert_eq!(
            orchestrator.run(&Record::user("u2", 17, false, "UK")),
            "Denied: age below minimum; account not verified"
        );
    }

    #[test]
    fn decide_all_keeps_order_and_missing_ids() {
        use crate::record::{AGE, ID};

        let orchestrator = PolicyOrchestrator::new(default_evaluator());
        let records = [
            Record::user("ok", 30, true, "US"),
            Record::new().with(ID, 2i64),
            Record::new().with(AGE, 15i64),
        ];
        let results = orchestrator.decide_all(&records);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], (Some("ok".into()), Outcome::Decided(Decision::default())));
        assert_eq!(results[1], (Some("2".into()), Outcome::Invalid(ValidationError::MissingAge)));
        assert_eq!(results[2].0, None);
        assert_eq!(
            results[2].1.reasons(),
            vec!["age below minimum".to_string(), "account not verified".to_string()]
        );
    }

    #[test]
    fn decide_exposes_outcome() {
        let orchestrator = PolicyOrchestrator::new(default_evaluator());
        let record = Record::new().with(crate::record::AGE, 300i64);
        assert_eq!(
            orchestrator.decide(&record),
            Outcome::Invalid(ValidationError::AgeOutOfRange)
        );
    }
}
