//! One-shot JSON check: a record, or an array of records, in; decisions out.

use serde::{Deserialize, Serialize};

use crate::eval::{Outcome, PolicyOrchestrator, format_outcome};
use crate::logging;
use crate::record::Record;

/// Check-mode input: a single record object or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CheckInput {
    Batch(Vec<Record>),
    Single(Record),
}

/// Per-record result. `decision` is `allow`, `deny`, or `invalid`
/// (a validation failure, as opposed to a rule failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub id: Option<String>,
    pub decision: &'static str,
    pub message: String,
    pub reasons: Vec<String>,
}

impl CheckReport {
    fn new(id: Option<String>, outcome: &Outcome) -> Self {
        Self {
            id,
            decision: outcome.as_str(),
            message: format_outcome(outcome),
            reasons: outcome.reasons(),
        }
    }
}

/// Parse `input` and decide every record in it.
///
/// A single object yields a single report object; an array yields an array
/// of reports in input order.
pub fn check(
    input: &str,
    orchestrator: &PolicyOrchestrator,
    log_decisions: bool,
) -> Result<serde_json::Value, serde_json::Error> {
    let (records, batch) = match serde_json::from_str(input)? {
        CheckInput::Batch(records) => (records, true),
        CheckInput::Single(record) => (vec![record], false),
    };

    let reports: Vec<CheckReport> = orchestrator
        .decide_all(&records)
        .into_iter()
        .map(|(id, outcome)| {
            if log_decisions {
                logging::log_decision(id.as_deref().unwrap_or("-"), &outcome);
            }
            CheckReport::new(id, &outcome)
        })
        .collect();

    if batch {
        serde_json::to_value(reports)
    } else {
        serde_json::to_value(&reports[0])
    }
}
