//! recordgate: validate a record, run business rules over it, and report an
//! allow/deny decision with every failure reason.
//!
//! The pipeline is validate → evaluate → format. A record that fails
//! validation is reported with the first failing check and never reaches the
//! rules. A valid record is run through every rule in order, without
//! stopping early, and the failure reasons are joined into the decision.
//!
//! # Architecture
//!
//! - **[`record`]** — Records: open field maps with defaulting accessors.
//! - **[`eval`]** — Validator, rule evaluator, formatter, and the orchestrator that sequences them.
//! - **[`rules`]** — `Rule` trait and the baseline rules (age, verified, region).
//! - **[`store`]** — In-memory, insertion-ordered record store.
//! - **[`commands`]** — Session commands (`add`, `list`, `eval`, `quit`) and dispatch.
//! - **[`check`]** — One-shot JSON check over one record or a batch.
//! - **[`parse`]** — Command-line splitting.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — File logger setup and decision logging.

/// JSON check mode over single records and batches.
pub mod check;
/// Session commands, dispatcher, and session state.
pub mod commands;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Evaluation pipeline: validation, rule evaluation, formatting, orchestration.
pub mod eval;
/// Logger initialization and decision log lines.
pub mod logging;
/// Input line splitting.
pub mod parse;
/// Record and field value types.
pub mod record;
/// Rule trait and baseline rule implementations.
pub mod rules;
/// Append-only record store.
pub mod store;

use eval::{PolicyOrchestrator, RuleEvaluator};
use record::Record;

/// Build the default rule set and run a record through the full pipeline.
///
/// This is the main entry point for tests and simple usage.
/// For user config or a custom rule list, build a [`PolicyOrchestrator`] directly.
pub fn run_policy(record: &Record) -> String {
    let config = config::Config::default_config();
    let orchestrator = PolicyOrchestrator::new(RuleEvaluator::from_config(&config.rules));
    orchestrator.run(record)
}
