use crate::commands::CommandError;
use crate::eval::{PolicyOrchestrator, format_outcome};
use crate::logging;
use crate::store::RecordStore;

/// Look up a record by id and run it through the orchestrator.
pub fn handle(
    args: &[String],
    store: &RecordStore,
    orchestrator: &PolicyOrchestrator,
    log_decisions: bool,
) -> Result<String, CommandError> {
    let Some(id) = args.first() else {
        return Err(CommandError::EvalUsage);
    };
    let record = store
        .find_by_id(id)
        .ok_or_else(|| CommandError::UserNotFound(id.clone()))?;

    let outcome = orchestrator.decide(record);
    if log_decisions {
        logging::log_decision(id, &outcome);
    }
    Ok(format_outcome(&outcome))
}
