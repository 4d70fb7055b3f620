//! Session commands: `add`, `list`, `eval`, and `quit`.
//!
//! Handlers take their inputs explicitly and return the message to show.
//! They never read input or print; that belongs to the command loop.

/// `add <id> <age> <verified> <region>`: append a record to the store.
pub mod add;
/// `eval <id>`: run the policy pipeline on a stored record.
pub mod eval;
/// `list`: render the store.
pub mod list;

use thiserror::Error;

use crate::config::Config;
use crate::eval::{PolicyOrchestrator, RuleEvaluator};
use crate::parse;
use crate::store::RecordStore;

/// Recoverable command-input errors. The display text is the reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("add requires: id age verified region")]
    AddUsage,
    #[error("age must be a number")]
    AgeNotNumber,
    #[error("eval requires: user_id")]
    EvalUsage,
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// What the command loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show this message and keep reading.
    Message(String),
    /// End the session.
    Quit,
}

/// Routes command names to handlers.
pub struct CommandDispatcher {
    orchestrator: PolicyOrchestrator,
    log_decisions: bool,
}

impl CommandDispatcher {
    pub fn new(orchestrator: PolicyOrchestrator) -> Self {
        Self {
            orchestrator,
            log_decisions: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let evaluator = RuleEvaluator::from_config(&config.rules);
        Self {
            orchestrator: PolicyOrchestrator::new(evaluator),
            log_decisions: config.settings.log_decisions,
        }
    }

    /// Run one command. Only `add` mutates the store, and only on success.
    pub fn dispatch(&self, name: &str, args: &[String], store: &mut RecordStore) -> Reply {
        let name = name.to_lowercase();
        let result = match name.as_str() {
            "add" => add::handle(args, store),
            "list" => Ok(list::handle(store)),
            "eval" => eval::handle(args, store, &self.orchestrator, self.log_decisions),
            "quit" => return Reply::Quit,
            _ => Err(CommandError::UnknownCommand(name.clone())),
        };
        Reply::Message(result.unwrap_or_else(|e| e.to_string()))
    }
}

/// A store plus a dispatcher: the state of one interactive session.
pub struct Session {
    store: RecordStore,
    dispatcher: CommandDispatcher,
}

impl Session {
    pub fn new(dispatcher: CommandDispatcher) -> Self {
        Self {
            store: RecordStore::new(),
            dispatcher,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Split and dispatch one input line. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let (command, args) = parse::split_line(line)?;
        Some(self.dispatcher.dispatch(&command, &args, &mut self.store))
    }
}
