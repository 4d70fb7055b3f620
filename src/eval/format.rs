use super::decision::Outcome;

/// Render an outcome as the message shown to the caller.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Invalid(err) => format!("Validation failed: {err}"),
        Outcome::Decided(d) if d.allowed() => "Allowed".to_string(),
        Outcome::Decided(d) => format!("Denied: {}", d.reasons().join("; ")),
    }
}
