use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Settings;
use crate::eval::{Outcome, format_outcome};

/// Install a file logger at ~/.local/share/recordgate/recordgate.log.
/// Best-effort: failures leave logging disabled (logging must never block the session).
pub fn init(settings: &Settings) {
    let level = LevelFilter::from_str(&settings.log_level).unwrap_or(LevelFilter::Warn);
    if level == LevelFilter::Off {
        return;
    }
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = std::path::Path::new(&home).join(".local/share/recordgate");
    let _ = std::fs::create_dir_all(&log_dir);

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("recordgate.log"))
    else {
        return;
    };

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(level, config, file);
}

/// One tab-separated decision line: `<id>\t<decision>\t<message>`.
pub fn decision_line(id: &str, outcome: &Outcome) -> String {
    // Compact single-line message (replace newlines with "; ")
    let message = format_outcome(outcome).replace('\n', "; ");
    format!("{id}\t{}\t{message}", outcome.as_str())
}

/// Record a decision under the `decision` log target.
pub fn log_decision(id: &str, outcome: &Outcome) {
    log::info!(target: "decision", "{}", decision_line(id, outcome));
}
