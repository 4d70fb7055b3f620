//! recordgate: interactive record session, or a one-shot JSON check.
//!
//! Without arguments, reads commands from stdin until `quit` or EOF:
//!
//!   add <id> <age> <verified> <region> | list | eval <id> | quit
//!
//! With `--check`, reads a JSON record (or an array of records) from stdin
//! and writes the decision(s) as JSON to stdout.

use std::io::{BufRead, Read, Write};

use recordgate::commands::{CommandDispatcher, Reply, Session};
use recordgate::check;
use recordgate::config::Config;
use recordgate::eval::{PolicyOrchestrator, RuleEvaluator};
use recordgate::logging;

const USAGE: &str = "Commands: add <id> <age> <verified> <region> | list | eval <id> | quit";

fn main() {
    let config = Config::load();
    logging::init(&config.settings);

    let check_mode = std::env::args().skip(1).any(|a| a == "--check");
    if check_mode {
        run_check(&config);
    } else {
        run_session(&config);
    }
}

fn run_session(config: &Config) {
    let mut session = Session::new(CommandDispatcher::from_config(config));
    println!("{USAGE}");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("failed to read stdin: {e}");
                std::process::exit(1);
            }
        }

        match session.handle_line(&line) {
            None => continue,
            Some(Reply::Message(msg)) => println!("{msg}"),
            Some(Reply::Quit) => {
                println!("bye");
                break;
            }
        }
    }
}

fn run_check(config: &Config) {
    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        eprintln!("failed to read stdin");
        std::process::exit(1);
    }

    let orchestrator = PolicyOrchestrator::new(RuleEvaluator::from_config(&config.rules));
    match check::check(&input, &orchestrator, config.settings.log_decisions) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("JSON parse error: {e}");
            std::process::exit(1);
        }
    }
}
