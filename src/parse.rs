//! Command-line splitting for the interactive session.

/// Split a line into a lowercased command name and its arguments.
///
/// Returns `None` for blank lines. Arguments follow POSIX word splitting, so
/// quoted arguments may contain spaces; a line shlex cannot parse (an
/// unbalanced quote) is split on whitespace instead.
pub fn split_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = tokenize(line).into_iter();
    let command = words.next()?.to_lowercase();
    Some((command, words.collect()))
}

fn tokenize(line: &str) -> Vec<String> {
    shlex::split(line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> (String, Vec<String>) {
        split_line(line).unwrap()
    }

    #[test]
    fn command_and_args() {
        let (cmd, args) = split("add 1 25 true US");
        assert_eq!(cmd, "add");
        assert_eq!(args, vec!["1", "25", "true", "US"]);
    }

    #[test]
    fn command_is_lowercased_args_are_not() {
        let (cmd, args) = split("EVAL Alice");
        assert_eq!(cmd, "eval");
        assert_eq!(args, vec!["Alice"]);
    }

    #[test]
    fn no_args() {
        assert_eq!(split("  list  "), ("list".to_string(), vec![]));
    }

    #[test]
    fn blank_line() {
        assert_eq!(split_line(""), None);
        assert_eq!(split_line("   \t"), None);
    }

    #[test]
    fn quoted_argument() {
        let (_, args) = split("add 'jane doe' 30 yes US");
        assert_eq!(args[0], "jane doe");
        assert_eq!(args.len(), 4);
    }

    #[test]
    fn unbalanced_quote_falls_back() {
        let (cmd, args) = split("eval o'brien");
        assert_eq!(cmd, "eval");
        assert_eq!(args, vec!["o'brien"]);
    }
}
