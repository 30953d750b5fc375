//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;

/// Interactive in-memory todo manager.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about)]
pub struct CliArgs {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "TODO_LOG_LEVEL", default_value_t = todo_core::default_log_level().to_string())]
    pub log_level: String,

    /// Absolute directory for rolling log files. File logging is off when unset.
    #[arg(long, env = "TODO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_explicit_flags() {
        let args = CliArgs::parse_from(["todo", "--log-level", "warn", "--log-dir", "/tmp/todo-logs"]);
        assert_eq!(args.log_level, "warn");
        assert_eq!(
            args.log_dir.as_deref(),
            Some(std::path::Path::new("/tmp/todo-logs"))
        );
    }
}
