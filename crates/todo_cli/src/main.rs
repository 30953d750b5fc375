//! Interactive todo manager entry point.
//!
//! # Responsibility
//! - Parse configuration and bootstrap optional file logging.
//! - Own the single store instance for the lifetime of the session.

mod args;
mod menu;
mod prompt;
mod render;

use args::CliArgs;
use clap::Parser;
use menu::Session;
use std::io;
use std::process::ExitCode;
use todo_core::{init_logging, logging_status, InMemoryTodoRepository, TodoService};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Some(log_dir) = &args.log_dir {
        match init_logging(&args.log_level, log_dir) {
            Ok(()) => {
                if let Some((level, active_dir)) = logging_status() {
                    eprintln!("logging at `{level}` to {}", active_dir.display());
                }
            }
            Err(err) => eprintln!("warning: file logging disabled: {err}"),
        }
    }

    let service = TodoService::new(InMemoryTodoRepository::new());
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), service);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=session_end module=cli status=error error={}", err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
