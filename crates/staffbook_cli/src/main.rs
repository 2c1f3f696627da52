//! Interactive console for the staff/project registry.
//!
//! # Responsibility
//! - Bootstrap logging and the in-memory session.
//! - Run the menu loop and map its outcome to the process exit status.

mod console;

use std::io;
use std::process::ExitCode;

use staffbook_core::Session;

fn main() -> ExitCode {
    init_logging_best_effort();

    let session = match Session::open_in_memory() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match console::run_session(&session, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=session_aborted module=cli status=error error={err}");
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}

/// Best-effort logging bootstrap: a failure is reported to stderr once and
/// the session runs without logs.
fn init_logging_best_effort() {
    let log_dir = std::env::temp_dir().join("staffbook").join("logs");
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = staffbook_core::init_logging(staffbook_core::default_log_level(), log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}
