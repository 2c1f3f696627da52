//! Menu loop and line-oriented prompts.
//!
//! # Responsibility
//! - Present the nine-option menu and collect field input in fixed order.
//! - Dispatch registrations to the core services.
//!
//! # Invariants
//! - Text fields keep embedded spaces; only the trailing newline is
//!   stripped.
//! - Business rejections end the session as an error; malformed numeric
//!   input never does (numeric prompts re-prompt, unknown menu selections
//!   fall through).
//! - End of input ends the session like the exit option.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

use log::info;
use staffbook_core::{NewEmployee, Project, RepoError, Session};

const MENU_TEXT: &str = "
--- Menu ---
1. Add Employee
2. Add Project
3. Assign Employee to Project
4. Modify Employee
5. Modify Project
6. Report Employees
7. Report Projects
8. List Assignments
9. Exit
";

/// Reason the menu loop stopped early.
#[derive(Debug)]
pub enum ConsoleError {
    /// A registration was rejected (validation or duplicate) or the store
    /// failed; per policy this aborts the whole session.
    Register(RepoError),
    Io(io::Error),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Register(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for ConsoleError {
    fn from(value: RepoError) -> Self {
        Self::Register(value)
    }
}

impl From<io::Error> for ConsoleError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Runs the menu loop until exit, end of input, or a rejected registration.
pub fn run_session<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> Result<(), ConsoleError> {
    info!("event=session_start module=cli status=ok");

    loop {
        output.write_all(MENU_TEXT.as_bytes())?;
        write!(output, "Select an option: ")?;
        output.flush()?;

        let Some(selection) = read_line(input)? else {
            break;
        };

        match selection.trim().parse::<i64>() {
            Ok(1) => {
                if !add_employee(session, input, output)? {
                    break;
                }
            }
            Ok(2) => {
                if !add_project(session, input, output)? {
                    break;
                }
            }
            Ok(9) => break,
            // Options 3-8 are advertised but deliberately inert, and
            // anything else falls through the same way: the menu simply
            // re-displays.
            Ok(_) | Err(_) => {}
        }
    }

    info!("event=session_end module=cli status=ok");
    Ok(())
}

/// Collects all employee fields in fixed order and registers the record.
///
/// Returns `Ok(false)` when input ended mid-form; nothing is registered in
/// that case.
fn add_employee<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> Result<bool, ConsoleError> {
    let Some(carnet) = prompt_int(input, output, "Carnet number")? else {
        return Ok(false);
    };
    let Some(name) = prompt_line(input, output, "Name")? else {
        return Ok(false);
    };
    let Some(birth_date) = prompt_line(input, output, "Birth date (YYYY-MM-DD)")? else {
        return Ok(false);
    };
    let Some(category) =
        prompt_line(input, output, "Category (Administrator/Operator/Laborer)")?
    else {
        return Ok(false);
    };
    let Some(salary) = prompt_int(input, output, "Salary")? else {
        return Ok(false);
    };
    let Some(address) = prompt_line(input, output, "Address")? else {
        return Ok(false);
    };
    let Some(phone) = prompt_line(input, output, "Phone")? else {
        return Ok(false);
    };
    let Some(email) = prompt_line(input, output, "Email")? else {
        return Ok(false);
    };

    let request = NewEmployee {
        carnet,
        name,
        birth_date,
        category,
        salary,
        address,
        phone,
        email,
    };
    session.employees().register(&request)?;

    Ok(true)
}

/// Collects all project fields in fixed order and registers the record.
fn add_project<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> Result<bool, ConsoleError> {
    let Some(code) = prompt_int(input, output, "Project code")? else {
        return Ok(false);
    };
    let Some(name) = prompt_line(input, output, "Project name")? else {
        return Ok(false);
    };
    let Some(start_date) = prompt_line(input, output, "Start date (YYYY-MM-DD)")? else {
        return Ok(false);
    };
    let Some(end_date) = prompt_line(input, output, "End date (YYYY-MM-DD)")? else {
        return Ok(false);
    };

    let project = Project::new(code, name, start_date, end_date);
    session.projects().register(&project)?;

    Ok(true)
}

/// Prompts for one text field. The full line is kept, embedded spaces and
/// all; only the line terminator is stripped.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>, ConsoleError> {
    write!(output, "{label}: ")?;
    output.flush()?;
    read_line(input)
}

/// Prompts for one integer field, re-prompting until a parseable value or
/// end of input.
fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<i64>, ConsoleError> {
    loop {
        let Some(text) = prompt_line(input, output, label)? else {
            return Ok(None);
        };
        if let Ok(value) = text.trim().parse::<i64>() {
            return Ok(Some(value));
        }
    }
}

/// Reads one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ConsoleError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
