pub mod command;
pub mod interactive;
pub mod run;

use crate::domain::{contact::Contact, validation::validate};
use crate::errors::AppError;
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn print_contacts<W: Write>(out: &mut W, contacts: &[Contact]) -> Result<(), AppError> {
    for contact in contacts {
        writeln!(out, "{contact}")?;
    }
    Ok(())
}

/// Prints one diagnostic line per rejected field and returns whether the
/// input may go on to the phone book.
pub fn passes_validation<W: Write>(
    out: &mut W,
    name: Option<&str>,
    phone: Option<&str>,
) -> Result<bool, AppError> {
    let problems = validate(name, phone)?;

    for problem in &problems {
        writeln!(out, "{problem}")?;
    }
    Ok(problems.is_empty())
}

// INPUT FUNCTIONS
/// Shows `message` and reads one line. `None` once input is exhausted.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    // Only the line terminator is dropped; surrounding spaces belong to the value
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Some(trimmed.to_string()))
}
