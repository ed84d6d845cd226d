use crate::{
    cli::{interactive, passes_validation, print_contacts},
    config::Settings,
    prelude::{
        AppError, ContactStore, Phonebook,
        command::{Cli, Mode},
    },
};
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mode = cli.action.mode();

    let settings = Settings::from_cli(&cli);
    debug!(?mode, path = %settings.db_path.display(), "starting phonebook");

    let book = Phonebook::new(settings.store());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    dispatch(&book, mode, &cli.name, &cli.phone, &mut out)
}

/// Runs one flag-mode action against `book`, writing user output to `out`.
pub fn dispatch<S, W>(
    book: &Phonebook<S>,
    mode: Mode,
    name: &str,
    phone: &str,
    out: &mut W,
) -> Result<(), AppError>
where
    S: ContactStore,
    W: Write,
{
    match mode {
        Mode::Interactive => interactive::run(book, io::stdin().lock(), out),

        Mode::AddEntry => {
            if !passes_validation(out, Some(name), Some(phone))? {
                return Ok(());
            }
            report(out, book.add(name, phone))
        }

        Mode::RemoveEntry => {
            if !passes_validation(out, None, Some(phone))? {
                return Ok(());
            }
            report(out, book.remove(phone))
        }

        Mode::ListAll => print_contacts(out, &book.list_all()?),

        Mode::Search => {
            if !passes_validation(out, Some(name), None)? {
                return Ok(());
            }
            print_contacts(out, &book.search_by_name(name)?)
        }

        Mode::Reset => book.initialize(),
    }
}

// Constraint failures become user messages; anything else is fatal.
fn report<W: Write>(out: &mut W, outcome: Result<(), AppError>) -> Result<(), AppError> {
    match outcome {
        Ok(()) => writeln!(out, "Success!")?,
        Err(AppError::Constraint(e)) => writeln!(out, "{e}")?,
        Err(e) => return Err(e),
    }
    Ok(())
}
