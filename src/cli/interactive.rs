use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::{
    cli::{passes_validation, print_contacts, prompt},
    prelude::{AppError, ContactStore, Phonebook},
};

pub const SEPARATOR: &str = "---------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    List,
    Search,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Remove),
            "3" => Ok(MenuChoice::List),
            "4" => Ok(MenuChoice::Search),
            "0" => Ok(MenuChoice::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}

// How an action ended
enum Step {
    Done,
    Rejected,
    EndOfInput,
}

pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "1 - add record")?;
    writeln!(out, "2 - remove record")?;
    writeln!(out, "3 - list all records")?;
    writeln!(out, "4 - search for records")?;
    writeln!(out, "0 - exit")?;
    Ok(())
}

/// Menu loop. Runs until the user picks `0` or input runs out.
///
/// Add and remove do not report their outcome here; only validation
/// failures are shown.
pub fn run<S, R, W>(book: &Phonebook<S>, mut input: R, out: &mut W) -> Result<(), AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Hi! I am a phone book. what would you like to do?")?;

    'menu: loop {
        show_menu(out)?;

        let Some(action) = prompt(&mut input, out, "Your choice: ")? else {
            break 'menu;
        };
        writeln!(out, "{SEPARATOR}")?;

        let choice = match action.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue 'menu;
            }
        };

        let step = match choice {
            MenuChoice::Add => add_record(book, &mut input, out)?,
            MenuChoice::Remove => remove_record(book, &mut input, out)?,
            MenuChoice::List => {
                writeln!(out, "Your Phone Book:")?;
                print_contacts(out, &book.list_all()?)?;
                Step::Done
            }
            MenuChoice::Search => search_records(book, &mut input, out)?,
            MenuChoice::Exit => {
                writeln!(out, "{SEPARATOR}")?;
                break 'menu;
            }
        };

        match step {
            Step::Done => writeln!(out, "{SEPARATOR}")?,
            Step::Rejected => continue 'menu,
            Step::EndOfInput => break 'menu,
        }
    }

    writeln!(out, "Thanks, bye!")?;
    Ok(())
}

fn add_record<S, R, W>(book: &Phonebook<S>, input: &mut R, out: &mut W) -> Result<Step, AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let Some(name) = prompt(input, out, "Please enter a name: ")? else {
        return Ok(Step::EndOfInput);
    };
    let Some(phone) = prompt(input, out, "Please enter a phone number: ")? else {
        return Ok(Step::EndOfInput);
    };

    if !passes_validation(out, Some(&name), Some(&phone))? {
        return Ok(Step::Rejected);
    }

    swallow_constraint(book.add(&name, &phone))?;
    Ok(Step::Done)
}

fn remove_record<S, R, W>(book: &Phonebook<S>, input: &mut R, out: &mut W) -> Result<Step, AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let Some(phone) = prompt(input, out, "Please enter a phone number to delete: ")? else {
        return Ok(Step::EndOfInput);
    };

    if !passes_validation(out, None, Some(&phone))? {
        return Ok(Step::Rejected);
    }

    swallow_constraint(book.remove(&phone))?;
    Ok(Step::Done)
}

fn search_records<S, R, W>(book: &Phonebook<S>, input: &mut R, out: &mut W) -> Result<Step, AppError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let Some(name) = prompt(input, out, "Please enter a name to search: ")? else {
        return Ok(Step::EndOfInput);
    };

    if !passes_validation(out, Some(&name), None)? {
        return Ok(Step::Rejected);
    }

    print_contacts(out, &book.search_by_name(&name)?)?;
    Ok(Step::Done)
}

fn swallow_constraint(outcome: Result<(), AppError>) -> Result<(), AppError> {
    match outcome {
        Err(AppError::Constraint(e)) => {
            debug!(error = %e, "outcome not reported in interactive mode");
            Ok(())
        }
        other => other,
    }
}
