use std::path::PathBuf;

use clap::{Args, Parser};

use crate::store::json::STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "phonebook",
    version,
    about = "This is a phonebook!",
    long_about = "This is a phonebook!\n\
        You can use only one of the --interactive, --add-entry, --remove-entry, \
        --list-all, --search, --reset commands at a time."
)]
pub struct Cli {
    #[command(flatten)]
    pub action: Action,

    /// Name to add or search for
    #[arg(long, default_value_t = String::new(), hide_default_value = true)]
    pub name: String,

    /// Phone number to add or delete
    #[arg(long, default_value_t = String::new(), hide_default_value = true)]
    pub phone: String,

    /// Location of the phonebook table file
    #[arg(long, env = "PHONEBOOK_PATH", default_value = STORAGE_PATH)]
    pub db_path: PathBuf,
}

/// Top-level actions, exactly one per invocation
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Action {
    /// Turn interactive mode on
    #[arg(long)]
    pub interactive: bool,

    /// Add name and phone number to the phonebook. Requires --name, --phone
    #[arg(long)]
    pub add_entry: bool,

    /// Remove a record from the phonebook by number. Requires --phone
    #[arg(long)]
    pub remove_entry: bool,

    /// List all records
    #[arg(long)]
    pub list_all: bool,

    /// Search records by name. Requires --name
    #[arg(long)]
    pub search: bool,

    /// Clear phonebook
    #[arg(long)]
    pub reset: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    AddEntry,
    RemoveEntry,
    ListAll,
    Search,
    Reset,
}

impl Action {
    /// clap's required, single-choice group guarantees exactly one flag is set.
    pub fn mode(&self) -> Mode {
        if self.interactive {
            Mode::Interactive
        } else if self.add_entry {
            Mode::AddEntry
        } else if self.remove_entry {
            Mode::RemoveEntry
        } else if self.search {
            Mode::Search
        } else if self.reset {
            Mode::Reset
        } else {
            Mode::ListAll
        }
    }
}
