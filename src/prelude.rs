pub use crate::cli::{command, interactive, run::run_app};
pub use crate::config::Settings;
pub use crate::domain::{
    contact::{self, Contact},
    phonebook::Phonebook,
    validation::{self, validate},
};
pub use crate::errors::{AppError, ConstraintError, ValidationError};
pub use crate::store::{self, ContactStore, JsonStore, MemStore};
