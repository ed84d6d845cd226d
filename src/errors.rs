use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Phonebook table could not be read or written: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid validation pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Wrong input! Please repeat!")]
    ParseCommand(String),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// Rejected field values. Reported to the user before storage is touched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid name length!")]
    NameLength,

    #[error("Bad number! Please make sure you enter an 11-digit number starting with + symbol.")]
    BadNumber,
}

/// Table-level rule violations returned by the phonebook operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("This number is already in the PhoneBook.")]
    DuplicatePhone,

    #[error("Cannot find this number.")]
    PhoneNotFound,
}
