pub mod connection;
pub mod json;
pub mod memory;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use connection::Connection;
pub use json::JsonStore;
pub use memory::MemStore;

/// Backing medium for the single contact table.
///
/// Implementations only move whole tables around; uniqueness and lookups
/// live in [`crate::domain::phonebook::Phonebook`].
pub trait ContactStore {
    /// Whether a table has been created on this medium.
    fn exists(&self) -> Result<bool, AppError>;

    /// Drops any existing table and creates an empty one.
    fn create(&self) -> Result<(), AppError>;

    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
