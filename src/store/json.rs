use super::*;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;

pub const STORAGE_PATH: &str = "./phonebook.json";

/// Contact table persisted as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(STORAGE_PATH)
    }
}

impl ContactStore for JsonStore {
    fn exists(&self) -> Result<bool, AppError> {
        Ok(fs::exists(&self.path)?)
    }

    fn create(&self) -> Result<(), AppError> {
        if fs::exists(&self.path)? {
            fs::remove_file(&self.path)?;
            info!(path = %self.path.display(), "dropped phonebook table");
        }

        create_file_parent(&self.path)?;
        self.save(&[])?;
        info!(path = %self.path.display(), "created empty phonebook table");
        Ok(())
    }

    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let json_contacts = serde_json::to_string(contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(json_contacts.as_bytes())?;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "json"
    }
}
