use super::*;
use std::cell::RefCell;

/// Table kept in process memory. `None` means no table has been created yet.
#[derive(Debug, Default)]
pub struct MemStore {
    data: RefCell<Option<Vec<Contact>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for MemStore {
    fn exists(&self) -> Result<bool, AppError> {
        Ok(self.data.borrow().is_some())
    }

    fn create(&self) -> Result<(), AppError> {
        *self.data.borrow_mut() = Some(Vec::new());
        Ok(())
    }

    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone().unwrap_or_default())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = Some(contacts.to_vec());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "memory"
    }
}
