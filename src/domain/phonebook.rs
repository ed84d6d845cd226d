use super::*;
use crate::domain::contact::Contact;
use crate::store::Connection;
use tracing::{debug, info};

/// The phone book table and its operations.
///
/// Every operation opens its own [`Connection`] and releases it before
/// returning. There is no transaction spanning two calls.
pub struct Phonebook<S: ContactStore> {
    store: S,
}

impl<S: ContactStore> Phonebook<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Drops the table and recreates it empty. All records are lost.
    pub fn initialize(&self) -> Result<(), AppError> {
        self.store.create()?;
        info!(medium = self.store.get_medium(), "phonebook initialized");
        Ok(())
    }

    /// Inserts a new record. Fails with [`ConstraintError::DuplicatePhone`]
    /// when the phone is already taken, leaving the stored record untouched.
    pub fn add(&self, name: &str, phone: &str) -> Result<(), AppError> {
        let mut conn = self.connect()?;

        if conn.rows().iter().any(|c| c.phone == phone) {
            debug!(phone, "rejected duplicate phone");
            return Err(ConstraintError::DuplicatePhone.into());
        }

        conn.insert(Contact::new(name, phone));
        conn.commit()
    }

    /// Deletes the record with this exact phone, or fails with
    /// [`ConstraintError::PhoneNotFound`].
    pub fn remove(&self, phone: &str) -> Result<(), AppError> {
        let mut conn = self.connect()?;

        if conn.delete_where(|c| c.phone == phone) == 0 {
            debug!(phone, "no record to remove");
            return Err(ConstraintError::PhoneNotFound.into());
        }

        conn.commit()
    }

    pub fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        let conn = self.connect()?;
        Ok(conn.rows().to_vec())
    }

    /// Records whose name contains `needle`. Case sensitive, no wildcards.
    pub fn search_by_name(&self, needle: &str) -> Result<Vec<Contact>, AppError> {
        let conn = self.connect()?;

        Ok(conn
            .rows()
            .iter()
            .filter(|c| c.name.contains(needle))
            .cloned()
            .collect())
    }

    fn connect(&self) -> Result<Connection<'_, S>, AppError> {
        if !self.store.exists()? {
            info!(medium = self.store.get_medium(), "no phonebook table yet");
            self.initialize()?;
        }
        Connection::open(&self.store)
    }
}
