use super::*;
use tracing::{debug, warn};

/// Scoped handle on the contact table.
///
/// Opening a connection loads the table; [`Connection::commit`] writes the
/// modified rows back. A connection dropped on any other path (early return,
/// `?`, panic) releases the table without persisting anything.
pub struct Connection<'a, S: ContactStore + ?Sized> {
    store: &'a S,
    rows: Vec<Contact>,
    dirty: bool,
}

impl<'a, S: ContactStore + ?Sized> Connection<'a, S> {
    pub fn open(store: &'a S) -> Result<Self, AppError> {
        let rows = store.load()?;
        debug!(medium = store.get_medium(), rows = rows.len(), "connection opened");

        Ok(Self {
            store,
            rows,
            dirty: false,
        })
    }

    pub fn rows(&self) -> &[Contact] {
        &self.rows
    }

    pub fn insert(&mut self, contact: Contact) {
        self.rows.push(contact);
        self.dirty = true;
    }

    /// Removes every row matching `pred` and returns how many went away.
    pub fn delete_where<F>(&mut self, pred: F) -> usize
    where
        F: Fn(&Contact) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|c| !pred(c));

        let removed = before - self.rows.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    pub fn commit(mut self) -> Result<(), AppError> {
        if self.dirty {
            self.store.save(&self.rows)?;
            self.dirty = false;
        }
        Ok(())
    }
}

impl<S: ContactStore + ?Sized> Drop for Connection<'_, S> {
    fn drop(&mut self) {
        if self.dirty {
            warn!(
                medium = self.store.get_medium(),
                "connection closed with uncommitted changes, discarding them"
            );
        }
        debug!(medium = self.store.get_medium(), "connection closed");
    }
}
