//! In-memory contact store.

use crate::domain::ContactId;
use crate::error::{AddError, DeleteError, SearchError, UpdateError};
use crate::models::{Contact, ContactDraft, ValidContact};
use crate::search;
use tracing::debug;

/// The ordered collection of contacts owned by the application.
///
/// Contacts are kept in insertion order, which is also display order.
/// A zero-based position indexes the current full order and shifts when
/// earlier contacts are deleted; the [`ContactId`] assigned on add never
/// does. Both keys are accepted for update and delete.
///
/// The store enforces one business rule: no two contacts may share both
/// the same name and the same phone. Other fields may repeat freely.
///
/// # Example
///
/// ```
/// use contact_book::{ContactDraft, ContactStore};
///
/// let mut store = ContactStore::new();
/// let pos = store
///     .add(&ContactDraft::new("John", "1234567890", "john@example.com", ""))
///     .unwrap();
/// assert_eq!(pos, 0);
/// assert_eq!(store.list_all()[0].name, "John");
/// ```
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    next_id: u64,
}

impl ContactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            next_id: 0,
        }
    }

    /// Validate a draft and append it as a new contact.
    ///
    /// Returns the new contact's position, which is always `len - 1`.
    ///
    /// # Errors
    ///
    /// Returns `AddError::Validation` if any field fails validation, or
    /// `AddError::Duplicate` if a stored contact already has the same
    /// name and phone. The store is unchanged on error.
    pub fn add(&mut self, draft: &ContactDraft) -> Result<usize, AddError> {
        let valid = draft.validate()?;

        if self
            .contacts
            .iter()
            .any(|c| c.matches_identity(&valid.name, &valid.phone))
        {
            return Err(AddError::Duplicate {
                name: valid.name,
                phone: valid.phone.into_inner(),
            });
        }

        let id = self.mint_id();
        self.contacts.push(valid.into_contact(id));
        let position = self.contacts.len() - 1;
        debug!(%id, position, "contact added");
        Ok(position)
    }

    /// Validate a draft and replace the contact at `position` with it.
    ///
    /// The replaced contact keeps its id and its place in the order.
    /// Unlike [`add`](Self::add), no duplicate check runs here; an update
    /// may produce a name/phone pair that collides with another contact.
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::NoSelection` if `position` is out of bounds,
    /// or `UpdateError::Validation` if a field fails validation.
    pub fn update(&mut self, position: usize, draft: &ContactDraft) -> Result<(), UpdateError> {
        if position >= self.contacts.len() {
            return Err(UpdateError::NoSelection {
                position,
                len: self.contacts.len(),
            });
        }
        let valid = draft.validate()?;
        self.replace_at(position, valid);
        Ok(())
    }

    /// Validate a draft and replace the contact with the given id.
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::UnknownId` if no contact has this id, or
    /// `UpdateError::Validation` if a field fails validation.
    pub fn update_by_id(&mut self, id: ContactId, draft: &ContactDraft) -> Result<(), UpdateError> {
        let position = self.position_of(id).ok_or(UpdateError::UnknownId(id))?;
        let valid = draft.validate()?;
        self.replace_at(position, valid);
        Ok(())
    }

    /// Remove and return the contact at `position`.
    ///
    /// Subsequent contacts shift down by one position.
    ///
    /// # Errors
    ///
    /// Returns `DeleteError::NoSelection` if `position` is out of bounds.
    pub fn delete(&mut self, position: usize) -> Result<Contact, DeleteError> {
        if position >= self.contacts.len() {
            return Err(DeleteError::NoSelection {
                position,
                len: self.contacts.len(),
            });
        }
        let removed = self.contacts.remove(position);
        debug!(id = %removed.id, position, "contact deleted");
        Ok(removed)
    }

    /// Remove and return the contact with the given id.
    ///
    /// # Errors
    ///
    /// Returns `DeleteError::UnknownId` if no contact has this id.
    pub fn delete_by_id(&mut self, id: ContactId) -> Result<Contact, DeleteError> {
        let position = self.position_of(id).ok_or(DeleteError::UnknownId(id))?;
        let removed = self.contacts.remove(position);
        debug!(%id, position, "contact deleted");
        Ok(removed)
    }

    /// The full ordered sequence of contacts, unfiltered.
    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts whose name or phone contains `query`, case-insensitively.
    ///
    /// Results preserve store order. An empty result is `Ok`; only a
    /// blank query is refused.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::EmptyQuery` when the query trims to empty.
    pub fn search(&self, query: &str) -> Result<Vec<Contact>, SearchError> {
        search::search_contacts(&self.contacts, query)
    }

    /// The contact at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Contact> {
        self.contacts.get(position)
    }

    /// The contact with the given id, if any.
    pub fn get_by_id(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Current full-order position of the contact with the given id.
    pub fn position_of(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn mint_id(&mut self) -> ContactId {
        let id = ContactId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn replace_at(&mut self, position: usize, valid: ValidContact) {
        let id = self.contacts[position].id;
        self.contacts[position] = valid.into_contact(id);
        debug!(%id, position, "contact updated");
    }
}
