//! ContactId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable synthetic identifier for a contact.
///
/// Ids are minted by the store when a contact is added and are never
/// reused for the lifetime of that store, even after the contact is
/// deleted. Display position shifts as contacts are removed; the id
/// does not, which makes it the safe key for update and delete when the
/// visible list is filtered.
///
/// # Example
///
/// ```
/// use contact_book::{ContactDraft, ContactStore};
///
/// let mut store = ContactStore::new();
/// let pos = store
///     .add(&ContactDraft::new("Ann", "1112223333", "", ""))
///     .unwrap();
/// let id = store.list_all()[pos].id;
/// assert_eq!(store.position_of(id), Some(pos));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContactId(u64);

impl ContactId {
    /// Mint a new ContactId from a raw counter value.
    ///
    /// Restricted to the crate so that only the store can assign ids.
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

// Display support
impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
