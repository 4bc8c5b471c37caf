//! Case-insensitive substring search over contacts.
//!
//! Search is read-only and intentionally simple: a contact matches when
//! its name or phone contains the trimmed query as a case-insensitive
//! substring. Results preserve store order.

use crate::error::SearchError;
use crate::models::Contact;

/// Filter contacts by a case-insensitive substring of name or phone.
///
/// Returns matches in their original order. An empty result vector is a
/// valid outcome and distinct from the `EmptyQuery` error: the former
/// means "no contacts found", the latter means "no query given".
///
/// # Errors
///
/// Returns `SearchError::EmptyQuery` when `query` trims to empty.
///
/// # Example
///
/// ```
/// use contact_book::{search_contacts, ContactDraft, ContactStore};
///
/// let mut store = ContactStore::new();
/// store.add(&ContactDraft::new("John", "1234567890", "", "")).unwrap();
/// store.add(&ContactDraft::new("Mary", "5551234567", "", "")).unwrap();
///
/// let hits = search_contacts(store.list_all(), "jo").unwrap();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "John");
/// ```
pub fn search_contacts(contacts: &[Contact], query: &str) -> Result<Vec<Contact>, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let needle = query.to_lowercase();
    Ok(contacts
        .iter()
        .filter(|c| contact_matches(c, &needle))
        .cloned()
        .collect())
}

/// Whether a contact's name or phone contains the lowercased needle.
fn contact_matches(contact: &Contact, needle: &str) -> bool {
    contact.name.to_lowercase().contains(needle) || contact.phone.as_str().contains(needle)
}
