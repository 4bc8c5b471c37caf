//! End-to-end tests for contact CRUD operations.
//!
//! These tests drive the store through whole user-visible flows: adding,
//! updating, and deleting contacts, with the duplicate and validation
//! rules along the way.

use contact_book::{AddError, ContactDraft, ContactStore, DeleteError, UpdateError};

fn draft(name: &str, phone: &str, email: &str, address: &str) -> ContactDraft {
    ContactDraft::new(name, phone, email, address)
}

/// Full lifecycle: add, duplicate add, update, delete, empty list.
#[test]
fn test_contact_crud_lifecycle() {
    let mut store = ContactStore::new();

    // CREATE
    let position = store.add(&draft("Ann", "1112223333", "", "")).unwrap();
    assert_eq!(position, 0);
    assert_eq!(store.len(), 1);

    // Duplicate (name, phone) is rejected even with different other fields
    let err = store
        .add(&draft("Ann", "1112223333", "ann@work.example", "Office"))
        .unwrap_err();
    assert!(matches!(err, AddError::Duplicate { .. }));
    assert_eq!(store.len(), 1);

    // UPDATE in place, full replacement
    store
        .update(0, &draft("Ann", "1112223333", "a@b.co", "X"))
        .unwrap();
    let ann = store.get(0).unwrap();
    assert_eq!(ann.email_display(), "a@b.co");
    assert_eq!(ann.address, "X");

    // DELETE
    let removed = store.delete(0).unwrap();
    assert_eq!(removed.name, "Ann");
    assert!(store.list_all().is_empty());
}

#[test]
fn test_add_appends_in_display_order() {
    let mut store = ContactStore::new();
    for (i, (name, phone)) in [
        ("Ann", "1112223333"),
        ("Bob", "2223334444"),
        ("Cyd", "3334445555"),
    ]
    .iter()
    .enumerate()
    {
        assert_eq!(store.add(&draft(name, phone, "", "")).unwrap(), i);
    }

    let names: Vec<&str> = store.list_all().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cyd"]);
}

#[test]
fn test_same_name_different_phone_is_not_a_duplicate() {
    let mut store = ContactStore::new();
    store.add(&draft("Ann", "1112223333", "", "")).unwrap();
    store.add(&draft("Ann", "9998887777", "", "")).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_delete_shifts_subsequent_positions_by_one() {
    let mut store = ContactStore::new();
    store.add(&draft("Ann", "1112223333", "", "")).unwrap();
    store.add(&draft("Bob", "2223334444", "", "")).unwrap();
    store.add(&draft("Cyd", "3334445555", "", "")).unwrap();

    store.delete(0).unwrap();

    let names: Vec<&str> = store.list_all().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Cyd"]);
    assert_eq!(store.get(0).unwrap().name, "Bob");
    assert_eq!(store.get(1).unwrap().name, "Cyd");
}

#[test]
fn test_update_touches_only_the_target_position() {
    let mut store = ContactStore::new();
    store.add(&draft("Ann", "1112223333", "", "")).unwrap();
    store.add(&draft("Bob", "2223334444", "b@b.co", "Bob's place")).unwrap();
    store.add(&draft("Cyd", "3334445555", "", "")).unwrap();

    let before: Vec<_> = store.list_all().to_vec();
    store
        .update(1, &draft("Robert", "2223334444", "", ""))
        .unwrap();

    assert_eq!(store.get(0), Some(&before[0]));
    assert_eq!(store.get(2), Some(&before[2]));
    let bob = store.get(1).unwrap();
    assert_eq!(bob.name, "Robert");
    assert_eq!(bob.id, before[1].id);
    assert_eq!(bob.email_display(), "");
}

#[test]
fn test_out_of_bounds_positions_are_no_selection() {
    let mut store = ContactStore::new();
    store.add(&draft("Ann", "1112223333", "", "")).unwrap();

    assert!(matches!(
        store.update(1, &draft("Bob", "2223334444", "", "")),
        Err(UpdateError::NoSelection { position: 1, len: 1 })
    ));
    assert!(matches!(
        store.delete(1),
        Err(DeleteError::NoSelection { position: 1, len: 1 })
    ));
    // Nothing changed
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().name, "Ann");
}

/// The duplicate rule runs on add only; update may create a colliding
/// pair. This mirrors the original form's behavior.
#[test]
fn test_update_skips_duplicate_check() {
    let mut store = ContactStore::new();
    store.add(&draft("Ann", "1112223333", "", "")).unwrap();
    store.add(&draft("Bob", "2223334444", "", "")).unwrap();

    assert!(store.update(1, &draft("Ann", "1112223333", "", "")).is_ok());

    // ...and the colliding pair now blocks further adds
    let err = store.add(&draft("Ann", "1112223333", "", "")).unwrap_err();
    assert!(matches!(err, AddError::Duplicate { .. }));
}

#[test]
fn test_validation_failures_leave_store_untouched() {
    let mut store = ContactStore::new();
    store.add(&draft("Ann", "1112223333", "", "")).unwrap();

    assert!(store.add(&draft("", "2223334444", "", "")).is_err());
    assert!(store.add(&draft("Bob", "bad-phone", "", "")).is_err());
    assert!(store.add(&draft("Bob", "2223334444", "nope", "")).is_err());
    assert!(store.update(0, &draft("Ann", "123", "", "")).is_err());

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().phone.as_str(), "1112223333");
}

#[test]
fn test_fields_are_stored_trimmed() {
    let mut store = ContactStore::new();
    store
        .add(&draft("  Ann  ", " 1112223333 ", "  a@b.co ", "  12 Main St "))
        .unwrap();

    let ann = store.get(0).unwrap();
    assert_eq!(ann.name, "Ann");
    assert_eq!(ann.phone.as_str(), "1112223333");
    assert_eq!(ann.email_display(), "a@b.co");
    assert_eq!(ann.address, "12 Main St");
}
