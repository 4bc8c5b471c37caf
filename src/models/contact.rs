//! Contact record and the raw form input it is built from.

use crate::domain::{ContactId, EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact stored in the book.
///
/// Instances are only created by [`ContactStore::add`] and replaced by
/// [`ContactStore::update`], both of which go through [`ContactDraft::validate`],
/// so every stored contact has a non-empty name and a 10-digit phone number.
///
/// [`ContactStore::add`]: crate::store::ContactStore::add
/// [`ContactStore::update`]: crate::store::ContactStore::update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Stable identifier, assigned by the store
    pub id: ContactId,

    /// Full name of the contact
    pub name: String,

    /// Phone number, exactly 10 digits
    pub phone: PhoneNumber,

    /// Email address, if one was provided
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<EmailAddress>,

    /// Free-form postal address, possibly empty
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub address: String,
}

impl Contact {
    /// Whether this contact has the given name and phone pair.
    ///
    /// The pair is the uniqueness key for the store: two contacts may
    /// share a name or a phone, but not both.
    pub fn matches_identity(&self, name: &str, phone: &PhoneNumber) -> bool {
        self.name == name && self.phone == *phone
    }

    /// Email as display text, empty string when absent.
    pub fn email_display(&self) -> &str {
        self.email.as_ref().map_or("", |e| e.as_str())
    }
}

/// Raw contact input exactly as collected from the form, before any
/// trimming or validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// Raw name field
    pub name: String,

    /// Raw phone field
    pub phone: String,

    /// Raw email field; empty means "not provided"
    pub email: String,

    /// Raw address field
    pub address: String,
}

impl ContactDraft {
    /// Create a draft from the four raw field values.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Validate the draft, producing trimmed, type-checked field values.
    ///
    /// All four fields are trimmed of leading and trailing whitespace
    /// before any check runs. Name and phone are required; the phone must
    /// be exactly 10 digits; a non-empty email must contain `@` and `.`;
    /// the address is unconstrained.
    ///
    /// Duplicate detection is not part of validation. It needs to see the
    /// whole store, so it happens in [`ContactStore::add`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRequiredField` for an empty name
    /// or phone, `ValidationError::InvalidPhone` for a malformed phone,
    /// or `ValidationError::InvalidEmail` for a malformed email.
    ///
    /// [`ContactStore::add`]: crate::store::ContactStore::add
    pub fn validate(&self) -> Result<ValidContact, ValidationError> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let email = self.email.trim();
        let address = self.address.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingRequiredField("name"));
        }
        if phone.is_empty() {
            return Err(ValidationError::MissingRequiredField("phone"));
        }

        let phone = PhoneNumber::new(phone)?;

        let email = if email.is_empty() {
            None
        } else {
            Some(EmailAddress::new(email)?)
        };

        Ok(ValidContact {
            name: name.to_string(),
            phone,
            email,
            address: address.to_string(),
        })
    }
}

/// A draft that passed field validation, ready for the store.
///
/// Fields are trimmed and type-checked, but the `(name, phone)` pair has
/// not yet been checked against existing contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    /// Trimmed, non-empty name
    pub name: String,

    /// Validated phone number
    pub phone: PhoneNumber,

    /// Validated email, if the field was non-empty
    pub email: Option<EmailAddress>,

    /// Trimmed address, possibly empty
    pub address: String,
}

impl ValidContact {
    /// Attach a store-assigned id, producing the full record.
    pub(crate) fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_all_fields() {
        let draft = ContactDraft::new("  Ann  ", " 1112223333 ", " a@b.co ", "  12 Main St  ");
        let valid = draft.validate().unwrap();
        assert_eq!(valid.name, "Ann");
        assert_eq!(valid.phone.as_str(), "1112223333");
        assert_eq!(valid.email.unwrap().as_str(), "a@b.co");
        assert_eq!(valid.address, "12 Main St");
    }

    #[test]
    fn test_validate_requires_name_and_phone() {
        let draft = ContactDraft::new("", "1112223333", "", "");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingRequiredField("name"))
        );

        let draft = ContactDraft::new("Ann", "", "", "");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingRequiredField("phone"))
        );

        // Whitespace-only counts as empty
        let draft = ContactDraft::new("   ", "1112223333", "", "");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingRequiredField("name"))
        );
    }

    #[test]
    fn test_validate_name_checked_before_phone() {
        let draft = ContactDraft::new("", "", "", "");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingRequiredField("name"))
        );
    }

    #[test]
    fn test_validate_rejects_bad_phone() {
        for phone in ["12345", "12345678901", "12345abcde", "+1234567890"] {
            let draft = ContactDraft::new("Ann", phone, "", "");
            assert!(
                matches!(draft.validate(), Err(ValidationError::InvalidPhone(_))),
                "expected InvalidPhone for {:?}",
                phone
            );
        }
    }

    #[test]
    fn test_validate_email_optional() {
        let draft = ContactDraft::new("Ann", "1112223333", "", "");
        let valid = draft.validate().unwrap();
        assert!(valid.email.is_none());

        let draft = ContactDraft::new("Ann", "1112223333", "a@b", "");
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_validate_address_unconstrained() {
        let draft = ContactDraft::new("Ann", "1112223333", "", "!!! anything at all ???");
        let valid = draft.validate().unwrap();
        assert_eq!(valid.address, "!!! anything at all ???");
    }

    #[test]
    fn test_matches_identity() {
        let draft = ContactDraft::new("Ann", "1112223333", "", "");
        let contact = draft.validate().unwrap().into_contact(ContactId::new(0));

        let phone = PhoneNumber::new("1112223333").unwrap();
        assert!(contact.matches_identity("Ann", &phone));
        assert!(!contact.matches_identity("Bob", &phone));

        let other_phone = PhoneNumber::new("9998887777").unwrap();
        assert!(!contact.matches_identity("Ann", &other_phone));
    }

    #[test]
    fn test_contact_serialization_omits_empty_optionals() {
        let contact = ContactDraft::new("Ann", "1112223333", "", "")
            .validate()
            .unwrap()
            .into_contact(ContactId::new(0));
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("\"name\":\"Ann\""));
        assert!(!json.contains("email"));
        assert!(!json.contains("address"));
    }
}
