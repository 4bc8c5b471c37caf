//! Error types for contact book operations.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every variant is caller-recoverable; the shell renders them as notices and the
//! store is left untouched on any error path.

use crate::domain::{ContactId, ValidationError};
use thiserror::Error;

/// Errors that can occur when adding a contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact with the same name and phone already exists
    #[error("A contact named {name} with phone {phone} already exists")]
    Duplicate { name: String, phone: String },
}

/// Errors that can occur when updating a contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// The position does not refer to a stored contact
    #[error("No contact at position {position} (store holds {len})")]
    NoSelection { position: usize, len: usize },

    /// The id does not refer to a stored contact
    #[error("No contact with id {0}")]
    UnknownId(ContactId),

    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur when deleting a contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
    /// The position does not refer to a stored contact
    #[error("No contact at position {position} (store holds {len})")]
    NoSelection { position: usize, len: usize },

    /// The id does not refer to a stored contact
    #[error("No contact with id {0}")]
    UnknownId(ContactId),
}

/// Errors that can occur when searching contacts.
///
/// `EmptyQuery` is informational rather than a failure: the shell renders
/// it as a prompt to enter a search term. An empty result set is not an
/// error at all; search returns `Ok` with an empty vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query was empty after trimming
    #[error("Please enter a search term")]
    EmptyQuery,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddError
pub type AddResult<T> = Result<T, AddError>;

/// Convenience type alias for Results with UpdateError
pub type UpdateResult<T> = Result<T, UpdateError>;

/// Convenience type alias for Results with DeleteError
pub type DeleteResult<T> = Result<T, DeleteError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
