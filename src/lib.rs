//! Contact Book - an in-memory contact management engine.
//!
//! This library provides a validated CRUD and search core over an ordered
//! collection of contact records, together with a thin line-oriented shell
//! that drives it interactively. There is no persistence and no
//! networking; the store lives for the session and is lost on exit.
//!
//! # Architecture
//!
//! - **domain**: type-safe value objects (contact ids, phone numbers, email addresses)
//! - **models**: the Contact record and the raw-input draft it is built from
//! - **store**: the ordered collection, with duplicate enforcement
//! - **search**: case-insensitive substring filtering over name and phone
//! - **error**: operation error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **shell**: the interactive presentation layer

// Re-export commonly used types
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod search;
pub mod shell;
pub mod store;

pub use config::Config;
pub use domain::{ContactId, EmailAddress, PhoneNumber, ValidationError};
pub use error::{AddError, ConfigError, DeleteError, SearchError, UpdateError};
pub use models::{Contact, ContactDraft, ValidContact};
pub use search::search_contacts;
pub use shell::{Command, Session};
pub use store::ContactStore;
