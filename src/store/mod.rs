//! Contact storage.
//!
//! The store owns the ordered collection of contacts and enforces the
//! name/phone uniqueness rule. It is a plain owned value; whichever layer
//! drives the application holds it and hands out references.

pub mod contact_store;

pub use contact_store::ContactStore;
