//! Interactive presentation shell.
//!
//! A line-oriented front end over the contact store: one command per
//! button of the original form, a rendered table instead of a tree view,
//! and single-line notices instead of dialog boxes. The shell owns the
//! selection and the active filter view; the store knows nothing about
//! either.

pub mod command;
pub mod session;
pub mod table;

pub use command::Command;
pub use session::Session;
