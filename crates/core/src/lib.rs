//! Domain logic for the gitshelf backend.
//!
//! Pure types and rules shared by the db and api crates: the error taxonomy,
//! id/timestamp aliases, GitHub source-URL handling, the import status state
//! machine, and the book-request status model. No I/O lives here.

pub mod book;
pub mod error;
pub mod github;
pub mod import;
pub mod types;
