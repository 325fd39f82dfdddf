//! Background engines.
//!
//! [`import::ImportEngine`] drives each project's staged status simulation
//! on its own spawned task, cancellable as a group at shutdown.

pub mod import;
