//! Persistence module
//!
//! Layout snapshots handed to the external backend.

mod snapshot;

pub use snapshot::{BoardSnapshot, PersistedCard};
