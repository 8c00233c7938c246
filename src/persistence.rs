//! Durable model storage.
//!
//! [`snapshot`] converts a model to and from its JSON form and validates what
//! it reads. [`file`] adds atomic whole-file replacement on top.

pub mod file;
pub mod snapshot;

pub use file::{DEFAULT_MODEL_PATH, resolve_model_path};
pub use snapshot::{DecodedSnapshot, PersistedCategory, PersistedModel, SNAPSHOT_VERSION};
