//! Domain Layer
//!
//! Entities, the draft, and the error taxonomy.
//! No I/O happens here.

mod entity;
mod location;
mod draft;
pub mod error;

pub use entity::Entity;
pub use location::{Location, LocationId, NewLocation};
pub use draft::{Draft, DraftField};
pub use error::{AppendError, BackendError, ConfigError, FetchError, ValidationError};
