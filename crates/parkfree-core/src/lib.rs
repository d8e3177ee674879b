//! ParkFree Core
//!
//! Location-state synchronization engine:
//! - domain: Location, Draft, error taxonomy
//! - repository: seed / local / remote sources behind one validating front
//! - filter: search-term filtering
//! - capture: map clicks into draft coordinates
//! - view: list entries and markers from the filtered view
//! - session: the state object tying it together

pub mod domain;
pub mod repository;
pub mod filter;
pub mod capture;
pub mod view;
pub mod session;

pub use domain::{
    AppendError, BackendError, ConfigError, Draft, DraftField, FetchError, Location, LocationId,
    NewLocation, ValidationError,
};
pub use repository::{LocationRepository, LocationSource, SourceConfig, SourceKind};
pub use session::{LoadState, Session, SubmitState};
pub use view::{ComposedView, ListEntry, Marker, Popup};
