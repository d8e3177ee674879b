//! Repository Layer
//!
//! `LocationRepository` is the single entry point for location I/O.
//! It validates drafts, then delegates to whichever source was configured.

mod traits;
mod id_clock;
mod validation;
mod seed;
mod local;
mod remote;
mod config;


use std::rc::Rc;

pub use traits::{KeyValueStore, LocationSource, RemoteBackend};
pub use validation::validate;
pub use seed::{seed_locations, SeedSource};
pub use local::{LocalSource, STORAGE_KEY};
pub use remote::{RemoteSettings, RemoteSource, RestBackend};
pub use config::{SourceConfig, SourceKind};

use crate::domain::{AppendError, Draft, FetchError, Location};

/// Validating front for one `LocationSource`. Cheap to clone.
#[derive(Clone)]
pub struct LocationRepository {
    source: Rc<dyn LocationSource>,
}

impl LocationRepository {
    pub fn new(source: impl LocationSource + 'static) -> Self {
        Self { source: Rc::new(source) }
    }

    /// Build the configured source. `store` is only used by the local variant.
    pub fn open<S: KeyValueStore + 'static>(config: &SourceConfig, store: Option<S>) -> Self {
        match (config.kind, &config.remote, store) {
            (SourceKind::Remote, Some(settings), _) => {
                Self::new(RemoteSource::new(RestBackend::new(settings.clone())))
            }
            (SourceKind::Local, _, Some(store)) => Self::new(LocalSource::new(store)),
            (kind, _, _) => {
                if kind != SourceKind::Seed {
                    tracing::warn!(requested = kind.as_str(), "source prerequisites missing, using seed data");
                }
                Self::new(SeedSource::new())
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        self.source.kind()
    }

    /// Load the full list. Failures are returned as-is, never replaced by seeds.
    pub async fn load(&self) -> Result<Vec<Location>, FetchError> {
        match self.source.load().await {
            Ok(records) => {
                tracing::info!(source = self.kind(), count = records.len(), "locations loaded");
                Ok(records)
            }
            Err(e) => {
                tracing::warn!(source = self.kind(), error = %e, "location load failed");
                Err(e)
            }
        }
    }

    /// Validate the draft and store it. Nothing reaches the source unless
    /// every field is usable.
    pub async fn append(&self, draft: &Draft) -> Result<Location, AppendError> {
        let candidate = validate(draft).map_err(|e| {
            tracing::debug!(field = e.field().as_str(), error = %e, "draft rejected");
            e
        })?;

        let location = self.source.append(candidate).await.map_err(|e| {
            tracing::warn!(source = self.kind(), error = %e, "append failed");
            e
        })?;
        tracing::info!(source = self.kind(), id = %location.id, "location added");
        Ok(location)
    }
}
