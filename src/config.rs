//! Startup Configuration
//!
//! The data source is fixed at build time through environment variables:
//! - `PARKFREE_SUPABASE_URL`, `PARKFREE_SUPABASE_KEY`: remote backend
//! - `PARKFREE_SOURCE`: optional override (`seed`, `local`, `remote`)

use parkfree_core::{LocationRepository, SourceConfig};

use crate::storage::BrowserStorage;

const SUPABASE_URL: Option<&str> = option_env!("PARKFREE_SUPABASE_URL");
const SUPABASE_KEY: Option<&str> = option_env!("PARKFREE_SUPABASE_KEY");
const SOURCE_MODE: Option<&str> = option_env!("PARKFREE_SOURCE");

/// Resolve the source and build the repository for this session
pub fn open_repository() -> LocationRepository {
    let storage = BrowserStorage::open();

    let config = SourceConfig::resolve(SUPABASE_URL, SUPABASE_KEY, SOURCE_MODE, storage.is_some())
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid source configuration, using seed data");
            SourceConfig::seed()
        });

    tracing::info!(source = config.kind.as_str(), "location source selected");
    LocationRepository::open(&config, storage)
}
