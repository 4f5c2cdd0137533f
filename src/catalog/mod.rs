pub mod mock;
pub mod remote;
pub mod traits;
pub mod types;

pub use mock::{mock_listings, MockCatalog};
pub use remote::RemoteCatalog;
pub use traits::CatalogSource;

use crate::models::Listing;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Where the listings of a loaded catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Remote,
    Fallback,
}

/// A resolved catalog snapshot
#[derive(Debug, Clone)]
pub struct Catalog {
    pub listings: Vec<Listing>,
    pub origin: CatalogOrigin,
    pub loaded_at: DateTime<Utc>,
}

/// Resolve the catalog from `source`, falling back to the built-in mock set
/// on any error or when the source returns nothing. Never fails.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    info!("Loading catalog from {}", source.source_name());

    let (listings, origin) = match source.fetch().await {
        Ok(listings) if !listings.is_empty() => {
            info!("✅ Loaded {} listings from {}", listings.len(), source.source_name());
            (listings, CatalogOrigin::Remote)
        }
        Ok(_) => {
            warn!("{} returned no listings, using mock data", source.source_name());
            (mock_listings(), CatalogOrigin::Fallback)
        }
        Err(e) => {
            warn!("{} unavailable, using mock data: {:#}", source.source_name(), e);
            (mock_listings(), CatalogOrigin::Fallback)
        }
    };

    Catalog {
        listings,
        origin,
        loaded_at: Utc::now(),
    }
}
