use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can populate the catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the current listings from the source
    async fn fetch(&self) -> Result<Vec<Listing>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
