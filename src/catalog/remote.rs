use crate::catalog::mock::MOCK_IMAGES;
use crate::catalog::traits::CatalogSource;
use crate::catalog::types::{ApiListing, ApiResponse};
use crate::config::AppConfig;
use crate::models::{Listing, Location, PricePoint, PropertyKind};
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// City assumed for every listing the service returns
const DEFAULT_CITY: &str = "Salvador";
/// Neighborhood used when the service sends an empty location
const UNKNOWN_NEIGHBORHOOD: &str = "Localização Privilegiada";

/// Listing service client
pub struct RemoteCatalog {
    client: Client,
    url: String,
}

impl RemoteCatalog {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: config.catalog_url.clone(),
        })
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        debug!("Fetching URL: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to reach listing service")?;

        if !response.status().is_success() {
            warn!("Listing service returned status: {}", response.status());
            anyhow::bail!("Listing service error: {}", response.status());
        }

        let body: ApiResponse = response
            .json()
            .await
            .context("Unexpected listing service payload")?;

        info!("Listing service returned {} items", body.data.len());

        let listings = map_listings(body.data, &mut rand::thread_rng());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Listing service"
    }
}

/// Turn service items into complete listings, backfilling what the service lacks
pub fn map_listings<R: Rng>(items: Vec<ApiListing>, rng: &mut R) -> Vec<Listing> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| map_listing(index, item, rng))
        .collect()
}

fn map_listing<R: Rng>(index: usize, item: ApiListing, rng: &mut R) -> Listing {
    let id = item
        .link
        .filter(|link| !link.is_empty())
        .unwrap_or_else(|| format!("prop-{index}"));

    let neighborhood = item
        .location
        .split(',')
        .next()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNKNOWN_NEIGHBORHOOD)
        .to_string();

    let price_history = item
        .price_history
        .unwrap_or_default()
        .into_iter()
        .map(|p| PricePoint {
            period: p.date,
            price: p.price,
        })
        .collect();

    Listing {
        id,
        title: item.title,
        generated_title: item.ai_title,
        location: Location {
            city: DEFAULT_CITY.to_string(),
            neighborhood,
        },
        price: item.price,
        // The service has no bedroom or area data
        bedrooms: rng.gen_range(2..=4),
        area: f64::from(rng.gen_range(60u32..210)),
        image_url: MOCK_IMAGES[index % MOCK_IMAGES.len()].to_string(),
        kind: PropertyKind::Apartment,
        exclusive: false,
        tags: vec!["Premium".to_string(), "Vista Mar".to_string()],
        price_history,
    }
}
