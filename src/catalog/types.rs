use serde::Deserialize;

/// Body returned by the listing service: `{ "count": n, "data": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub data: Vec<ApiListing>,
}

/// A listing as the listing service represents it.
/// Bedrooms and area are not part of it and get backfilled during mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiListing {
    pub title: String,
    pub price: f64,
    /// Free-form "Neighborhood, City" string
    pub location: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub ai_title: Option<String>,
    #[serde(default)]
    pub price_history: Option<Vec<ApiPricePoint>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPricePoint {
    pub date: String,
    pub price: f64,
}
