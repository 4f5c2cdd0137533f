use serde::{Deserialize, Serialize};

pub mod neighborhoods;

pub use neighborhoods::{is_known_neighborhood, Neighborhood, NEIGHBORHOODS};

/// WhatsApp number of the responsible broker (country + area code, digits only)
pub const BROKER_PHONE: &str = "5571992392300";
pub const BROKER_NAME: &str = "Roberto Flaminio Vasconcelos";
pub const BROKER_CRECI: &str = "CRECI BA 30716";

/// Broker credit line shown in page footers and the CLI banner
pub fn broker_signature() -> String {
    format!("{BROKER_NAME} · {BROKER_CRECI}")
}

/// Kind of property being offered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Apartment,
    House,
    Penthouse,
}

/// Location information for a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub neighborhood: String,
}

/// A single point of a listing's price history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    /// Period label as shown on the chart axis ("Jan", "Mar", ...)
    pub period: String,
    pub price: f64,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Promotional title from the copywriter, shown instead of `title` when present
    pub generated_title: Option<String>,
    pub location: Location,
    /// Asking price in BRL
    pub price: f64,
    pub bedrooms: u32,
    /// Private area in m²
    pub area: f64,
    pub image_url: String,
    pub kind: PropertyKind,
    pub exclusive: bool,
    pub tags: Vec<String>,
    pub price_history: Vec<PricePoint>,
}

impl Listing {
    /// Title to render on cards. Display only, never used for classification.
    pub fn display_title(&self) -> &str {
        self.generated_title.as_deref().unwrap_or(&self.title)
    }

    pub fn neighborhood(&self) -> &str {
        &self.location.neighborhood
    }
}
