use crate::models::Listing;
use serde::{Deserialize, Serialize};

/// Lowest and highest ceiling the price slider offers
pub const SLIDER_MIN: f64 = 150_000.0;
pub const SLIDER_MAX: f64 = 5_000_000.0;

/// Named price-range presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentProfile {
    #[default]
    All,
    Economic,
    Standard,
    Luxury,
    UltraLuxury,
}

impl InvestmentProfile {
    /// Inclusive price bracket the preset selects
    pub fn price_range(self) -> (f64, f64) {
        match self {
            InvestmentProfile::All => (0.0, 5_000_000.0),
            InvestmentProfile::Economic => (0.0, 350_000.0),
            InvestmentProfile::Standard => (350_000.0, 900_000.0),
            InvestmentProfile::Luxury => (900_000.0, 2_500_000.0),
            InvestmentProfile::UltraLuxury => (2_500_000.0, 15_000_000.0),
        }
    }
}

/// Bedroom constraint. The "5+" button matches five or more.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BedroomFilter {
    #[default]
    Any,
    Exactly(u32),
    FivePlus,
}

impl BedroomFilter {
    /// Filter selected by the bedroom button labelled `n` (5 means "5+")
    pub fn from_button(n: u32) -> Self {
        match n {
            0 => BedroomFilter::Any,
            1..=4 => BedroomFilter::Exactly(n),
            _ => BedroomFilter::FivePlus,
        }
    }

    pub fn matches(self, bedrooms: u32) -> bool {
        match self {
            BedroomFilter::Any => true,
            BedroomFilter::Exactly(n) => bedrooms == n,
            BedroomFilter::FivePlus => bedrooms >= 5,
        }
    }
}

/// User-selected filter state. Lives for one session only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive [min, max] price bounds
    pub price_range: (f64, f64),
    /// Empty means no neighborhood restriction
    pub neighborhoods: Vec<String>,
    pub profile: InvestmentProfile,
    pub bedrooms: BedroomFilter,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: InvestmentProfile::All.price_range(),
            neighborhoods: Vec::new(),
            profile: InvestmentProfile::All,
            bedrooms: BedroomFilter::Any,
        }
    }
}

impl FilterCriteria {
    pub fn select_profile(&mut self, profile: InvestmentProfile) {
        self.profile = profile;
        self.price_range = profile.price_range();
    }

    /// Move the price ceiling by hand. Any preset stops applying.
    pub fn set_max_price(&mut self, max: f64) {
        let (min, _) = self.price_range;
        let max = max.clamp(SLIDER_MIN, SLIDER_MAX).max(min);
        self.price_range = (min, max);
        self.profile = InvestmentProfile::All;
    }

    pub fn toggle_neighborhood(&mut self, name: &str) {
        if let Some(pos) = self.neighborhoods.iter().position(|n| n == name) {
            self.neighborhoods.remove(pos);
        } else {
            self.neighborhoods.push(name.to_string());
        }
    }

    /// Select `choice`, or clear the constraint if it is already selected
    pub fn toggle_bedrooms(&mut self, choice: BedroomFilter) {
        self.bedrooms = if self.bedrooms == choice {
            BedroomFilter::Any
        } else {
            choice
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether anything differs from the session-start criteria
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let (min, max) = self.price_range;
        let matches_price = listing.price >= min && listing.price <= max;
        let matches_neighborhood = self.neighborhoods.is_empty()
            || self.neighborhoods.iter().any(|n| n == listing.neighborhood());

        matches_price && matches_neighborhood && self.bedrooms.matches(listing.bedrooms)
    }
}

/// Listings satisfying every criterion, in catalog order
pub fn apply_filters(catalog: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    catalog
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}
