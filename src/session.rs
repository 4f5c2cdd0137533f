use crate::catalog::{load_catalog, CatalogOrigin, CatalogSource};
use crate::filters::{apply_filters, FilterCriteria};
use crate::lead::LeadGate;
use crate::models::Listing;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Marketplace,
    Valuation,
}

/// State owned by the top-level controller for one visitor session
#[derive(Debug)]
pub struct Session {
    catalog: Vec<Listing>,
    origin: Option<CatalogOrigin>,
    loading: bool,
    criteria: FilterCriteria,
    lead_gate: LeadGate,
    active_tab: Tab,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session: empty catalog, load pending, default criteria
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            origin: None,
            loading: true,
            criteria: FilterCriteria::default(),
            lead_gate: LeadGate::default(),
            active_tab: Tab::Marketplace,
        }
    }

    /// Resolve the catalog. Always ends with a non-empty catalog and `loading == false`.
    /// Resolves once per session: later calls leave the catalog and flag untouched.
    pub async fn load(&mut self, source: &dyn CatalogSource) {
        if self.origin.is_some() {
            debug!("Catalog already resolved, skipping {}", source.source_name());
            return;
        }

        let catalog = load_catalog(source).await;
        self.catalog = catalog.listings;
        self.origin = Some(catalog.origin);
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn catalog(&self) -> &[Listing] {
        &self.catalog
    }

    pub fn origin(&self) -> Option<CatalogOrigin> {
        self.origin
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    /// Listings to render for the current criteria
    pub fn visible_listings(&self) -> Vec<Listing> {
        let visible = apply_filters(&self.catalog, &self.criteria);
        debug!("{} of {} listings match", visible.len(), self.catalog.len());
        visible
    }

    /// Number of matches shown under the filter panel
    pub fn match_count(&self) -> usize {
        self.catalog.iter().filter(|l| self.criteria.matches(l)).count()
    }

    /// Open the unlock dialog for a catalog listing. Returns false for unknown ids.
    pub fn unlock(&mut self, listing_id: &str) -> bool {
        match self.catalog.iter().find(|l| l.id == listing_id) {
            Some(listing) => {
                self.lead_gate.open(listing.clone());
                true
            }
            None => false,
        }
    }

    pub fn lead_gate(&self) -> &LeadGate {
        &self.lead_gate
    }

    pub fn lead_gate_mut(&mut self) -> &mut LeadGate {
        &mut self.lead_gate
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_listings;
    use crate::catalog::testing::StubSource;
    use crate::filters::{BedroomFilter, InvestmentProfile};
    use crate::messaging::testing::RecordingOpener;
    use crate::models::BROKER_PHONE;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails like an unreachable backend and counts calls
    struct UnreachableSource(AtomicUsize);

    #[async_trait]
    impl CatalogSource for UnreachableSource {
        async fn fetch(&self) -> Result<Vec<Listing>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("backend offline")
        }

        fn source_name(&self) -> &'static str {
            "Unreachable"
        }
    }

    #[tokio::test]
    async fn rejected_fetch_ends_with_mock_catalog() {
        let mut session = Session::new();
        assert!(session.is_loading());
        assert!(session.catalog().is_empty());

        let source = UnreachableSource(AtomicUsize::new(0));
        session.load(&source).await;

        assert!(!session.is_loading());
        assert_eq!(source.0.load(Ordering::SeqCst), 1);
        assert_eq!(session.catalog(), mock_listings().as_slice());
        assert_eq!(session.origin(), Some(CatalogOrigin::Fallback));
    }

    #[tokio::test]
    async fn loading_resolves_exactly_once() {
        let mut session = Session::new();
        let source = UnreachableSource(AtomicUsize::new(0));
        let mut transitions = Vec::new();

        for _ in 0..3 {
            let before = session.is_loading();
            session.load(&source).await;
            let after = session.is_loading();
            if before != after {
                transitions.push((before, after));
            }
        }

        assert_eq!(transitions, [(true, false)]);
        assert_eq!(source.0.load(Ordering::SeqCst), 1);

        let remote = vec![crate::models::fixtures::listing("r", "Barra", 1.0, 1)];
        session.load(&StubSource(Some(remote))).await;
        assert_eq!(session.catalog(), mock_listings().as_slice());
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn default_criteria_show_everything() {
        let mut session = Session::new();
        session.load(&StubSource(None)).await;

        let visible = session.visible_listings();
        assert_eq!(visible.len(), 8);
        assert_eq!(visible, session.catalog());
        assert_eq!(session.match_count(), 8);
    }

    #[tokio::test]
    async fn clearing_filters_restores_full_catalog() {
        let mut session = Session::new();
        session.load(&StubSource(None)).await;

        let criteria = session.criteria_mut();
        criteria.select_profile(InvestmentProfile::Luxury);
        criteria.toggle_bedrooms(BedroomFilter::Exactly(4));
        assert_eq!(session.match_count(), 2);

        session.criteria_mut().clear();
        assert_eq!(session.criteria(), &FilterCriteria::default());
        assert_eq!(session.visible_listings(), session.catalog());
    }

    #[tokio::test]
    async fn unlock_flow_goes_through_lead_gate() {
        let mut session = Session::new();
        session.load(&StubSource(None)).await;

        assert!(!session.unlock("missing"));
        assert!(session.unlock("7"));
        assert_eq!(session.lead_gate().selected().map(|l| l.price), Some(280_000.0));

        let opener = RecordingOpener::default();
        session
            .lead_gate_mut()
            .submit("Ana", "71 90000-0000", BROKER_PHONE, &opener)
            .unwrap();
        assert!(!session.lead_gate().is_open());
        assert_eq!(opener.opened().len(), 1);
    }

    #[test]
    fn tabs_switch() {
        let mut session = Session::default();
        assert_eq!(session.active_tab(), Tab::Marketplace);
        session.set_tab(Tab::Valuation);
        assert_eq!(session.active_tab(), Tab::Valuation);
    }
}
