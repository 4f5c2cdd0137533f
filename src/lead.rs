use crate::error::{require, LeadError};
use crate::messaging::{format_brl, whatsapp_link, LinkOpener};
use crate::models::Listing;
use crate::tiering::{PriceTier, TierPresentation};
use tracing::info;
use url::Url;

/// The unlock dialog: closed, or open over one selected listing
#[derive(Debug, Default)]
pub struct LeadGate {
    selected: Option<Listing>,
}

impl LeadGate {
    pub fn open(&mut self, listing: Listing) {
        self.selected = Some(listing);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&Listing> {
        self.selected.as_ref()
    }

    /// Copy for the open dialog, picked by the selected listing's tier
    pub fn presentation(&self) -> Option<&'static TierPresentation> {
        self.selected
            .as_ref()
            .map(|listing| PriceTier::of(listing).presentation())
    }

    /// Build the broker message, hand the deep link to `opener` and close the dialog.
    /// Blank fields leave the dialog open.
    pub fn submit(
        &mut self,
        name: &str,
        phone: &str,
        broker_phone: &str,
        opener: &dyn LinkOpener,
    ) -> Result<Url, LeadError> {
        let listing = self.selected.as_ref().ok_or(LeadError::DialogClosed)?;
        require("name", name)?;
        require("phone", phone)?;

        let url = whatsapp_link(broker_phone, &unlock_message(listing, name.trim()))?;
        info!("Lead captured for listing {}", listing.id);

        opener.open(&url);
        self.close();
        Ok(url)
    }
}

pub fn unlock_message(listing: &Listing, name: &str) -> String {
    format!(
        "Olá, meu nome é {}. Gostaria de desbloquear as informações do imóvel: {} (Ref: {}) no bairro {}. Valor: {}",
        name,
        listing.title,
        listing.id,
        listing.neighborhood(),
        format_brl(listing.price)
    )
}
