use crate::models::Listing;
use serde::Serialize;

/// Lowest price of the luxury tier in the unlock dialog
pub const LUXURY_TIER_MIN: f64 = 1_500_000.0;
/// Highest price of the economy tier in the unlock dialog
pub const ECONOMY_TIER_MAX: f64 = 500_000.0;
/// Lowest price at which a listing card gets the luxury call to action.
/// Kept apart from `LUXURY_TIER_MIN`, the two are tuned independently.
pub const LUXURY_CARD_MIN: f64 = 1_500_000.0;

/// Price-derived classification driving the unlock dialog copy
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Luxury,
    Economy,
    Standard,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Gold,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ShieldCheck,
    Unlock,
    MessageCircle,
}

/// Copy and styling of the unlock dialog for one tier
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TierPresentation {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub cta_label: &'static str,
    pub accent: Accent,
    pub icon: Icon,
}

static LUXURY: TierPresentation = TierPresentation {
    heading: "Acesso Private",
    subtitle: "Este imóvel faz parte da nossa coleção exclusiva. Desbloqueie detalhes confidencias e planta baixa.",
    cta_label: "Solicitar Acesso VIP",
    accent: Accent::Gold,
    icon: Icon::ShieldCheck,
};

static ECONOMY: TierPresentation = TierPresentation {
    heading: "Oportunidade Única",
    subtitle: "Verifique as condições especiais de financiamento e valor final negociável para esta unidade.",
    cta_label: "Ver Parcelas e Descontos",
    accent: Accent::Green,
    icon: Icon::Unlock,
};

static STANDARD: TierPresentation = TierPresentation {
    heading: "Desbloquear Detalhes",
    subtitle: "Fale diretamente com o corretor responsável para agendar uma visita ou receber o vídeo tour.",
    cta_label: "Falar com Corretor",
    accent: Accent::Blue,
    icon: Icon::MessageCircle,
};

impl PriceTier {
    pub fn classify(price: f64) -> Self {
        if price >= LUXURY_TIER_MIN {
            PriceTier::Luxury
        } else if price <= ECONOMY_TIER_MAX {
            PriceTier::Economy
        } else {
            PriceTier::Standard
        }
    }

    pub fn of(listing: &Listing) -> Self {
        Self::classify(listing.price)
    }

    pub fn presentation(self) -> &'static TierPresentation {
        match self {
            PriceTier::Luxury => &LUXURY,
            PriceTier::Economy => &ECONOMY,
            PriceTier::Standard => &STANDARD,
        }
    }
}

/// Whether the listing card uses the luxury call to action
pub fn is_luxury_card(listing: &Listing) -> bool {
    listing.price >= LUXURY_CARD_MIN
}

pub fn card_cta_label(listing: &Listing) -> &'static str {
    if is_luxury_card(listing) {
        "Solicitar Acesso"
    } else {
        "Desbloquear Detalhes"
    }
}
