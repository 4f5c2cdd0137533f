use imovel_scout::catalog::RemoteCatalog;
use imovel_scout::config::AppConfig;
use imovel_scout::copywriter::select_copywriter;
use imovel_scout::filters::{BedroomFilter, InvestmentProfile};
use imovel_scout::messaging::{format_brl, format_brl_whole, LogOpener};
use imovel_scout::models::broker_signature;
use imovel_scout::session::{Session, Tab};
use imovel_scout::tiering::{card_cta_label, PriceTier};
use imovel_scout::valuation::{BedroomBracket, ValuationWizard};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Imóvel Scout - Salvador marketplace");
    info!("======================================");
    info!("Corretor: {}", broker_signature());

    let config = AppConfig::from_env();
    let copywriter = select_copywriter(&config);
    let source = RemoteCatalog::new(&config)?;

    let mut session = Session::new();
    session.load(&source).await;
    info!("Catalog ready: {} listings ({:?})", session.catalog().len(), session.origin());

    // Browse: luxury preset, four bedrooms
    session.criteria_mut().select_profile(InvestmentProfile::Luxury);
    session.criteria_mut().toggle_bedrooms(BedroomFilter::Exactly(4));
    let visible = session.visible_listings();
    info!("{} listings match the current filters", visible.len());

    for (i, listing) in visible.iter().enumerate() {
        let title = if listing.generated_title.is_none() {
            copywriter.title(listing).await
        } else {
            listing.display_title().to_string()
        };
        println!("{}. {} ({})", i + 1, title, format_brl_whole(listing.price));
        println!("   {} quartos, {} m²", listing.bedrooms, listing.area);
        println!("   {}, {}", listing.location.neighborhood, listing.location.city);
        println!("   Tier: {:?} · {}", PriceTier::of(listing), card_cta_label(listing));
        println!("   {}", copywriter.market_blurb(listing.neighborhood()).await);
        println!();
    }

    // Unlock the first match
    if let Some(first) = visible.first() {
        session.unlock(&first.id);
        if let Some(presentation) = session.lead_gate().presentation() {
            info!("Unlock dialog: {} / {}", presentation.heading, presentation.cta_label);
        }
        let url = session
            .lead_gate_mut()
            .submit("Visitante", "71 90000-0000", &config.broker_phone, &LogOpener)?;
        info!("Lead link: {}", url);
    }

    session.criteria_mut().clear();

    // Appraisal
    session.set_tab(Tab::Valuation);
    let mut wizard = ValuationWizard::from_entropy();
    wizard.set_neighborhood("Pituba");
    wizard.set_area("120");
    wizard.set_bedrooms(BedroomBracket::Three);
    let result = wizard.calculate();
    info!("Estimated value: {}", format_brl(result.estimate));

    wizard.set_phone("71 90000-0000");
    wizard.unlock(&config.broker_phone, &LogOpener)?;

    // Save the catalog snapshot
    let json = serde_json::to_string_pretty(session.catalog())?;
    tokio::fs::write("catalog_snapshot.json", json).await?;
    info!("💾 Saved catalog to catalog_snapshot.json");

    Ok(())
}
