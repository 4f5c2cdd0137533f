use crate::catalog::traits::CatalogSource;
use crate::models::{Listing, Location, PricePoint, PropertyKind};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Fixed built-in dataset used whenever the listing service is unusable
pub struct MockCatalog;

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        Ok(mock_listings())
    }

    fn source_name(&self) -> &'static str {
        "Mock"
    }
}

/// Image URLs of the mock dataset, in id order. Remote listings cycle through them.
pub const MOCK_IMAGES: [&str; 8] = [
    "https://images.unsplash.com/photo-1512918760532-3ed00af80147?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1600596542815-2495db9dc2c3?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1499793983690-e29da59ef1c2?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1484154218962-a1c002085d2f?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&w=800&q=80",
];

/// Four-point trailing history ending at the current price
fn enhanced_history(price: f64) -> Vec<PricePoint> {
    [("Jan", 0.92), ("Mar", 0.95), ("Mai", 0.98), ("Jul", 1.0)]
        .iter()
        .map(|(period, factor)| PricePoint {
            period: period.to_string(),
            price: price * factor,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn mock(
    id: &str,
    title: &str,
    city: &str,
    neighborhood: &str,
    price: f64,
    bedrooms: u32,
    area: f64,
    kind: PropertyKind,
    exclusive: bool,
    tags: &[&str],
) -> Listing {
    let image_index = id.parse::<usize>().map(|i| i - 1).unwrap_or(0) % MOCK_IMAGES.len();

    Listing {
        id: id.to_string(),
        title: title.to_string(),
        generated_title: None,
        location: Location {
            city: city.to_string(),
            neighborhood: neighborhood.to_string(),
        },
        price,
        bedrooms,
        area,
        image_url: MOCK_IMAGES[image_index].to_string(),
        kind,
        exclusive,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        price_history: enhanced_history(price),
    }
}

/// The eight fixed listings of the fallback catalog
pub fn mock_listings() -> Vec<Listing> {
    info!("📋 Using built-in mock catalog");

    vec![
        mock(
            "1",
            "Apartamento Alto Padrão com Vista Mar",
            "Salvador",
            "Vitória",
            3_500_000.0,
            4,
            280.0,
            PropertyKind::Apartment,
            true,
            &["Vista Mar", "Alto Padrão", "Pier"],
        ),
        mock(
            "2",
            "Studio Compacto perto da Praia",
            "Salvador",
            "Barra",
            420_000.0,
            1,
            45.0,
            PropertyKind::Apartment,
            false,
            &["Investimento", "Airbnb"],
        ),
        mock(
            "3",
            "Casa em Condomínio Fechado",
            "Lauro de Freitas",
            "Alphaville Litoral Norte",
            1_850_000.0,
            4,
            350.0,
            PropertyKind::House,
            false,
            &["Condomínio", "Segurança"],
        ),
        mock(
            "4",
            "3/4 com Dependência Completa",
            "Salvador",
            "Pituba",
            680_000.0,
            3,
            110.0,
            PropertyKind::Apartment,
            false,
            &["Nascente", "Ventilado"],
        ),
        mock(
            "5",
            "Cobertura Duplex Luxuosa",
            "Salvador",
            "Horto Florestal",
            4_200_000.0,
            5,
            500.0,
            PropertyKind::Penthouse,
            true,
            &["Exclusivo", "Piscina Privativa"],
        ),
        mock(
            "6",
            "Village Pé na Areia",
            "Mata de São João",
            "Praia do Forte",
            1_200_000.0,
            2,
            90.0,
            PropertyKind::House,
            false,
            &["Veraneio", "Lazer"],
        ),
        mock(
            "7",
            "Oportunidade MCMV",
            "Lauro de Freitas",
            "Buraquinho",
            280_000.0,
            2,
            55.0,
            PropertyKind::Apartment,
            false,
            &["Primeiro Imóvel", "Financiável"],
        ),
        mock(
            "8",
            "Mansão Suspensa",
            "Salvador",
            "Caminho das Árvores",
            2_200_000.0,
            4,
            210.0,
            PropertyKind::Apartment,
            false,
            &["Novo", "Infraestrutura Completa"],
        ),
    ]
}
