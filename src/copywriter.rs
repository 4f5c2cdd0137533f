use crate::config::AppConfig;
use crate::models::{Listing, PropertyKind};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Blurb shown when no model is configured
const NO_MARKET_DATA: &str = "Dados de mercado indisponíveis no momento.";
/// Blurb shown when the model call fails
const GENERIC_MARKET_BLURB: &str = "Região com alto potencial de valorização.";

/// Promotional text generation. Cosmetic only: implementations never fail.
#[async_trait]
pub trait Copywriter: Send + Sync {
    /// Short promotional title for a listing
    async fn title(&self, listing: &Listing) -> String;

    /// One-sentence market pitch for a neighborhood
    async fn market_blurb(&self, neighborhood: &str) -> String;

    fn name(&self) -> &'static str;
}

/// Pick the copywriter once at startup, depending on whether a credential exists
pub fn select_copywriter(config: &AppConfig) -> Box<dyn Copywriter> {
    match &config.gemini_api_key {
        Some(key) => {
            match GeminiCopywriter::new(key, &config.gemini_model, config.http_timeout_secs) {
                Ok(gemini) => {
                    info!("Copywriter: Gemini ({})", config.gemini_model);
                    Box::new(gemini)
                }
                Err(e) => {
                    warn!("Could not set up Gemini, using fixed copy: {:#}", e);
                    Box::new(FallbackCopywriter)
                }
            }
        }
        None => {
            warn!("Gemini API key not found. AI features will return fixed copy.");
            Box::new(FallbackCopywriter)
        }
    }
}

/// Deterministic copy used without a model
pub struct FallbackCopywriter;

#[async_trait]
impl Copywriter for FallbackCopywriter {
    async fn title(&self, listing: &Listing) -> String {
        format!("Oportunidade Exclusiva em {}", listing.neighborhood())
    }

    async fn market_blurb(&self, _neighborhood: &str) -> String {
        NO_MARKET_DATA.to_string()
    }

    fn name(&self) -> &'static str {
        "Fallback"
    }
}

/// Copywriter backed by the Gemini `generateContent` API
pub struct GeminiCopywriter {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiCopywriter {
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: GEMINI_BASE_URL.to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn generate(&self, prompt: String) -> Result<String> {
        let endpoint = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response: GenerateResponse = self
            .client
            .post(&endpoint)
            .query(&[("key", &self.api_key)])
            .json(&request)
            .send()
            .await
            .with_context(|| format!("POST {endpoint} failed"))?
            .error_for_status()
            .with_context(|| format!("POST {endpoint} returned non-success status"))?
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {endpoint}"))?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("Gemini response had no text"))?;

        Ok(text)
    }
}

#[async_trait]
impl Copywriter for GeminiCopywriter {
    async fn title(&self, listing: &Listing) -> String {
        match self.generate(title_prompt(listing)).await {
            Ok(title) => title,
            Err(e) => {
                warn!("Error generating title with Gemini: {:#}", e);
                listing.title.clone()
            }
        }
    }

    async fn market_blurb(&self, neighborhood: &str) -> String {
        let prompt = format!(
            "Forneça uma breve análise de mercado (uma frase de impacto) sobre a valorização imobiliária no bairro {neighborhood} na Bahia para investidores."
        );
        match self.generate(prompt).await {
            Ok(blurb) => blurb,
            Err(e) => {
                warn!("Error generating market blurb with Gemini: {:#}", e);
                GENERIC_MARKET_BLURB.to_string()
            }
        }
    }

    fn name(&self) -> &'static str {
        "Gemini"
    }
}

fn title_prompt(listing: &Listing) -> String {
    let kind = match listing.kind {
        PropertyKind::Apartment => "apartment",
        PropertyKind::House => "house",
        PropertyKind::Penthouse => "penthouse",
    };

    format!(
        "Atue como um copywriter imobiliário de luxo.\n\
         Crie um título curto (máximo 45 caracteres), atraente e sofisticado para um imóvel com as seguintes características:\n\
         Tipo: {}\n\
         Bairro: {}, {}\n\
         Preço: R$ {}\n\
         Quartos: {}\n\
         Destaques: {}\n\n\
         Retorne APENAS o texto do título, sem aspas.",
        kind,
        listing.location.neighborhood,
        listing.location.city,
        listing.price,
        listing.bedrooms,
        listing.tags.join(", ")
    )
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
