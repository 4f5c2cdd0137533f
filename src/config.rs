use crate::models::BROKER_PHONE;

pub const DEFAULT_CATALOG_URL: &str = "http://localhost:8000/properties?pages=1";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration.
///
/// Loaded from env vars:
/// - `CATALOG_API_URL`   (default: `http://localhost:8000/properties?pages=1`)
/// - `BROKER_PHONE`      (default: the broker's WhatsApp number)
/// - `GEMINI_API_KEY`    (falls back to `API_KEY`; optional)
/// - `GEMINI_MODEL`      (default: `gemini-2.5-flash`)
/// - `HTTP_TIMEOUT_SECS` (default: `30`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_url: String,
    pub broker_phone: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            broker_phone: BROKER_PHONE.to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            catalog_url: get("CATALOG_API_URL").unwrap_or(defaults.catalog_url),
            broker_phone: get("BROKER_PHONE").unwrap_or(defaults.broker_phone),
            gemini_api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            http_timeout_secs: get("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.http_timeout_secs),
        }
    }
}
