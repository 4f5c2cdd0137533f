use anyhow::{Context, Result};
use tracing::info;
use url::Url;

/// Hands a built deep link over to whatever navigates to it (browser, app shell...)
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &Url);
}

/// Opener that only records the link in the logs
pub struct LogOpener;

impl LinkOpener for LogOpener {
    fn open(&self, url: &Url) {
        info!("📲 Opening WhatsApp: {}", url);
    }
}

/// `https://wa.me/<phone>?text=<message>` with the message url-encoded
pub fn whatsapp_link(phone: &str, message: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("https://wa.me/{phone}"))
        .with_context(|| format!("Invalid WhatsApp phone number: {phone}"))?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}

/// Format as Brazilian reais with cents: `R$ 1.234.567,89`
pub fn format_brl(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}R$\u{a0}{},{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Format as Brazilian reais without cents: `R$ 1.234.568`
pub fn format_brl_whole(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}R$\u{a0}{}", group_thousands(whole))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingOpener;
    use super::*;

    #[test]
    fn formats_reais_like_the_browser() {
        assert_eq!(format_brl(3_500_000.0), "R$\u{a0}3.500.000,00");
        assert_eq!(format_brl(420_000.5), "R$\u{a0}420.000,50");
        assert_eq!(format_brl(0.0), "R$\u{a0}0,00");
        assert_eq!(format_brl(999.999), "R$\u{a0}1.000,00");
        assert_eq!(format_brl(-12.3), "-R$\u{a0}12,30");
        assert_eq!(format_brl_whole(1_234_567.6), "R$\u{a0}1.234.568");
        assert_eq!(format_brl_whole(100.0), "R$\u{a0}100");
    }

    #[test]
    fn link_targets_broker_and_round_trips_message() {
        let message = "Olá, meu nome é Ana. Valor: R$\u{a0}420.000,00 & mais?";
        let url = whatsapp_link("5571992392300", message).unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/5571992392300");
        assert!(url.as_str().starts_with("https://wa.me/5571992392300?text="));

        let text: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(text, vec![("text".to_string(), message.to_string())]);
    }

    #[test]
    fn recording_opener_keeps_links() {
        let opener = RecordingOpener::default();
        let url = whatsapp_link("5571992392300", "oi").unwrap();
        opener.open(&url);
        opener.open(&url);
        assert_eq!(opener.opened().len(), 2);
    }
}
