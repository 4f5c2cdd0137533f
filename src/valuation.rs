use crate::error::{require, LeadError};
use crate::messaging::{format_brl, whatsapp_link, LinkOpener};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::{debug, info};
use url::Url;

/// Average price per m² used by the estimate, regardless of location
pub const PRICE_PER_SQM: f64 = 8_500.0;
/// Multiplier range applied to every estimate
pub const JITTER: Range<f64> = 0.9..1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BedroomBracket {
    #[default]
    One,
    Two,
    Three,
    FourPlus,
}

/// What the owner typed into the appraisal form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuationRequest {
    pub neighborhood: String,
    /// Raw text of the area field
    pub area_input: String,
    pub bedrooms: BedroomBracket,
}

impl ValuationRequest {
    /// Area in m², read like an integer form field: optional `+`, then leading digits.
    /// Anything unparsable or negative counts as 0, oversized values saturate.
    pub fn area(&self) -> u64 {
        let input = self.area_input.trim();
        let input = input.strip_prefix('+').unwrap_or(input);
        input
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .filter_map(|c| c.to_digit(10))
            .fold(0u64, |area, digit| {
                area.saturating_mul(10).saturating_add(u64::from(digit))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationResult {
    pub estimate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardStep {
    Input,
    Result(ValuationResult),
}

/// Two-step "appraise my property" flow
pub struct ValuationWizard<R> {
    rng: R,
    request: ValuationRequest,
    step: WizardStep,
    phone: String,
}

impl ValuationWizard<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ValuationWizard<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            request: ValuationRequest::default(),
            step: WizardStep::Input,
            phone: String::new(),
        }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn request(&self) -> &ValuationRequest {
        &self.request
    }

    pub fn result(&self) -> Option<ValuationResult> {
        match self.step {
            WizardStep::Result(result) => Some(result),
            WizardStep::Input => None,
        }
    }

    pub fn set_neighborhood(&mut self, neighborhood: &str) {
        self.request.neighborhood = neighborhood.to_string();
    }

    pub fn set_area(&mut self, area_input: &str) {
        self.request.area_input = area_input.to_string();
    }

    pub fn set_bedrooms(&mut self, bedrooms: BedroomBracket) {
        self.request.bedrooms = bedrooms;
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_string();
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Compute the estimate and move to the result step.
    /// Neighborhood and bedrooms do not influence the figure.
    pub fn calculate(&mut self) -> ValuationResult {
        let area = self.request.area();
        let jitter = self.rng.gen_range(JITTER);
        let result = ValuationResult {
            estimate: area as f64 * PRICE_PER_SQM * jitter,
        };

        debug!("Estimated {} m² at {:.0} (jitter {:.3})", area, result.estimate, jitter);
        self.step = WizardStep::Result(result);
        result
    }

    /// Return to the form. The estimate is dropped, typed values and phone stay.
    pub fn back(&mut self) {
        self.step = WizardStep::Input;
    }

    /// Forget everything typed so far
    pub fn reset(&mut self) {
        self.request = ValuationRequest::default();
        self.phone.clear();
        self.step = WizardStep::Input;
    }

    /// Send the estimate to the broker. Can be repeated while on the result step.
    pub fn unlock(
        &self,
        broker_phone: &str,
        opener: &dyn LinkOpener,
    ) -> Result<Url, LeadError> {
        let result = self.result().ok_or(LeadError::NoEstimate)?;
        require("phone", &self.phone)?;

        let url = whatsapp_link(broker_phone, &appraisal_message(&self.request, result))?;
        info!("Appraisal lead captured for {}", self.request.neighborhood);

        opener.open(&url);
        Ok(url)
    }
}

pub fn appraisal_message(request: &ValuationRequest, result: ValuationResult) -> String {
    format!(
        "Olá, solicito a avaliação detalhada do meu imóvel em {} ({}m²). Valor estimado preliminar: {}",
        request.neighborhood,
        request.area(),
        format_brl(result.estimate)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::testing::RecordingOpener;
    use crate::models::BROKER_PHONE;

    fn wizard(seed: u64) -> ValuationWizard<StdRng> {
        ValuationWizard::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn area_parsing_coerces_bad_input_to_zero() {
        let mut request = ValuationRequest::default();
        let cases = [
            ("120", 120),
            (" 85 ", 85),
            ("12.7", 12),
            ("90m2", 90),
            ("+40", 40),
            ("99999999999999999999", u64::MAX),
            ("", 0),
            ("abc", 0),
            ("-40", 0),
            ("+", 0),
        ];
        for (input, expected) in cases {
            request.area_input = input.to_string();
            assert_eq!(request.area(), expected, "input {input:?}");
        }
    }

    #[test]
    fn zero_area_estimates_zero() {
        let mut w = wizard(1);
        w.set_area("não sei");
        assert_eq!(w.calculate().estimate, 0.0);
        assert!(matches!(w.step(), WizardStep::Result(_)));
    }

    #[test]
    fn estimate_stays_within_jitter_bounds() {
        for seed in 0..500 {
            let mut w = wizard(seed);
            w.set_area("100");
            let estimate = w.calculate().estimate;
            assert!(estimate > 0.0);
            assert!(estimate >= 100.0 * PRICE_PER_SQM * 0.9);
            assert!(estimate <= 100.0 * PRICE_PER_SQM * 1.1);
        }
    }

    #[test]
    fn oversized_area_still_estimates_positive() {
        let mut w = wizard(11);
        w.set_area("99999999999999999999");
        let estimate = w.calculate().estimate;
        assert!(estimate > 0.0);
        assert!(estimate.is_finite());
    }

    #[test]
    fn same_seed_gives_same_estimate() {
        let mut a = wizard(99);
        let mut b = wizard(99);
        a.set_area("75");
        b.set_area("75");
        assert_eq!(a.calculate(), b.calculate());
    }

    #[test]
    fn location_and_bedrooms_do_not_move_the_estimate() {
        let mut a = wizard(5);
        a.set_area("200");
        a.set_neighborhood("Barra");
        a.set_bedrooms(BedroomBracket::One);

        let mut b = wizard(5);
        b.set_area("200");
        b.set_neighborhood("Praia do Forte");
        b.set_bedrooms(BedroomBracket::FourPlus);

        assert_eq!(a.calculate(), b.calculate());
    }

    #[test]
    fn back_drops_estimate_and_keeps_phone() {
        let mut w = wizard(3);
        w.set_area("60");
        w.calculate();
        w.set_phone("71 98888-7777");
        w.back();

        assert_eq!(w.step(), &WizardStep::Input);
        assert!(w.result().is_none());
        assert_eq!(w.phone(), "71 98888-7777");
        assert_eq!(w.request().area_input, "60");

        w.reset();
        assert_eq!(w.request(), &ValuationRequest::default());
        assert_eq!(w.phone(), "");
    }

    #[test]
    fn unlock_requires_estimate_and_phone() {
        let opener = RecordingOpener::default();
        let mut w = wizard(8);
        w.set_phone("71 98888-7777");
        assert!(matches!(w.unlock(BROKER_PHONE, &opener), Err(LeadError::NoEstimate)));

        w.set_area("80");
        w.calculate();
        w.set_phone(" ");
        assert!(matches!(
            w.unlock(BROKER_PHONE, &opener),
            Err(LeadError::MissingField("phone"))
        ));
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn unlock_can_be_repeated_from_result() {
        let opener = RecordingOpener::default();
        let mut w = wizard(21);
        w.set_neighborhood("Pituba");
        w.set_area("110");
        let result = w.calculate();
        w.set_phone("71 98888-7777");

        let first = w.unlock(BROKER_PHONE, &opener).unwrap();
        let second = w.unlock(BROKER_PHONE, &opener).unwrap();
        assert_eq!(first, second);
        assert_eq!(opener.opened().len(), 2);
        assert!(matches!(w.step(), WizardStep::Result(_)));

        let text: String = first
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, appraisal_message(w.request(), result));
        assert!(text.starts_with(
            "Olá, solicito a avaliação detalhada do meu imóvel em Pituba (110m²)."
        ));
    }
}
