use std::{fmt, time::Duration};
use uuid::Uuid;
use super::offer::{OfferSubmission, ValidationError};

/// Stand-in for the offer-creation backend. There is no server behind the
/// marketing site, so this sits where a real client would and answers every
/// well-formed submission with a receipt after a fixed delay.
pub struct OfferGateway {
  latency: Duration,
}

impl OfferGateway {
  pub fn new() -> Self {
    OfferGateway { latency: Duration::from_millis(2000) }
  }

  pub fn with_latency(latency: Duration) -> Self {
    OfferGateway { latency }
  }

  pub async fn create_offer(&self, submission: &OfferSubmission) -> Result<OfferReceipt, GatewayError> {
    submission.validate().map_err(GatewayError::Rejected)?;
    async_std::task::sleep(self.latency).await;
    Ok(OfferReceipt {
      offer_id: Uuid::new_v4().to_string(),
      pair: format!(
        "{}/{}",
        submission.offer.sell_currency, submission.offer.buy_currency
      ),
    })
  }
}

impl Default for OfferGateway {
  fn default() -> Self {
    OfferGateway::new()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferReceipt {
  pub offer_id: String,
  pub pair: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum GatewayError {
  Rejected(ValidationError),
}

impl fmt::Display for GatewayError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Rejected(e) => write!(f, "Offer rejected: {}", e),
    }
  }
}

impl std::error::Error for GatewayError {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::offer::{Currency, OfferDraft, PaymentMethod};
  use futures::executor::block_on;

  fn submission() -> OfferSubmission {
    let draft = OfferDraft {
      price: "1750".to_string(),
      amount: "100".to_string(),
      min_limit: "50".to_string(),
      max_limit: "500".to_string(),
      payment_methods: vec![PaymentMethod::MPesa],
      payment_details: "+265 991 000 000".to_string(),
      description: "Settles within the hour".to_string(),
      ..OfferDraft::default()
    };
    OfferSubmission::from_draft(&draft, 1_756_000_000)
  }

  #[test]
  fn well_formed_submission_gets_a_receipt() {
    let gateway = OfferGateway::with_latency(Duration::ZERO);
    let receipt = block_on(gateway.create_offer(&submission())).expect("simulated offer should land");
    assert_eq!(receipt.pair, "USD/MWK");
    assert!(Uuid::parse_str(&receipt.offer_id).is_ok());
  }

  #[test]
  fn receipts_carry_distinct_offer_ids() {
    let gateway = OfferGateway::with_latency(Duration::ZERO);
    let first = block_on(gateway.create_offer(&submission())).unwrap();
    let second = block_on(gateway.create_offer(&submission())).unwrap();
    assert_ne!(first.offer_id, second.offer_id);
  }

  #[test]
  fn gateway_revalidates_before_accepting() {
    let mut bad = submission();
    bad.offer.buy_currency = Currency::Usd;
    let gateway = OfferGateway::with_latency(Duration::ZERO);
    let err = block_on(gateway.create_offer(&bad)).unwrap_err();
    assert_eq!(err, GatewayError::Rejected(ValidationError::SameCurrency));
  }

  #[test]
  fn default_gateway_uses_the_production_delay() {
    assert_eq!(OfferGateway::new().latency, Duration::from_millis(2000));
  }
}
