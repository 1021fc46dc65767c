use std::{fmt, str::FromStr};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/* Offer field enums */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
  Buy,
  Sell,
}

impl TransactionType {
  pub const ALL: [TransactionType; 2] = [TransactionType::Buy, TransactionType::Sell];

  pub fn label(&self) -> &'static str {
    match self {
      Self::Buy => "Buy",
      Self::Sell => "Sell",
    }
  }
}

impl fmt::Display for TransactionType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Buy => write!(f, "buy"),
      Self::Sell => write!(f, "sell"),
    }
  }
}

impl FromStr for TransactionType {
  type Err = OfferParseError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "buy" => Ok(TransactionType::Buy),
      "sell" => Ok(TransactionType::Sell),
      _ => Err(OfferParseError::InvalidTransactionType(s.to_string())),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
  Usd,
  Mwk,
  Btc,
  Eth,
}

impl Currency {
  pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Mwk, Currency::Btc, Currency::Eth];
}

impl fmt::Display for Currency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Usd => write!(f, "USD"),
      Self::Mwk => write!(f, "MWK"),
      Self::Btc => write!(f, "BTC"),
      Self::Eth => write!(f, "ETH"),
    }
  }
}

impl FromStr for Currency {
  type Err = OfferParseError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_uppercase().as_str() {
      "USD" => Ok(Currency::Usd),
      "MWK" => Ok(Currency::Mwk),
      "BTC" => Ok(Currency::Btc),
      "ETH" => Ok(Currency::Eth),
      _ => Err(OfferParseError::InvalidCurrency(s.to_string())),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
  BankTransfer,
  MPesa,
  Paypal,
}

impl PaymentMethod {
  pub const ALL: [PaymentMethod; 3] = [PaymentMethod::BankTransfer, PaymentMethod::MPesa, PaymentMethod::Paypal];

  pub fn label(&self) -> &'static str {
    match self {
      Self::BankTransfer => "Bank transfer",
      Self::MPesa => "M-Pesa",
      Self::Paypal => "PayPal",
    }
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::BankTransfer => write!(f, "bank-transfer"),
      Self::MPesa => write!(f, "m-pesa"),
      Self::Paypal => write!(f, "paypal"),
    }
  }
}

impl FromStr for PaymentMethod {
  type Err = OfferParseError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "bank-transfer" => Ok(PaymentMethod::BankTransfer),
      "m-pesa" => Ok(PaymentMethod::MPesa),
      "paypal" => Ok(PaymentMethod::Paypal),
      _ => Err(OfferParseError::InvalidPaymentMethod(s.to_string())),
    }
  }
}

#[derive(Debug)]
pub enum OfferParseError {
  InvalidTransactionType(String),
  InvalidCurrency(String),
  InvalidPaymentMethod(String),
}

impl fmt::Display for OfferParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidTransactionType(s) => write!(f, "Invalid transaction type string: {}", s),
      Self::InvalidCurrency(s) => write!(f, "Invalid currency string: {}", s),
      Self::InvalidPaymentMethod(s) => write!(f, "Invalid payment method string: {}", s),
    }
  }
}

impl std::error::Error for OfferParseError {}

/* Draft state and validation */

/// In-memory draft of a trade offer, scoped to the form component.
/// Numeric fields stay strings: they mirror the raw input values and only
/// get parsed at validation/display time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDraft {
  pub transaction_type: TransactionType,
  pub sell_currency: Currency,
  pub buy_currency: Currency,
  pub price: String,
  pub amount: String,
  pub min_limit: String,
  pub max_limit: String,
  pub payment_methods: Vec<PaymentMethod>,
  pub payment_details: String,
  pub escrow: bool,
  pub description: String,
}

impl Default for OfferDraft {
  fn default() -> Self {
    OfferDraft {
      transaction_type: TransactionType::Buy,
      sell_currency: Currency::Usd,
      buy_currency: Currency::Mwk,
      price: String::new(),
      amount: String::new(),
      min_limit: String::new(),
      max_limit: String::new(),
      payment_methods: vec![],
      payment_details: String::new(),
      escrow: true,
      description: String::new(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
  MissingFields,
  SameCurrency,
  LimitsInverted,
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingFields => write!(f, "Please fill out all required fields."),
      Self::SameCurrency => write!(f, "Sell and buy currencies must be different."),
      Self::LimitsInverted => write!(f, "Minimum limit cannot exceed maximum limit."),
    }
  }
}

impl std::error::Error for ValidationError {}

impl OfferDraft {
  /// Checks the draft against the submission rules and surfaces the first
  /// failing one. A numeric field counts as present only when it parses to a
  /// non-negative decimal, so a negative or garbled value falls under the
  /// required-fields rule rather than growing the error surface.
  pub fn validate(&self) -> Result<(), ValidationError> {
    let min_limit = non_negative_decimal(&self.min_limit);
    let max_limit = non_negative_decimal(&self.max_limit);

    let required_present = non_negative_decimal(&self.price).is_some()
      && non_negative_decimal(&self.amount).is_some()
      && min_limit.is_some()
      && max_limit.is_some()
      && !self.payment_methods.is_empty()
      && !self.payment_details.trim().is_empty()
      && !self.description.trim().is_empty();

    if !required_present {
      return Err(ValidationError::MissingFields);
    }
    if self.sell_currency == self.buy_currency {
      return Err(ValidationError::SameCurrency);
    }
    // both limits parsed above, equal limits are fine
    if min_limit > max_limit {
      return Err(ValidationError::LimitsInverted);
    }
    Ok(())
  }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  // number inputs may hand over scientific notation ("1e3")
  Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)).ok()
}

fn non_negative_decimal(raw: &str) -> Option<Decimal> {
  parse_decimal(raw).filter(|d| *d >= Decimal::ZERO)
}

/// Price times amount with two decimals, "0.00" when either side is empty or
/// doesn't parse. Midpoints round away from zero.
pub fn total_cost(price: &str, amount: &str) -> String {
  match (parse_decimal(price), parse_decimal(amount)) {
    (Some(p), Some(a)) => match p.checked_mul(a) {
      Some(product) => {
        let mut total = product.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        total.rescale(2);
        total.to_string()
      }
      None => "0.00".to_string(),
    },
    _ => "0.00".to_string(),
  }
}

/* Submission payload */

/// What the form would put on the wire for a real offer-creation call: the
/// draft fields under their camelCase names plus a client timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSubmission {
  #[serde(flatten)]
  pub offer: OfferDraft,
  pub client_ts: u64,
}

impl OfferSubmission {
  pub fn from_draft(draft: &OfferDraft, client_ts: u64) -> Self {
    OfferSubmission { offer: draft.clone(), client_ts }
  }

  pub fn validate(&self) -> Result<(), ValidationError> {
    self.offer.validate()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn valid_draft() -> OfferDraft {
    OfferDraft {
      transaction_type: TransactionType::Buy,
      sell_currency: Currency::Usd,
      buy_currency: Currency::Mwk,
      price: "1750".to_string(),
      amount: "100".to_string(),
      min_limit: "50".to_string(),
      max_limit: "500".to_string(),
      payment_methods: vec![PaymentMethod::BankTransfer],
      payment_details: "National Bank, acct 000123".to_string(),
      escrow: true,
      description: "Fast settlement, Lilongwe only".to_string(),
    }
  }

  #[test]
  fn default_draft_matches_initial_form_state() {
    let draft = OfferDraft::default();
    assert_eq!(draft.transaction_type, TransactionType::Buy);
    assert_eq!(draft.sell_currency, Currency::Usd);
    assert_eq!(draft.buy_currency, Currency::Mwk);
    assert!(draft.price.is_empty());
    assert!(draft.payment_methods.is_empty());
    assert!(draft.escrow);
    assert!(draft.description.is_empty());
  }

  #[test]
  fn valid_draft_passes_validation() {
    assert!(valid_draft().validate().is_ok());
  }

  #[test]
  fn default_draft_is_blocked_on_required_fields() {
    assert_eq!(OfferDraft::default().validate(), Err(ValidationError::MissingFields));
  }

  #[test]
  fn empty_price_blocks_submission() {
    let mut draft = valid_draft();
    draft.price = String::new();
    assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
  }

  #[test]
  fn whitespace_description_blocks_submission() {
    let mut draft = valid_draft();
    draft.description = "   ".to_string();
    assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
  }

  #[test]
  fn no_payment_method_blocks_submission() {
    let mut draft = valid_draft();
    draft.payment_methods.clear();
    assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
  }

  #[test]
  fn negative_amount_counts_as_missing() {
    let mut draft = valid_draft();
    draft.amount = "-5".to_string();
    assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
  }

  #[test]
  fn identical_currencies_block_submission() {
    let mut draft = valid_draft();
    draft.buy_currency = Currency::Usd;
    assert_eq!(draft.validate(), Err(ValidationError::SameCurrency));
  }

  #[test]
  fn inverted_limits_block_submission() {
    let mut draft = valid_draft();
    draft.min_limit = "500".to_string();
    draft.max_limit = "100".to_string();
    assert_eq!(draft.validate(), Err(ValidationError::LimitsInverted));
  }

  #[test]
  fn equal_limits_are_accepted() {
    let mut draft = valid_draft();
    draft.min_limit = "250".to_string();
    draft.max_limit = "250".to_string();
    assert!(draft.validate().is_ok());
  }

  #[test]
  fn missing_fields_reported_before_currency_clash() {
    let mut draft = valid_draft();
    draft.price = String::new();
    draft.buy_currency = Currency::Usd;
    assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
  }

  #[test]
  fn currency_clash_reported_before_inverted_limits() {
    let mut draft = valid_draft();
    draft.buy_currency = Currency::Usd;
    draft.min_limit = "500".to_string();
    draft.max_limit = "100".to_string();
    assert_eq!(draft.validate(), Err(ValidationError::SameCurrency));
  }

  #[test]
  fn validation_messages_match_the_toasts() {
    assert_eq!(ValidationError::MissingFields.to_string(), "Please fill out all required fields.");
    assert_eq!(ValidationError::SameCurrency.to_string(), "Sell and buy currencies must be different.");
    assert_eq!(ValidationError::LimitsInverted.to_string(), "Minimum limit cannot exceed maximum limit.");
  }

  #[test]
  fn total_cost_multiplies_and_keeps_two_decimals() {
    assert_eq!(total_cost("1750", "100"), "175000.00");
    assert_eq!(total_cost("2", "3"), "6.00");
    assert_eq!(total_cost("19.99", "2"), "39.98");
  }

  #[test]
  fn total_cost_rounds_midpoints_away_from_zero() {
    // 0.1 * 0.25 = 0.025
    assert_eq!(total_cost("0.1", "0.25"), "0.03");
  }

  #[test]
  fn total_cost_falls_back_when_either_side_is_empty() {
    assert_eq!(total_cost("", "100"), "0.00");
    assert_eq!(total_cost("1750", ""), "0.00");
    assert_eq!(total_cost("", ""), "0.00");
    assert_eq!(total_cost("abc", "100"), "0.00");
  }

  #[test]
  fn decimal_parsing_accepts_scientific_notation() {
    assert_eq!(parse_decimal("1e3"), Some(dec!(1000)));
    assert_eq!(parse_decimal(" 1750.50 "), Some(dec!(1750.50)));
    assert_eq!(parse_decimal("not-a-number"), None);
  }

  #[test]
  fn wire_values_round_trip_through_from_str() {
    assert_eq!("sell".parse::<TransactionType>().unwrap(), TransactionType::Sell);
    assert_eq!("MWK".parse::<Currency>().unwrap(), Currency::Mwk);
    assert_eq!("m-pesa".parse::<PaymentMethod>().unwrap(), PaymentMethod::MPesa);
    assert_eq!(PaymentMethod::MPesa.to_string(), "m-pesa");
    assert!("cash".parse::<PaymentMethod>().is_err());
  }

  #[test]
  fn submission_serializes_with_camel_case_field_names() {
    let submission = OfferSubmission::from_draft(&valid_draft(), 1_756_000_000);
    let json = serde_json::to_value(&submission).expect("submission should serialize");

    assert_eq!(json["transactionType"], "buy");
    assert_eq!(json["sellCurrency"], "USD");
    assert_eq!(json["buyCurrency"], "MWK");
    assert_eq!(json["price"], "1750");
    assert_eq!(json["paymentMethods"][0], "bank-transfer");
    assert_eq!(json["escrow"], true);
    assert_eq!(json["clientTs"], 1_756_000_000_u64);
  }
}
