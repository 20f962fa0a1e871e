use chrono::{DateTime, Utc};

/// A receipt as confirmed by the Amazon Receipt Verification Service.
///
/// Dates are Unix milliseconds. A date Amazon omitted or sent as null is `0`,
/// meaning "not applicable" (e.g. `cancel_date` of a purchase that was never
/// canceled).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationResult {
    pub receipt_id: String,
    pub product_type: ProductType,
    pub product_id: String,
    pub parent_product_id: Option<String>,
    pub purchase_date: i64,
    pub renewal_date: i64,
    pub cancel_date: i64,
    pub quantity: i64,
    pub beta_product: bool,
    pub test_transaction: bool,
    /// Subscriptions only.
    pub term: Option<String>,
    /// Subscriptions only.
    pub term_sku: Option<String>,
}

impl VerificationResult {
    pub fn purchase_time(&self) -> Option<DateTime<Utc>> {
        millis_to_time(self.purchase_date)
    }

    pub fn renewal_time(&self) -> Option<DateTime<Utc>> {
        millis_to_time(self.renewal_date)
    }

    pub fn cancel_time(&self) -> Option<DateTime<Utc>> {
        millis_to_time(self.cancel_date)
    }

    pub fn is_canceled(&self) -> bool {
        self.cancel_date != 0
    }
}

fn millis_to_time(millis: i64) -> Option<DateTime<Utc>> {
    match millis {
        0 => None,
        _ => DateTime::from_timestamp_millis(millis),
    }
}

/// Amazon's product type. Values Amazon adds in the future are kept verbatim
/// in `Unknown` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductType {
    Entitled,
    Subscription,
    Consumable,
    Unknown(String),
}

impl ProductType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductType::Entitled => "ENTITLED",
            ProductType::Subscription => "SUBSCRIPTION",
            ProductType::Consumable => "CONSUMABLE",
            ProductType::Unknown(other) => other,
        }
    }
}

impl Default for ProductType {
    fn default() -> Self {
        ProductType::Unknown(String::new())
    }
}

impl From<String> for ProductType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ENTITLED" => ProductType::Entitled,
            "SUBSCRIPTION" => ProductType::Subscription,
            "CONSUMABLE" => ProductType::Consumable,
            _ => ProductType::Unknown(value),
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
