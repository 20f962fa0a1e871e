use serde::Deserialize;

type TimestampMillis = i64;

/// Receipt returned by the Amazon Receipt Verification Service on HTTP 200.
///
/// https://developer.amazon.com/docs/in-app-purchasing/iap-rvs-for-android-apps.html
///
/// Amazon omits or nulls fields that don't apply to the product type, so
/// everything is optional here. Zero values are filled in when the domain
/// entity is built.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptModel {
    /// Unique identifier for the purchase.
    pub(crate) receipt_id: Option<String>,
    /// ENTITLED, CONSUMABLE or SUBSCRIPTION.
    pub(crate) product_type: Option<String>,
    /// The SKU that you defined for this item in your app.
    pub(crate) product_id: Option<String>,
    /// Not used by Amazon at present; always null.
    pub(crate) parent_product_id: Option<String>,
    /// Date the purchase was made, in milliseconds since the epoch.
    pub(crate) purchase_date: Option<TimestampMillis>,
    /// Date a subscription will renew. Subscriptions only.
    pub(crate) renewal_date: Option<TimestampMillis>,
    /// Date the purchase was canceled, or null if it was not.
    pub(crate) cancel_date: Option<TimestampMillis>,
    /// Quantity purchased. Always 1 in practice.
    pub(crate) quantity: Option<i64>,
    /// Whether the product was purchased as part of a Live App Test.
    pub(crate) beta_product: Option<bool>,
    /// True for App Tester and sandbox purchases.
    pub(crate) test_transaction: Option<bool>,
    /// Duration of the subscription term, e.g. "1 Week". Subscriptions only.
    pub(crate) term: Option<String>,
    /// SKU of the subscription term. Subscriptions only.
    pub(crate) term_sku: Option<String>,
}
