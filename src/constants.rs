use std::time::Duration;

/// Amazon's RVS Sandbox runs locally as part of the App Tester tooling.
pub const SANDBOX_URL: &str = "http://localhost:8080/RVSSandbox";
pub const PRODUCTION_URL: &str = "https://appstore-sdk.amazon.com";

/// Applied to every callout unless the caller supplies its own transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Process environment variable read by `Environment::from_process_env`.
pub const IAP_ENVIRONMENT_VAR: &str = "IAP_ENVIRONMENT";

pub(crate) const VERIFY_RECEIPT_ID_PATH: [&str; 3] = ["version", "1.0", "verifyReceiptId"];
