use std::str::FromStr;

use serde::Deserialize;

use crate::{
    constants::{IAP_ENVIRONMENT_VAR, PRODUCTION_URL, SANDBOX_URL},
    errors::ParseEnvironmentError,
};

/// Which Receipt Verification Service to call out to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// RVS Sandbox, for receipts generated by App Tester.
    #[default]
    Sandbox,
    /// Live Appstore receipts.
    Production,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }

    /// Reads `IAP_ENVIRONMENT`. Only the exact value "production" selects
    /// production; unset or anything else selects the sandbox.
    pub fn from_process_env() -> Self {
        match std::env::var(IAP_ENVIRONMENT_VAR) {
            Ok(value) if value == "production" => Environment::Production,
            _ => Environment::Sandbox,
        }
    }
}

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else if s.eq_ignore_ascii_case("sandbox") {
            Ok(Environment::Sandbox)
        } else {
            Err(ParseEnvironmentError {
                value: s.to_string(),
            })
        }
    }
}
