use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    /// The transport timed out, or the caller's deadline passed first. The
    /// source is only present when the timeout came from the transport.
    #[error("request to the Amazon Receipt Verification Service timed out")]
    Timeout {
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("request to the Amazon Receipt Verification Service was canceled")]
    Canceled,

    #[error(transparent)]
    Transport(reqwest::Error),

    /// Non-200 response with a decodable error body. Displays exactly the
    /// message Amazon returned; callers match on this text.
    #[error("{message}")]
    VendorRejected { message: String },

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("invalid base URL: {url}")]
    InvalidBaseUrl { url: String },
}

#[derive(Debug, Error)]
#[error("unknown IAP environment: {value}")]
pub struct ParseEnvironmentError {
    pub(crate) value: String,
}

impl VerificationError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, VerificationError::Timeout { .. })
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, VerificationError::Canceled)
    }

    /// The vendor's message, if Amazon rejected the receipt.
    pub fn vendor_message(&self) -> Option<&str> {
        match self {
            VerificationError::VendorRejected { message } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VerificationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            VerificationError::Timeout { source: Some(e) }
        } else {
            VerificationError::Transport(e)
        }
    }
}
