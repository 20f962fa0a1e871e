use async_trait::async_trait;
use log::debug;
use reqwest::{StatusCode, Url};

use crate::{
    constants::VERIFY_RECEIPT_ID_PATH,
    data::models::amazon_rvs::{
        error_response_model::ErrorResponseModel, receipt_model::ReceiptModel,
    },
    errors::VerificationError,
    transport::HttpTransport,
};

#[async_trait]
pub(crate) trait AmazonRvsDatasource: Send + Sync {
    /// Verify Receipt ID:
    /// https://developer.amazon.com/docs/in-app-purchasing/iap-rvs-for-android-apps.html
    ///
    /// userId:
    ///   The Amazon customer ID returned by the Appstore SDK for the purchase.
    /// receiptId:
    ///   The receipt ID returned by the Appstore SDK for the purchase.
    async fn verify_receipt_id(
        &self,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<ReceiptModel, VerificationError>;
}

pub(crate) struct AmazonRvsDatasourceImpl {
    base_url: String,
    developer_secret: String,
    transport: HttpTransport,
}

#[async_trait]
impl AmazonRvsDatasource for AmazonRvsDatasourceImpl {
    async fn verify_receipt_id(
        &self,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<ReceiptModel, VerificationError> {
        let url = self.build_url(user_id, receipt_id)?;
        self.callout(url, "verifyReceiptId").await
    }
}

impl AmazonRvsDatasourceImpl {
    pub(crate) fn new(base_url: &str, developer_secret: &str, transport: HttpTransport) -> Self {
        Self {
            base_url: base_url.to_owned(),
            developer_secret: developer_secret.to_owned(),
            transport,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Fails unless the URL is absolute and can have path segments appended.
    pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, VerificationError> {
        Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| VerificationError::InvalidBaseUrl {
                url: base_url.to_owned(),
            })
    }

    /// `{base}/version/1.0/verifyReceiptId/developer/{secret}/user/{userId}/receiptId/{receiptId}`
    ///
    /// Each value is percent-encoded as a single segment, so ids containing
    /// '/' or '?' can't alter the path.
    fn build_url(&self, user_id: &str, receipt_id: &str) -> Result<Url, VerificationError> {
        let mut url = Self::parse_base_url(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| VerificationError::InvalidBaseUrl {
                url: self.base_url.clone(),
            })?
            .pop_if_empty()
            .extend(VERIFY_RECEIPT_ID_PATH)
            .extend([
                "developer",
                self.developer_secret.as_str(),
                "user",
                user_id,
                "receiptId",
                receipt_id,
            ]);
        Ok(url)
    }

    async fn callout(
        &self,
        url: Url,
        function_name: &str,
    ) -> Result<ReceiptModel, VerificationError> {
        // The URL carries the developer secret, so only the base is logged.
        debug!("{}; calling out to {}", function_name, self.base_url);
        let response = self
            .transport
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_failure(function_name, "callout failed to send", e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            self.transport_failure(function_name, "failed to read callout response", e)
        })?;

        if status != StatusCode::OK {
            let error: ErrorResponseModel = serde_json::from_slice(&body).map_err(|e| {
                debug!(
                    "{}; {} response body could not be parsed: {}",
                    function_name, status, e
                );
                VerificationError::from(e)
            })?;
            let message = error.message.unwrap_or_default();
            debug!(
                "{}; callout returned with {} status code: {}",
                function_name, status, message
            );
            return Err(VerificationError::VendorRejected { message });
        }

        debug!("{}; callout returned with {} status code", function_name, status);
        Ok(serde_json::from_slice(&body)?)
    }

    /// Strips the request URL, which embeds the developer secret, before the
    /// error is logged or handed back to the caller.
    fn transport_failure(
        &self,
        function_name: &str,
        what: &str,
        e: reqwest::Error,
    ) -> VerificationError {
        let e = e.without_url();
        debug!("{}; {} to {}: {}", function_name, what, self.base_url, e);
        VerificationError::from(e)
    }
}
