use async_trait::async_trait;

use crate::{
    domain::entities::{verification_result::VerificationResult, verify_context::VerifyContext},
    errors::VerificationError,
};

#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Confirms the receipt with Amazon. Exactly one callout, no retries.
    async fn verify(
        &self,
        ctx: &VerifyContext,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<VerificationResult, VerificationError>;
}
