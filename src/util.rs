use crate::{
    data::{
        datasources::amazon_rvs_datasource::AmazonRvsDatasourceImpl,
        repositories::receipt_repository_impl::ReceiptRepositoryImpl,
    },
    domain::{
        entities::{
            environment::Environment, verification_result::VerificationResult,
            verify_context::VerifyContext,
        },
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::VerificationError,
    transport::HttpTransport,
};

/// Client for the Amazon Receipt Verification Service.
///
/// Immutable once built; share it by reference between tasks.
pub struct AmazonIapClient {
    receipt_repository: ReceiptRepositoryImpl<AmazonRvsDatasourceImpl>,
}

impl AmazonIapClient {
    /// Verifies a receipt, returning Amazon's record of the purchase.
    ///
    /// A non-200 response becomes `VerificationError::VendorRejected`, whose
    /// message is exactly what Amazon sent (e.g. "Failed to parse receipt Id"
    /// for a 400, "Purchase token/app user mismatch" for a 497).
    pub async fn verify(
        &self,
        ctx: &VerifyContext,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<VerificationResult, VerificationError> {
        self.receipt_repository.verify(ctx, user_id, receipt_id).await
    }

    /// Default transport, with a 10 second timeout.
    pub fn new(developer_secret: &str, environment: Environment) -> Self {
        Self::with_transport(developer_secret, environment, HttpTransport::default())
    }

    pub fn with_transport(
        developer_secret: &str,
        environment: Environment,
        transport: HttpTransport,
    ) -> Self {
        Self {
            receipt_repository: ReceiptRepositoryImpl::new(
                environment.base_url(),
                developer_secret,
                transport,
            ),
        }
    }

    /// Targets an arbitrary endpoint instead of one of Amazon's, e.g. a local
    /// stub or a proxy.
    pub fn with_base_url(
        developer_secret: &str,
        base_url: &str,
        transport: HttpTransport,
    ) -> Result<Self, VerificationError> {
        AmazonRvsDatasourceImpl::parse_base_url(base_url)?;
        Ok(Self {
            receipt_repository: ReceiptRepositoryImpl::new(base_url, developer_secret, transport),
        })
    }

    /// Picks the environment from `IAP_ENVIRONMENT`.
    pub fn from_process_env(developer_secret: &str) -> Self {
        Self::new(developer_secret, Environment::from_process_env())
    }

    pub fn base_url(&self) -> &str {
        self.receipt_repository.datasource().base_url()
    }

    pub fn transport(&self) -> &HttpTransport {
        self.receipt_repository.datasource().transport()
    }
}
