use async_trait::async_trait;
use log::debug;

use crate::{
    data::{
        datasources::amazon_rvs_datasource::{AmazonRvsDatasource, AmazonRvsDatasourceImpl},
        models::amazon_rvs::receipt_model::ReceiptModel,
    },
    domain::{
        entities::{verification_result::VerificationResult, verify_context::VerifyContext},
        repositories::receipt_repository::ReceiptRepository,
    },
    errors::VerificationError,
    transport::HttpTransport,
};

pub(crate) struct ReceiptRepositoryImpl<D: AmazonRvsDatasource> {
    amazon_rvs_datasource: D,
}

#[async_trait]
impl<D: AmazonRvsDatasource> ReceiptRepository for ReceiptRepositoryImpl<D> {
    async fn verify(
        &self,
        ctx: &VerifyContext,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<VerificationResult, VerificationError> {
        let receipt = tokio::select! {
            biased;
            _ = ctx.canceled() => {
                debug!("verify; canceled by caller");
                return Err(VerificationError::Canceled);
            }
            _ = ctx.deadline_elapsed() => {
                debug!("verify; caller deadline elapsed");
                return Err(VerificationError::Timeout { source: None });
            }
            result = self.amazon_rvs_datasource.verify_receipt_id(user_id, receipt_id) => result?,
        };
        Ok(VerificationResult::from_amazon_receipt(receipt))
    }
}

impl<D: AmazonRvsDatasource> ReceiptRepositoryImpl<D> {
    pub(crate) fn with_datasource(amazon_rvs_datasource: D) -> Self {
        Self {
            amazon_rvs_datasource,
        }
    }
}

impl ReceiptRepositoryImpl<AmazonRvsDatasourceImpl> {
    pub(crate) fn new(base_url: &str, developer_secret: &str, transport: HttpTransport) -> Self {
        Self::with_datasource(AmazonRvsDatasourceImpl::new(
            base_url,
            developer_secret,
            transport,
        ))
    }

    pub(crate) fn datasource(&self) -> &AmazonRvsDatasourceImpl {
        &self.amazon_rvs_datasource
    }
}

impl VerificationResult {
    /// Absent or null values become their zero value here, and only here.
    fn from_amazon_receipt(m: ReceiptModel) -> Self {
        Self {
            receipt_id: m.receipt_id.unwrap_or_default(),
            product_type: m.product_type.unwrap_or_default().into(),
            product_id: m.product_id.unwrap_or_default(),
            parent_product_id: m.parent_product_id,
            purchase_date: m.purchase_date.unwrap_or(0),
            renewal_date: m.renewal_date.unwrap_or(0),
            cancel_date: m.cancel_date.unwrap_or(0),
            quantity: m.quantity.unwrap_or(0),
            beta_product: m.beta_product.unwrap_or(false),
            test_transaction: m.test_transaction.unwrap_or(false),
            term: m.term,
            term_sku: m.term_sku,
        }
    }
}
