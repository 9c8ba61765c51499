use async_trait::async_trait;
use crates::payments::midtrans_client::{
    ChargeResponse, GatewayError, MidtransClient, QrisChargeRequest, TransactionStatusResponse,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_transaction(
        &self,
        request: QrisChargeRequest,
    ) -> Result<ChargeResponse, GatewayError>;

    async fn query_transaction_status(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionStatusResponse, GatewayError>;
}

#[async_trait]
impl PaymentGateway for MidtransClient {
    async fn create_transaction(
        &self,
        request: QrisChargeRequest,
    ) -> Result<ChargeResponse, GatewayError> {
        self.create_transaction(request).await
    }

    async fn query_transaction_status(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionStatusResponse, GatewayError> {
        self.query_transaction_status(transaction_id).await
    }
}
