use std::sync::Arc;

use axum::http::StatusCode;
use crates::{
    domain::{
        repositories::orders::OrderRepository,
        value_objects::enums::order_statuses::OrderStatus,
    },
    payments::midtrans_client::GatewayError,
};
use thiserror::Error;
use tracing::{debug, error, info};

use super::payment_gateway::PaymentGateway;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Payment for order {0} not found")]
    PaymentNotFound(i32),
    #[error(transparent)]
    PaymentGateway(#[from] GatewayError),
    #[error("order status could not be stored: {0}")]
    Persistence(anyhow::Error),
}

impl ReconcileError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReconcileError::PaymentNotFound(_) => StatusCode::NOT_FOUND,
            ReconcileError::PaymentGateway(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ReconcileError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Pulls the gateway's view of an order's payment into the local order and payment rows.
pub struct OrderStatusUseCase<O, G>
where
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    order_repo: Arc<O>,
    gateway: Arc<G>,
}

impl<O, G> OrderStatusUseCase<O, G>
where
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    pub fn new(order_repo: Arc<O>, gateway: Arc<G>) -> Self {
        Self {
            order_repo,
            gateway,
        }
    }

    /// Returns the refreshed status. Local rows are left untouched when the gateway
    /// cannot be reached or rejects the query.
    pub async fn reconcile(&self, order_id: i32) -> Result<OrderStatus, ReconcileError> {
        let payment = self
            .order_repo
            .find_payment_by_order_id(order_id)
            .await
            .map_err(ReconcileError::Persistence)?
            .ok_or(ReconcileError::PaymentNotFound(order_id))?;

        let Some(transaction_id) = payment
            .payment_transaction_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
        else {
            // Offline methods are settled by hand; the gateway knows nothing about them.
            debug!(order_id, "order_status: no gateway transaction, keeping stored status");
            return Ok(OrderStatus::from_stored(&payment.payment_status));
        };

        let gateway_status = self
            .gateway
            .query_transaction_status(transaction_id)
            .await
            .inspect_err(|err| {
                error!(order_id, error = %err, "order_status: gateway status query failed")
            })?;

        let status = OrderStatus::from_gateway_status(&gateway_status.transaction_status);

        let order_update = self.order_repo.update_order_status(order_id, status).await;
        let payment_update = self.order_repo.update_payment_status(order_id, status).await;

        match (order_update, payment_update) {
            (Ok(()), Ok(())) => {}
            (Err(err), Ok(())) => {
                return Err(ReconcileError::Persistence(err.context("update order status")));
            }
            (Ok(()), Err(err)) => {
                return Err(ReconcileError::Persistence(err.context("update payment status")));
            }
            (Err(order_err), Err(payment_err)) => {
                return Err(ReconcileError::Persistence(anyhow::anyhow!(
                    "update order status: {order_err}; update payment status: {payment_err}"
                )));
            }
        }

        info!(
            order_id,
            gateway_status = %gateway_status.transaction_status,
            status = %status,
            "order_status: reconciled"
        );

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::payment_gateway::MockPaymentGateway;
    use chrono::Utc;
    use crates::{
        domain::{entities::payments::PaymentEntity, repositories::orders::MockOrderRepository},
        payments::midtrans_client::TransactionStatusResponse,
    };
    use mockall::predicate::eq;

    fn payment(order_id: i32, transaction_id: Option<&str>, status: &str) -> PaymentEntity {
        PaymentEntity {
            id: 1,
            order_id,
            payment_method: "qris".to_string(),
            payment_status: status.to_string(),
            payment_account_number: None,
            payment_account_name: None,
            transaction_code: format!("TXN{order_id}"),
            payment_qr_code_url: None,
            payment_expired_date: None,
            payment_transaction_id: transaction_id.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    fn gateway_status(status: &str) -> TransactionStatusResponse {
        TransactionStatusResponse {
            status_code: "200".to_string(),
            status_message: None,
            transaction_id: Some("trx-1".to_string()),
            order_id: None,
            transaction_status: status.to_string(),
            fraud_status: None,
            expiry_time: None,
        }
    }

    #[tokio::test]
    async fn settlement_marks_order_and_payment_successful() {
        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_find_payment_by_order_id()
            .with(eq(42))
            .returning(|id| Ok(Some(payment(id, Some("trx-1"), "pending"))));
        order_repo
            .expect_update_order_status()
            .with(eq(42), eq(OrderStatus::Success))
            .times(1)
            .returning(|_, _| Ok(()));
        order_repo
            .expect_update_payment_status()
            .with(eq(42), eq(OrderStatus::Success))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_query_transaction_status()
            .with(eq("trx-1"))
            .times(1)
            .returning(|_| Ok(gateway_status("settlement")));

        let usecase = OrderStatusUseCase::new(Arc::new(order_repo), Arc::new(gateway));

        let status = usecase.reconcile(42).await.unwrap();

        assert_eq!(status, OrderStatus::Success);
        assert_eq!(status.as_str(), "Success");
        assert_eq!(status.as_payment_str(), "success");
    }

    #[tokio::test]
    async fn repeated_reconciliation_is_stable() {
        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_find_payment_by_order_id()
            .returning(|id| Ok(Some(payment(id, Some("trx-1"), "pending"))));
        order_repo
            .expect_update_order_status()
            .times(2)
            .returning(|_, _| Ok(()));
        order_repo
            .expect_update_payment_status()
            .times(2)
            .returning(|_, _| Ok(()));

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_query_transaction_status()
            .times(2)
            .returning(|_| Ok(gateway_status("expire")));

        let usecase = OrderStatusUseCase::new(Arc::new(order_repo), Arc::new(gateway));

        let first = usecase.reconcile(5).await.unwrap();
        let second = usecase.reconcile(5).await.unwrap();

        assert_eq!(first, OrderStatus::Expired);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_gateway_status_maps_to_unknown() {
        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_find_payment_by_order_id()
            .returning(|id| Ok(Some(payment(id, Some("trx-1"), "pending"))));
        order_repo
            .expect_update_order_status()
            .with(eq(5), eq(OrderStatus::Unknown))
            .returning(|_, _| Ok(()));
        order_repo
            .expect_update_payment_status()
            .with(eq(5), eq(OrderStatus::Unknown))
            .returning(|_, _| Ok(()));

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_query_transaction_status()
            .returning(|_| Ok(gateway_status("on_hold")));

        let usecase = OrderStatusUseCase::new(Arc::new(order_repo), Arc::new(gateway));

        assert_eq!(usecase.reconcile(5).await.unwrap(), OrderStatus::Unknown);
    }

    #[tokio::test]
    async fn missing_payment_is_not_found() {
        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_find_payment_by_order_id()
            .returning(|_| Ok(None));

        let usecase =
            OrderStatusUseCase::new(Arc::new(order_repo), Arc::new(MockPaymentGateway::new()));

        let err = usecase.reconcile(404).await.unwrap_err();

        assert!(matches!(err, ReconcileError::PaymentNotFound(404)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn offline_payment_skips_the_gateway() {
        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_find_payment_by_order_id()
            .returning(|id| Ok(Some(payment(id, None, "pending"))));

        let usecase =
            OrderStatusUseCase::new(Arc::new(order_repo), Arc::new(MockPaymentGateway::new()));

        assert_eq!(usecase.reconcile(3).await.unwrap(), OrderStatus::Pending);
    }

    #[tokio::test]
    async fn gateway_failure_leaves_local_state_alone() {
        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_find_payment_by_order_id()
            .returning(|id| Ok(Some(payment(id, Some("trx-1"), "pending"))));

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_query_transaction_status()
            .returning(|_| Err(GatewayError::Timeout));

        let usecase = OrderStatusUseCase::new(Arc::new(order_repo), Arc::new(gateway));

        let err = usecase.reconcile(3).await.unwrap_err();

        assert!(matches!(err, ReconcileError::PaymentGateway(GatewayError::Timeout)));
    }

    #[tokio::test]
    async fn both_updates_are_attempted_when_one_fails() {
        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_find_payment_by_order_id()
            .returning(|id| Ok(Some(payment(id, Some("trx-1"), "pending"))));
        order_repo
            .expect_update_order_status()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("connection reset")));
        order_repo
            .expect_update_payment_status()
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_query_transaction_status()
            .returning(|_| Ok(gateway_status("settlement")));

        let usecase = OrderStatusUseCase::new(Arc::new(order_repo), Arc::new(gateway));

        let err = usecase.reconcile(8).await.unwrap_err();

        assert!(matches!(err, ReconcileError::Persistence(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
