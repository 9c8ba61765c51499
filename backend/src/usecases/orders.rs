use std::sync::Arc;

use axum::http::StatusCode;
use crates::domain::{
    repositories::orders::OrderRepository,
    value_objects::orders::{OrderModel, OrderStatusResponse},
};
use thiserror::Error;
use tracing::info;

use super::order_status::{OrderStatusUseCase, ReconcileError};
use super::payment_gateway::PaymentGateway;

#[derive(Debug, Error)]
pub enum OrderQueryError {
    #[error("Order with ID {0} not found")]
    OrderNotFound(i32),
    #[error("Order with transaction code {0} not found")]
    TransactionNotFound(String),
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
    #[error("orders could not be read: {0}")]
    Persistence(anyhow::Error),
}

impl OrderQueryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderQueryError::OrderNotFound(_) | OrderQueryError::TransactionNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            OrderQueryError::Reconcile(err) => err.status_code(),
            OrderQueryError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, OrderQueryError>;

/// Order reads. Every read by id or code reconciles with the gateway first, so it
/// may write the refreshed status. `list_orders` is the only pure read.
pub struct OrderQueryUseCase<O, G>
where
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    order_repo: Arc<O>,
    reconciler: OrderStatusUseCase<O, G>,
}

impl<O, G> OrderQueryUseCase<O, G>
where
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    pub fn new(order_repo: Arc<O>, gateway: Arc<G>) -> Self {
        Self {
            reconciler: OrderStatusUseCase::new(Arc::clone(&order_repo), gateway),
            order_repo,
        }
    }

    pub async fn get_order(&self, order_id: i32) -> UseCaseResult<OrderModel> {
        self.reconciler.reconcile(order_id).await?;

        let order = self
            .order_repo
            .find_order_by_id(order_id, true)
            .await
            .map_err(OrderQueryError::Persistence)?
            .ok_or(OrderQueryError::OrderNotFound(order_id))?;

        Ok(order.into())
    }

    pub async fn get_order_status(&self, order_id: i32) -> UseCaseResult<OrderStatusResponse> {
        let status = self.reconciler.reconcile(order_id).await?;

        Ok(OrderStatusResponse {
            message: "Order status updated successfully".to_string(),
            order_status: status.as_str().to_string(),
        })
    }

    pub async fn get_order_by_transaction_code(
        &self,
        transaction_code: &str,
    ) -> UseCaseResult<OrderModel> {
        let order = self
            .order_repo
            .find_order_by_transaction_code(transaction_code)
            .await
            .map_err(OrderQueryError::Persistence)?
            .ok_or_else(|| OrderQueryError::TransactionNotFound(transaction_code.to_string()))?;

        info!(
            order_id = order.id,
            transaction_code,
            "orders: resolved transaction code"
        );

        self.get_order(order.id).await
    }

    pub async fn list_orders(&self, with_details: bool) -> UseCaseResult<Vec<OrderModel>> {
        let orders = self
            .order_repo
            .list_orders(with_details)
            .await
            .map_err(OrderQueryError::Persistence)?;

        Ok(orders.into_iter().map(OrderModel::from).collect())
    }
}
