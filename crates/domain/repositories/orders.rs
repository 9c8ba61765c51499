use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::{
    order_details::NewOrderLine,
    orders::{InsertOrderEntity, OrderEntity, OrderWithRelations, PlacedOrder},
    payments::{PaymentDraft, PaymentEntity},
};
use crate::domain::value_objects::enums::order_statuses::OrderStatus;

#[automock]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Writes the order, one detail row per line and the payment in a single transaction.
    /// Either everything is committed or nothing is.
    async fn place_order(
        &self,
        order: InsertOrderEntity,
        lines: Vec<NewOrderLine>,
        payment: PaymentDraft,
    ) -> Result<PlacedOrder>;

    async fn update_order_status(&self, order_id: i32, status: OrderStatus) -> Result<()>;

    async fn update_payment_status(&self, order_id: i32, status: OrderStatus) -> Result<()>;

    async fn find_payment_by_order_id(&self, order_id: i32) -> Result<Option<PaymentEntity>>;

    /// Payment is always attached; lines only when `with_details` is set.
    async fn find_order_by_id(
        &self,
        order_id: i32,
        with_details: bool,
    ) -> Result<Option<OrderWithRelations>>;

    async fn find_order_by_transaction_code(
        &self,
        transaction_code: &str,
    ) -> Result<Option<OrderEntity>>;

    async fn list_orders(&self, with_details: bool) -> Result<Vec<OrderWithRelations>>;
}
