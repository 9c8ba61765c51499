use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::entities::{
    menus::MenuEntity, order_details::OrderDetailEntity, payments::PaymentEntity,
};
use crate::infra::db::postgres::schema::orders;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = orders)]
pub struct OrderEntity {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub email: String,
    pub name: String,
    pub total_price: f64,
    pub order_status: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = orders)]
pub struct InsertOrderEntity {
    pub order_date: DateTime<Utc>,
    pub email: String,
    pub name: String,
    pub total_price: f64,
    pub order_status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineWithMenu {
    pub detail: OrderDetailEntity,
    pub menu: MenuEntity,
}

/// An order row together with its lines and its payment, as read back for clients.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithRelations {
    pub order: OrderEntity,
    pub details: Vec<OrderLineWithMenu>,
    pub payment: Option<PaymentEntity>,
}

/// Ids produced by one committed checkout write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: i32,
    pub payment_id: i32,
    pub transaction_code: String,
}
