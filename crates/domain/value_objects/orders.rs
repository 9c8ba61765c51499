use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    orders::{OrderLineWithMenu, OrderWithRelations},
    payments::PaymentEntity,
};
use crate::domain::value_objects::menus::MenuModel;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentModel {
    pub id: i32,
    pub order_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_account_name: Option<String>,
    pub transaction_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_qr_code_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_expired_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentEntity> for PaymentModel {
    fn from(value: PaymentEntity) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            payment_method: value.payment_method,
            payment_status: value.payment_status,
            payment_account_number: value.payment_account_number,
            payment_account_name: value.payment_account_name,
            transaction_code: value.transaction_code,
            payment_qr_code_url: value.payment_qr_code_url,
            payment_expired_date: value.payment_expired_date,
            payment_transaction_id: value.payment_transaction_id,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderDetailModel {
    pub id: i32,
    pub order_id: i32,
    pub menu_id: i32,
    pub quantity: i32,
    pub subtotal_price: f64,
    pub notes: String,
    pub menu_detail: MenuModel,
}

impl From<OrderLineWithMenu> for OrderDetailModel {
    fn from(value: OrderLineWithMenu) -> Self {
        let OrderLineWithMenu { detail, menu } = value;
        Self {
            id: detail.id,
            order_id: detail.order_id,
            menu_id: detail.menu_id,
            quantity: detail.quantity,
            subtotal_price: detail.subtotal_price,
            notes: detail.notes,
            menu_detail: menu.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderModel {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub email: String,
    pub name: String,
    pub total_price: f64,
    pub order_status: String,
    pub payments: Option<PaymentModel>,
    pub order_details: Vec<OrderDetailModel>,
}

impl From<OrderWithRelations> for OrderModel {
    fn from(value: OrderWithRelations) -> Self {
        let OrderWithRelations {
            order,
            details,
            payment,
        } = value;
        Self {
            id: order.id,
            order_date: order.order_date,
            email: order.email,
            name: order.name,
            total_price: order.total_price,
            order_status: order.order_status,
            payments: payment.map(PaymentModel::from),
            order_details: details.into_iter().map(OrderDetailModel::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderStatusResponse {
    pub message: String,
    pub order_status: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListOrdersQuery {
    pub with_details: Option<bool>,
}
