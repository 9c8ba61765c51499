use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::value_objects::references::transaction_code;
use crate::infra::db::postgres::schema::payments;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payments)]
pub struct PaymentEntity {
    pub id: i32,
    pub order_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    pub payment_account_number: Option<String>,
    pub payment_account_name: Option<String>,
    pub transaction_code: String,
    pub payment_qr_code_url: Option<String>,
    pub payment_expired_date: Option<String>,
    pub payment_transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = payments)]
pub struct InsertPaymentEntity {
    pub order_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    pub payment_account_number: Option<String>,
    pub payment_account_name: Option<String>,
    pub transaction_code: String,
    pub payment_qr_code_url: Option<String>,
    pub payment_expired_date: Option<String>,
    pub payment_transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Everything about a payment row that is known before the order row exists.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    pub payment_method: String,
    pub payment_status: String,
    pub payment_account_number: Option<String>,
    pub payment_account_name: Option<String>,
    pub payment_qr_code_url: Option<String>,
    pub payment_expired_date: Option<String>,
    pub payment_transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PaymentDraft {
    /// Binds the draft to its order; the transaction code is derived from `order_id`.
    pub fn for_order(&self, order_id: i32) -> InsertPaymentEntity {
        InsertPaymentEntity {
            order_id,
            payment_method: self.payment_method.clone(),
            payment_status: self.payment_status.clone(),
            payment_account_number: self.payment_account_number.clone(),
            payment_account_name: self.payment_account_name.clone(),
            transaction_code: transaction_code(order_id),
            payment_qr_code_url: self.payment_qr_code_url.clone(),
            payment_expired_date: self.payment_expired_date.clone(),
            payment_transaction_id: self.payment_transaction_id.clone(),
            created_at: self.created_at,
        }
    }
}
