use serde::{Deserialize, Serialize};

use crate::domain::value_objects::menus::MenuModel;

/// One client-submitted cart line. Any price the client sends is not read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CartLine {
    pub id: i32,
    pub quantity: i32,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    pub name: String,
    pub email: String,
    pub payment_method_id: i32,
    pub products: Vec<CartLine>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutLine {
    pub product: MenuModel,
    pub quantity: i32,
    pub notes: String,
    pub subtotal: f64,
}

/// Payment instructions shown to the customer. Only populated fields are serialized.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_account_name: Option<String>,
    pub payment_method: String,
    pub payment_status: String,
    /// Milliseconds the client should allow for payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_expired_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutSummary {
    pub name: String,
    pub email: String,
    pub total: f64,
    pub transaction_code: String,
    pub payment_details: PaymentDetails,
    pub product_details: Vec<CheckoutLine>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutResponse {
    pub order_id: i32,
    pub transaction_code: String,
    pub summary: CheckoutSummary,
}
