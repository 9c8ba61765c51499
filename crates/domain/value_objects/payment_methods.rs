use serde::Serialize;

use crate::domain::entities::payment_methods::PaymentMethodEntity;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentMethodModel {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    pub code: String,
}

impl From<PaymentMethodEntity> for PaymentMethodModel {
    fn from(value: PaymentMethodEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            account_number: value.account_number,
            account_name: value.account_name,
            code: value.code,
        }
    }
}
