use diesel::prelude::*;

use crate::infra::db::postgres::schema::payment_methods;

/// Reference data: one row per way a customer can pay. `code` selects the checkout branch.
#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payment_methods)]
pub struct PaymentMethodEntity {
    pub id: i32,
    pub name: String,
    pub account_number: Option<String>,
    pub account_name: Option<String>,
    pub code: String,
}
