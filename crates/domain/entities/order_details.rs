use diesel::prelude::*;

use crate::infra::db::postgres::schema::order_details;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = order_details)]
pub struct OrderDetailEntity {
    pub id: i32,
    pub order_id: i32,
    pub menu_id: i32,
    pub quantity: i32,
    pub subtotal_price: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = order_details)]
pub struct InsertOrderDetailEntity {
    pub order_id: i32,
    pub menu_id: i32,
    pub quantity: i32,
    pub subtotal_price: f64,
    pub notes: String,
}

/// A priced cart line waiting for its order id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub menu_id: i32,
    pub quantity: i32,
    pub subtotal_price: f64,
    pub notes: String,
}

impl NewOrderLine {
    pub fn for_order(&self, order_id: i32) -> InsertOrderDetailEntity {
        InsertOrderDetailEntity {
            order_id,
            menu_id: self.menu_id,
            quantity: self.quantity,
            subtotal_price: self.subtotal_price,
            notes: self.notes.clone(),
        }
    }
}
