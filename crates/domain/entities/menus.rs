use diesel::prelude::*;

use crate::infra::db::postgres::schema::menus;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = menus)]
pub struct MenuEntity {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category_id: i32,
    pub image_url: String,
    pub rating: i32,
    pub is_available: bool,
}

/// Used for both inserts and full-row updates of `menus`.
#[derive(Debug, Clone, PartialEq, Insertable, AsChangeset)]
#[diesel(table_name = menus)]
pub struct InsertMenuEntity {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category_id: i32,
    pub image_url: String,
    pub rating: i32,
    pub is_available: bool,
}
