use diesel::prelude::*;

use crate::infra::db::postgres::schema::categories;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = categories)]
pub struct CategoryEntity {
    pub id: i32,
    pub category_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Insertable, AsChangeset)]
#[diesel(table_name = categories)]
pub struct InsertCategoryEntity {
    pub category_name: String,
    pub description: String,
}
