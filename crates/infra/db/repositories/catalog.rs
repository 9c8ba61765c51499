use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use tokio::task;

use crate::{
    domain::{
        entities::{
            categories::{CategoryEntity, InsertCategoryEntity},
            menus::{InsertMenuEntity, MenuEntity},
            payment_methods::PaymentMethodEntity,
        },
        repositories::catalog::CatalogRepository,
    },
    infra::db::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{categories, menus, payment_methods},
    },
};

pub struct CatalogPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CatalogPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

// Diesel is synchronous; every query runs on the blocking threadpool.
#[async_trait]
impl CatalogRepository for CatalogPostgres {
    async fn find_menu_items_by_ids(&self, menu_ids: Vec<i32>) -> Result<Vec<MenuEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Vec<MenuEntity>> {
            let mut conn = db_pool.get()?;

            let rows = menus::table
                .filter(menus::id.eq_any(menu_ids))
                .select(MenuEntity::as_select())
                .load::<MenuEntity>(&mut conn)?;

            Ok(rows)
        })
        .await??)
    }

    async fn list_menus(&self, category_name: Option<String>) -> Result<Vec<MenuEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Vec<MenuEntity>> {
            let mut conn = db_pool.get()?;

            let rows = match category_name {
                Some(category_name) => menus::table
                    .inner_join(categories::table)
                    .filter(categories::category_name.eq(category_name))
                    .order(menus::id.asc())
                    .select(MenuEntity::as_select())
                    .load::<MenuEntity>(&mut conn)?,
                None => menus::table
                    .order(menus::id.asc())
                    .select(MenuEntity::as_select())
                    .load::<MenuEntity>(&mut conn)?,
            };

            Ok(rows)
        })
        .await??)
    }

    async fn find_menu_by_id(&self, menu_id: i32) -> Result<Option<MenuEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<MenuEntity>> {
            let mut conn = db_pool.get()?;

            let row = menus::table
                .find(menu_id)
                .select(MenuEntity::as_select())
                .first::<MenuEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn create_menu(&self, menu: InsertMenuEntity) -> Result<MenuEntity> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<MenuEntity> {
            let mut conn = db_pool.get()?;

            let row = insert_into(menus::table)
                .values(&menu)
                .returning(MenuEntity::as_returning())
                .get_result::<MenuEntity>(&mut conn)?;

            Ok(row)
        })
        .await??)
    }

    async fn update_menu(
        &self,
        menu_id: i32,
        menu: InsertMenuEntity,
    ) -> Result<Option<MenuEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<MenuEntity>> {
            let mut conn = db_pool.get()?;

            let row = update(menus::table.find(menu_id))
                .set(&menu)
                .returning(MenuEntity::as_returning())
                .get_result::<MenuEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn list_categories(&self) -> Result<Vec<CategoryEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Vec<CategoryEntity>> {
            let mut conn = db_pool.get()?;

            let rows = categories::table
                .order(categories::id.asc())
                .select(CategoryEntity::as_select())
                .load::<CategoryEntity>(&mut conn)?;

            Ok(rows)
        })
        .await??)
    }

    async fn find_category_by_id(&self, category_id: i32) -> Result<Option<CategoryEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<CategoryEntity>> {
            let mut conn = db_pool.get()?;

            let row = categories::table
                .find(category_id)
                .select(CategoryEntity::as_select())
                .first::<CategoryEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn create_category(&self, category: InsertCategoryEntity) -> Result<CategoryEntity> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<CategoryEntity> {
            let mut conn = db_pool.get()?;

            let row = insert_into(categories::table)
                .values(&category)
                .returning(CategoryEntity::as_returning())
                .get_result::<CategoryEntity>(&mut conn)?;

            Ok(row)
        })
        .await??)
    }

    async fn update_category(
        &self,
        category_id: i32,
        category: InsertCategoryEntity,
    ) -> Result<Option<CategoryEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<CategoryEntity>> {
            let mut conn = db_pool.get()?;

            let row = update(categories::table.find(category_id))
                .set(&category)
                .returning(CategoryEntity::as_returning())
                .get_result::<CategoryEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }

    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethodEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Vec<PaymentMethodEntity>> {
            let mut conn = db_pool.get()?;

            let rows = payment_methods::table
                .order(payment_methods::id.asc())
                .select(PaymentMethodEntity::as_select())
                .load::<PaymentMethodEntity>(&mut conn)?;

            Ok(rows)
        })
        .await??)
    }

    async fn find_payment_method_by_id(
        &self,
        payment_method_id: i32,
    ) -> Result<Option<PaymentMethodEntity>> {
        let db_pool = Arc::clone(&self.db_pool);

        Ok(task::spawn_blocking(move || -> Result<Option<PaymentMethodEntity>> {
            let mut conn = db_pool.get()?;

            let row = payment_methods::table
                .find(payment_method_id)
                .select(PaymentMethodEntity::as_select())
                .first::<PaymentMethodEntity>(&mut conn)
                .optional()?;

            Ok(row)
        })
        .await??)
    }
}
