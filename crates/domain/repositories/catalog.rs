use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::{
    categories::{CategoryEntity, InsertCategoryEntity},
    menus::{InsertMenuEntity, MenuEntity},
    payment_methods::PaymentMethodEntity,
};

/// Menu, category and payment-method reference data.
#[automock]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Returns the rows that exist; missing ids are simply absent from the result.
    async fn find_menu_items_by_ids(&self, menu_ids: Vec<i32>) -> Result<Vec<MenuEntity>>;

    async fn list_menus(&self, category_name: Option<String>) -> Result<Vec<MenuEntity>>;

    async fn find_menu_by_id(&self, menu_id: i32) -> Result<Option<MenuEntity>>;

    async fn create_menu(&self, menu: InsertMenuEntity) -> Result<MenuEntity>;

    async fn update_menu(&self, menu_id: i32, menu: InsertMenuEntity)
    -> Result<Option<MenuEntity>>;

    async fn list_categories(&self) -> Result<Vec<CategoryEntity>>;

    async fn find_category_by_id(&self, category_id: i32) -> Result<Option<CategoryEntity>>;

    async fn create_category(&self, category: InsertCategoryEntity) -> Result<CategoryEntity>;

    async fn update_category(
        &self,
        category_id: i32,
        category: InsertCategoryEntity,
    ) -> Result<Option<CategoryEntity>>;

    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethodEntity>>;

    async fn find_payment_method_by_id(
        &self,
        payment_method_id: i32,
    ) -> Result<Option<PaymentMethodEntity>>;
}
