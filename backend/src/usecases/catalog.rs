use std::sync::Arc;

use axum::http::StatusCode;
use crates::domain::{
    repositories::catalog::CatalogRepository,
    value_objects::{
        categories::{CategoryModel, UpsertCategoryModel},
        menus::{MenuModel, UpsertMenuModel},
        payment_methods::PaymentMethodModel,
    },
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),
    #[error("Menu with ID {0} not found")]
    MenuNotFound(i32),
    #[error("Category with ID {0} not found")]
    CategoryNotFound(i32),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::MenuNotFound(_) | CatalogError::CategoryNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, CatalogError>;

pub struct CatalogUseCase<C>
where
    C: CatalogRepository + Send + Sync + 'static,
{
    catalog_repo: Arc<C>,
}

impl<C> CatalogUseCase<C>
where
    C: CatalogRepository + Send + Sync + 'static,
{
    pub fn new(catalog_repo: Arc<C>) -> Self {
        Self { catalog_repo }
    }

    pub async fn list_menus(&self, category: Option<String>) -> UseCaseResult<Vec<MenuModel>> {
        let category = category.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());
        let menus = self.catalog_repo.list_menus(category).await?;
        Ok(menus.into_iter().map(MenuModel::from).collect())
    }

    pub async fn get_menu(&self, menu_id: i32) -> UseCaseResult<MenuModel> {
        self.catalog_repo
            .find_menu_by_id(menu_id)
            .await?
            .map(MenuModel::from)
            .ok_or(CatalogError::MenuNotFound(menu_id))
    }

    pub async fn create_menu(&self, payload: UpsertMenuModel) -> UseCaseResult<MenuModel> {
        payload.validate().map_err(CatalogError::Validation)?;
        self.ensure_category(payload.category_id).await?;

        let menu = self.catalog_repo.create_menu(payload.to_entity()).await?;
        info!(menu_id = menu.id, "catalog: menu created");
        Ok(menu.into())
    }

    pub async fn update_menu(
        &self,
        menu_id: i32,
        payload: UpsertMenuModel,
    ) -> UseCaseResult<MenuModel> {
        payload.validate().map_err(CatalogError::Validation)?;
        self.ensure_category(payload.category_id).await?;

        let menu = self
            .catalog_repo
            .update_menu(menu_id, payload.to_entity())
            .await?
            .ok_or(CatalogError::MenuNotFound(menu_id))?;
        info!(menu_id, "catalog: menu updated");
        Ok(menu.into())
    }

    pub async fn list_categories(&self) -> UseCaseResult<Vec<CategoryModel>> {
        let categories = self.catalog_repo.list_categories().await?;
        Ok(categories.into_iter().map(CategoryModel::from).collect())
    }

    pub async fn get_category(&self, category_id: i32) -> UseCaseResult<CategoryModel> {
        self.catalog_repo
            .find_category_by_id(category_id)
            .await?
            .map(CategoryModel::from)
            .ok_or(CatalogError::CategoryNotFound(category_id))
    }

    pub async fn create_category(
        &self,
        payload: UpsertCategoryModel,
    ) -> UseCaseResult<CategoryModel> {
        payload.validate().map_err(CatalogError::Validation)?;

        let category = self.catalog_repo.create_category(payload.to_entity()).await?;
        info!(category_id = category.id, "catalog: category created");
        Ok(category.into())
    }

    pub async fn update_category(
        &self,
        category_id: i32,
        payload: UpsertCategoryModel,
    ) -> UseCaseResult<CategoryModel> {
        payload.validate().map_err(CatalogError::Validation)?;

        let category = self
            .catalog_repo
            .update_category(category_id, payload.to_entity())
            .await?
            .ok_or(CatalogError::CategoryNotFound(category_id))?;
        info!(category_id, "catalog: category updated");
        Ok(category.into())
    }

    pub async fn list_payment_methods(&self) -> UseCaseResult<Vec<PaymentMethodModel>> {
        let methods = self.catalog_repo.list_payment_methods().await?;
        Ok(methods.into_iter().map(PaymentMethodModel::from).collect())
    }

    async fn ensure_category(&self, category_id: i32) -> UseCaseResult<()> {
        match self.catalog_repo.find_category_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(CatalogError::Validation(format!(
                "Category with ID {category_id} not found"
            ))),
        }
    }
}
