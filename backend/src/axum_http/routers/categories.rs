use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use crates::{
    domain::{
        repositories::catalog::CatalogRepository,
        value_objects::categories::UpsertCategoryModel,
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::catalog::CatalogPostgres,
    },
};

use crate::{
    auth::AuthUser,
    axum_http::{error_responses::AppError, extractors::{AppJson, AppPath}},
    usecases::catalog::CatalogUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let catalog_repository = CatalogPostgres::new(Arc::clone(&db_pool));
    let catalog_usecase = CatalogUseCase::new(Arc::new(catalog_repository));

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", get(get_category).put(update_category))
        .with_state(Arc::new(catalog_usecase))
}

pub async fn list_categories<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: CatalogRepository + Send + Sync + 'static,
{
    Ok(Json(catalog_usecase.list_categories().await?))
}

pub async fn get_category<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
    AppPath(category_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError>
where
    T: CatalogRepository + Send + Sync + 'static,
{
    Ok(Json(catalog_usecase.get_category(category_id).await?))
}

pub async fn create_category<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
    _auth: AuthUser,
    AppJson(payload): AppJson<UpsertCategoryModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: CatalogRepository + Send + Sync + 'static,
{
    let category = catalog_usecase.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
    _auth: AuthUser,
    AppPath(category_id): AppPath<i32>,
    AppJson(payload): AppJson<UpsertCategoryModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: CatalogRepository + Send + Sync + 'static,
{
    Ok(Json(
        catalog_usecase.update_category(category_id, payload).await?,
    ))
}
