use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use crates::{
    domain::repositories::catalog::CatalogRepository,
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::catalog::CatalogPostgres,
    },
};

use crate::{axum_http::error_responses::AppError, usecases::catalog::CatalogUseCase};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let catalog_repository = CatalogPostgres::new(Arc::clone(&db_pool));
    let catalog_usecase = CatalogUseCase::new(Arc::new(catalog_repository));

    Router::new()
        .route("/", get(list_payment_methods))
        .with_state(Arc::new(catalog_usecase))
}

pub async fn list_payment_methods<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: CatalogRepository + Send + Sync + 'static,
{
    Ok(Json(catalog_usecase.list_payment_methods().await?))
}
