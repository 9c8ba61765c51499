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
        value_objects::menus::{MenuFilter, UpsertMenuModel},
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::catalog::CatalogPostgres,
    },
};

use crate::{
    auth::AuthUser,
    axum_http::{
        error_responses::AppError,
        extractors::{AppJson, AppPath, AppQuery},
    },
    usecases::catalog::CatalogUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let catalog_repository = CatalogPostgres::new(Arc::clone(&db_pool));
    let catalog_usecase = CatalogUseCase::new(Arc::new(catalog_repository));

    Router::new()
        .route("/", get(list_menus).post(create_menu))
        .route("/:id", get(get_menu).put(update_menu))
        .with_state(Arc::new(catalog_usecase))
}

pub async fn list_menus<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
    AppQuery(filter): AppQuery<MenuFilter>,
) -> Result<impl IntoResponse, AppError>
where
    T: CatalogRepository + Send + Sync + 'static,
{
    Ok(Json(catalog_usecase.list_menus(filter.category).await?))
}

pub async fn get_menu<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
    AppPath(menu_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError>
where
    T: CatalogRepository + Send + Sync + 'static,
{
    Ok(Json(catalog_usecase.get_menu(menu_id).await?))
}

pub async fn create_menu<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
    _auth: AuthUser,
    AppJson(payload): AppJson<UpsertMenuModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: CatalogRepository + Send + Sync + 'static,
{
    let menu = catalog_usecase.create_menu(payload).await?;
    Ok((StatusCode::CREATED, Json(menu)))
}

pub async fn update_menu<T>(
    State(catalog_usecase): State<Arc<CatalogUseCase<T>>>,
    _auth: AuthUser,
    AppPath(menu_id): AppPath<i32>,
    AppJson(payload): AppJson<UpsertMenuModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: CatalogRepository + Send + Sync + 'static,
{
    Ok(Json(catalog_usecase.update_menu(menu_id, payload).await?))
}
