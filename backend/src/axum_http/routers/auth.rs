use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use crates::{
    domain::repositories::users::UserRepository,
    infra::db::{postgres::postgres_connection::PgPoolSquad, repositories::users::UserPostgres},
};

use crate::{
    axum_http::{error_responses::AppError, extractors::AppJson},
    config::config_model::Jwt,
    usecases::login::{LoginRequest, LoginUseCase},
};

pub fn routes(db_pool: Arc<PgPoolSquad>, jwt: &Jwt) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let login_usecase =
        LoginUseCase::new(Arc::new(user_repository), jwt.secret.clone(), jwt.ttl_hours);

    Router::new()
        .route("/", post(login))
        .with_state(Arc::new(login_usecase))
}

pub async fn login<T>(
    State(login_usecase): State<Arc<LoginUseCase<T>>>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError>
where
    T: UserRepository + Send + Sync + 'static,
{
    let response = login_usecase.login(request).await?;
    Ok(Json(response))
}
