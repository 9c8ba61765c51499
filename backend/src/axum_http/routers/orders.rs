use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use crates::{
    domain::{repositories::orders::OrderRepository, value_objects::orders::ListOrdersQuery},
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::orders::OrderPostgres,
    },
    payments::midtrans_client::MidtransClient,
};

use crate::{
    auth::AuthUser,
    axum_http::{
        error_responses::AppError,
        extractors::{AppPath, AppQuery},
    },
    usecases::{orders::OrderQueryUseCase, payment_gateway::PaymentGateway},
};

/// Reads by id or transaction code reconcile with the gateway first and may update
/// the stored status. The list endpoint does not.
pub fn routes(db_pool: Arc<PgPoolSquad>, gateway: Arc<MidtransClient>) -> Router {
    let order_repository = OrderPostgres::new(Arc::clone(&db_pool));
    let orders_usecase = OrderQueryUseCase::new(Arc::new(order_repository), gateway);

    Router::new()
        .route("/", get(list_orders))
        .route("/:id", get(get_order))
        .route("/:id/status", get(get_order_status))
        .route("/transaction/:code", get(get_order_by_transaction_code))
        .with_state(Arc::new(orders_usecase))
}

pub async fn list_orders<O, G>(
    State(orders_usecase): State<Arc<OrderQueryUseCase<O, G>>>,
    _auth: AuthUser,
    AppQuery(query): AppQuery<ListOrdersQuery>,
) -> Result<impl IntoResponse, AppError>
where
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    let orders = orders_usecase
        .list_orders(query.with_details.unwrap_or(false))
        .await?;
    Ok(Json(orders))
}

pub async fn get_order<O, G>(
    State(orders_usecase): State<Arc<OrderQueryUseCase<O, G>>>,
    AppPath(order_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError>
where
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    Ok(Json(orders_usecase.get_order(order_id).await?))
}

pub async fn get_order_status<O, G>(
    State(orders_usecase): State<Arc<OrderQueryUseCase<O, G>>>,
    AppPath(order_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError>
where
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    Ok(Json(orders_usecase.get_order_status(order_id).await?))
}

pub async fn get_order_by_transaction_code<O, G>(
    State(orders_usecase): State<Arc<OrderQueryUseCase<O, G>>>,
    AppPath(transaction_code): AppPath<String>,
) -> Result<impl IntoResponse, AppError>
where
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    Ok(Json(
        orders_usecase
            .get_order_by_transaction_code(&transaction_code)
            .await?,
    ))
}
