use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use crates::{
    domain::{
        repositories::{catalog::CatalogRepository, orders::OrderRepository},
        value_objects::checkout::{CheckoutRequest, CheckoutResponse},
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{catalog::CatalogPostgres, orders::OrderPostgres},
    },
    notifications::InvoiceNotifier,
    payments::midtrans_client::MidtransClient,
};
use serde::Serialize;

use crate::{
    axum_http::{error_responses::AppError, extractors::AppJson},
    usecases::{
        checkout::{CheckoutNotifier, CheckoutUseCase},
        payment_gateway::PaymentGateway,
    },
};

#[derive(Debug, Serialize)]
pub struct CheckoutEnvelope {
    pub status: &'static str,
    pub message: &'static str,
    pub code: u16,
    pub data: CheckoutResponse,
}

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    gateway: Arc<MidtransClient>,
    notifier: Arc<InvoiceNotifier>,
) -> Router {
    let catalog_repository = CatalogPostgres::new(Arc::clone(&db_pool));
    let order_repository = OrderPostgres::new(Arc::clone(&db_pool));
    let checkout_usecase = CheckoutUseCase::new(
        Arc::new(catalog_repository),
        Arc::new(order_repository),
        gateway,
        notifier,
    );

    Router::new()
        .route("/", post(checkout))
        .with_state(Arc::new(checkout_usecase))
}

pub async fn checkout<C, O, G, N>(
    State(checkout_usecase): State<Arc<CheckoutUseCase<C, O, G, N>>>,
    AppJson(request): AppJson<CheckoutRequest>,
) -> Result<impl IntoResponse, AppError>
where
    C: CatalogRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
    N: CheckoutNotifier + Send + Sync + 'static,
{
    let response = checkout_usecase.checkout(request).await?;

    Ok(Json(CheckoutEnvelope {
        status: "OK",
        message: "Successfully created transaction",
        code: StatusCode::OK.as_u16(),
        data: response,
    }))
}
