use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::usecases::{
    catalog::CatalogError,
    checkout::CheckoutError,
    login::LoginError,
    order_status::ReconcileError,
    orders::OrderQueryError,
    pricing::PricingError,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    PaymentGateway { status: StatusCode, message: String },

    #[error("Internal server error")]
    Persistence(#[from] anyhow::Error),

    #[error("{0}")]
    Unauthorized(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::PaymentGateway { status, message } => {
                (status, format!("Payment gateway error: {message}"))
            }
            AppError::Persistence(err) => {
                // Detail stays in the log.
                error!(error = ?err, "http: request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        let status = err.status_code();
        match err {
            CheckoutError::Cart(PricingError::ProductNotFound(_))
            | CheckoutError::PaymentMethodNotFound(_) => AppError::NotFound(err.to_string()),
            CheckoutError::Cart(_) => AppError::Validation(err.to_string()),
            CheckoutError::PaymentGateway(gateway) => AppError::PaymentGateway {
                status,
                message: gateway.to_string(),
            },
            CheckoutError::Persistence(source) => AppError::Persistence(source),
        }
    }
}

impl From<ReconcileError> for AppError {
    fn from(err: ReconcileError) -> Self {
        let status = err.status_code();
        match err {
            ReconcileError::PaymentNotFound(_) => AppError::NotFound(err.to_string()),
            ReconcileError::PaymentGateway(gateway) => AppError::PaymentGateway {
                status,
                message: gateway.to_string(),
            },
            ReconcileError::Persistence(source) => AppError::Persistence(source),
        }
    }
}

impl From<OrderQueryError> for AppError {
    fn from(err: OrderQueryError) -> Self {
        match err {
            OrderQueryError::OrderNotFound(_) | OrderQueryError::TransactionNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            OrderQueryError::Reconcile(inner) => inner.into(),
            OrderQueryError::Persistence(source) => AppError::Persistence(source),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(msg) => AppError::Validation(msg),
            CatalogError::MenuNotFound(_) | CatalogError::CategoryNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            CatalogError::Internal(source) => AppError::Persistence(source),
        }
    }
}

impl From<LoginError> for AppError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            LoginError::Internal(source) => AppError::Persistence(source),
        }
    }
}
