use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Utc;
use crates::{
    domain::{
        entities::{
            order_details::NewOrderLine, orders::InsertOrderEntity,
            payment_methods::PaymentMethodEntity, payments::PaymentDraft,
        },
        repositories::{catalog::CatalogRepository, orders::OrderRepository},
        value_objects::{
            checkout::{CheckoutLine, CheckoutRequest, CheckoutResponse, CheckoutSummary, PaymentDetails},
            enums::{order_statuses::OrderStatus, payment_channels::PaymentChannel},
            references::gateway_order_reference,
        },
    },
    notifications::InvoiceNotifier,
    payments::midtrans_client::{
        ChargeResponse, CustomerDetails, GatewayError, ItemDetails, QrisChargeRequest,
    },
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::payment_gateway::PaymentGateway;
use super::pricing::{PricingError, price_cart, validate_cart};

/// Receives every committed checkout. Delivery happens off the request path.
#[cfg_attr(test, mockall::automock)]
pub trait CheckoutNotifier: Send + Sync {
    fn notify(&self, summary: CheckoutSummary);
}

impl CheckoutNotifier for InvoiceNotifier {
    fn notify(&self, summary: CheckoutSummary) {
        self.try_notify(summary);
    }
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Cart(#[from] PricingError),
    #[error("Payment method not found")]
    PaymentMethodNotFound(i32),
    #[error(transparent)]
    PaymentGateway(#[from] GatewayError),
    #[error("checkout could not be stored: {0}")]
    Persistence(anyhow::Error),
}

impl CheckoutError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CheckoutError::Cart(PricingError::ProductNotFound(_)) => StatusCode::NOT_FOUND,
            CheckoutError::Cart(_) => StatusCode::BAD_REQUEST,
            CheckoutError::PaymentMethodNotFound(_) => StatusCode::NOT_FOUND,
            CheckoutError::PaymentGateway(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            CheckoutError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, CheckoutError>;

pub struct CheckoutUseCase<C, O, G, N>
where
    C: CatalogRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
    N: CheckoutNotifier + Send + Sync + 'static,
{
    catalog_repo: Arc<C>,
    order_repo: Arc<O>,
    gateway: Arc<G>,
    notifier: Arc<N>,
}

impl<C, O, G, N> CheckoutUseCase<C, O, G, N>
where
    C: CatalogRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
    N: CheckoutNotifier + Send + Sync + 'static,
{
    pub fn new(catalog_repo: Arc<C>, order_repo: Arc<O>, gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self {
            catalog_repo,
            order_repo,
            gateway,
            notifier,
        }
    }

    /// Validates and prices the cart, charges online methods, then writes the order,
    /// its lines and its payment in one transaction. Nothing is written when any
    /// earlier step fails.
    pub async fn checkout(&self, request: CheckoutRequest) -> UseCaseResult<CheckoutResponse> {
        validate_cart(&request.products)?;

        let menu_ids = request.products.iter().map(|line| line.id).collect();
        let menu_items = self
            .catalog_repo
            .find_menu_items_by_ids(menu_ids)
            .await
            .map_err(CheckoutError::Persistence)?;
        let priced = price_cart(&request.products, menu_items)?;

        let payment_method = self
            .catalog_repo
            .find_payment_method_by_id(request.payment_method_id)
            .await
            .map_err(CheckoutError::Persistence)?
            .ok_or(CheckoutError::PaymentMethodNotFound(request.payment_method_id))?;
        let channel = PaymentChannel::from_code(&payment_method.code);

        let now = Utc::now();
        let charge = if channel.settles_online() {
            let charge_request = QrisChargeRequest {
                order_reference: gateway_order_reference(now, Uuid::new_v4()),
                items: gateway_items(&priced.lines),
                customer: CustomerDetails {
                    first_name: request.name.clone(),
                    last_name: String::new(),
                    email: request.email.clone(),
                },
            };

            let charge = self
                .gateway
                .create_transaction(charge_request)
                .await
                .inspect_err(|err| {
                    error!(
                        payment_method_id = payment_method.id,
                        error = %err,
                        "checkout: gateway charge failed"
                    )
                })?;
            Some(charge)
        } else {
            None
        };

        let order = InsertOrderEntity {
            order_date: now,
            email: request.email.clone(),
            name: request.name.clone(),
            total_price: priced.total,
            order_status: OrderStatus::Pending.as_str().to_string(),
        };
        let lines = priced
            .lines
            .iter()
            .map(|line| NewOrderLine {
                menu_id: line.product.id,
                quantity: line.quantity,
                subtotal_price: line.subtotal,
                notes: line.notes.clone(),
            })
            .collect();
        let draft = payment_draft(&payment_method, charge.as_ref(), now);

        let placed = self
            .order_repo
            .place_order(order, lines, draft.clone())
            .await
            .map_err(|err| {
                error!(error = ?err, "checkout: order transaction failed");
                CheckoutError::Persistence(err)
            })?;

        info!(
            order_id = placed.order_id,
            transaction_code = %placed.transaction_code,
            total = priced.total,
            channel = %channel,
            "checkout: order placed"
        );

        let summary = CheckoutSummary {
            name: request.name,
            email: request.email,
            total: priced.total,
            transaction_code: placed.transaction_code.clone(),
            payment_details: PaymentDetails {
                payment_account_number: draft.payment_account_number,
                payment_account_name: draft.payment_account_name,
                payment_method: draft.payment_method,
                payment_status: draft.payment_status,
                payment_expired_time: channel.expiry_window_ms(),
                qr_image_url: draft.payment_qr_code_url,
            },
            product_details: priced.lines,
        };

        if summary.email.trim().is_empty() {
            warn!(order_id = placed.order_id, "checkout: no email to send the invoice to");
        } else {
            self.notifier.notify(summary.clone());
        }

        Ok(CheckoutResponse {
            order_id: placed.order_id,
            transaction_code: placed.transaction_code,
            summary,
        })
    }
}

/// Prefix of menu item ids in gateway item lists; keeps them apart from the tax line.
const GATEWAY_ITEM_PREFIX: &str = "PRODUCTID-";

fn gateway_items(lines: &[CheckoutLine]) -> Vec<ItemDetails> {
    lines
        .iter()
        .map(|line| ItemDetails {
            id: format!("{GATEWAY_ITEM_PREFIX}{}", line.product.id),
            price: line.product.price,
            quantity: line.quantity,
            name: line.product.name.clone(),
        })
        .collect()
}

/// Online charges carry the gateway's QR, expiry and id; other methods expose the
/// static account details of the payment method.
fn payment_draft(
    payment_method: &PaymentMethodEntity,
    charge: Option<&ChargeResponse>,
    now: chrono::DateTime<Utc>,
) -> PaymentDraft {
    let (account_number, account_name) = match charge {
        Some(_) => (None, None),
        None => (
            payment_method.account_number.clone().filter(|v| !v.is_empty()),
            payment_method.account_name.clone().filter(|v| !v.is_empty()),
        ),
    };

    PaymentDraft {
        payment_method: payment_method.code.clone(),
        payment_status: OrderStatus::Pending.as_payment_str().to_string(),
        payment_account_number: account_number,
        payment_account_name: account_name,
        payment_qr_code_url: charge.and_then(ChargeResponse::qr_code_url),
        payment_expired_date: charge.and_then(|c| c.expiry_time.clone()),
        payment_transaction_id: charge.map(|c| c.transaction_id.clone()),
        created_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::payment_gateway::MockPaymentGateway;
    use crates::{
        domain::{
            entities::{menus::MenuEntity, orders::PlacedOrder},
            repositories::{catalog::MockCatalogRepository, orders::MockOrderRepository},
            value_objects::checkout::CartLine,
        },
        payments::midtrans_client::ChargeAction,
    };
    use mockall::predicate::eq;

    fn menu(id: i32, price: f64) -> MenuEntity {
        MenuEntity {
            id,
            name: format!("Menu {id}"),
            price,
            description: String::new(),
            category_id: 1,
            image_url: String::new(),
            rating: 5,
            is_available: true,
        }
    }

    fn method(id: i32, code: &str) -> PaymentMethodEntity {
        PaymentMethodEntity {
            id,
            name: code.to_uppercase(),
            account_number: Some("1234567890".to_string()),
            account_name: Some("Pesta Pasta".to_string()),
            code: code.to_string(),
        }
    }

    fn request(products: Vec<CartLine>, payment_method_id: i32) -> CheckoutRequest {
        CheckoutRequest {
            name: "Rina".to_string(),
            email: "rina@example.com".to_string(),
            payment_method_id,
            products,
        }
    }

    fn cart(lines: &[(i32, i32)]) -> Vec<CartLine> {
        lines
            .iter()
            .map(|(id, quantity)| CartLine {
                id: *id,
                quantity: *quantity,
                notes: String::new(),
            })
            .collect()
    }

    fn catalog_with(menus: Vec<MenuEntity>, payment_method: PaymentMethodEntity) -> MockCatalogRepository {
        let mut catalog_repo = MockCatalogRepository::new();
        catalog_repo
            .expect_find_menu_items_by_ids()
            .returning(move |_| Ok(menus.clone()));
        let method_id = payment_method.id;
        catalog_repo
            .expect_find_payment_method_by_id()
            .with(eq(method_id))
            .returning(move |_| Ok(Some(payment_method.clone())));
        catalog_repo
    }

    fn charge() -> ChargeResponse {
        ChargeResponse {
            status_code: "201".to_string(),
            status_message: None,
            transaction_id: "trx-1".to_string(),
            order_id: None,
            transaction_status: Some("pending".to_string()),
            actions: vec![ChargeAction {
                name: "generate-qr-code".to_string(),
                method: "GET".to_string(),
                url: "https://api.midtrans.com/v2/qris/trx-1/qr-code".to_string(),
            }],
            qr_string: None,
            expiry_time: Some("2024-11-20 10:15:00".to_string()),
        }
    }

    fn placed(order_id: i32) -> PlacedOrder {
        PlacedOrder {
            order_id,
            payment_id: 1,
            transaction_code: format!("TXN{order_id}"),
        }
    }

    #[tokio::test]
    async fn bank_checkout_totals_catalog_prices_and_exposes_account() {
        let catalog_repo = catalog_with(vec![menu(1, 25000.0), menu(2, 40000.0)], method(2, "bank"));

        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_place_order()
            .withf(|order, lines, payment| {
                order.total_price == 90000.0
                    && order.order_status == "Pending"
                    && lines.len() == 2
                    && lines[0].subtotal_price == 50000.0
                    && payment.payment_status == "pending"
                    && payment.payment_transaction_id.is_none()
                    && payment.payment_account_number.as_deref() == Some("1234567890")
            })
            .times(1)
            .returning(|_, _, _| Ok(placed(42)));

        let mut notifier = MockCheckoutNotifier::new();
        notifier
            .expect_notify()
            .withf(|summary| summary.transaction_code == "TXN42")
            .times(1)
            .return_const(());

        let usecase = CheckoutUseCase::new(
            Arc::new(catalog_repo),
            Arc::new(order_repo),
            Arc::new(MockPaymentGateway::new()),
            Arc::new(notifier),
        );

        let response = usecase
            .checkout(request(cart(&[(1, 2), (2, 1)]), 2))
            .await
            .unwrap();

        assert_eq!(response.order_id, 42);
        assert_eq!(response.transaction_code, "TXN42");
        assert_eq!(response.summary.total, 90000.0);
        let details = &response.summary.payment_details;
        assert_eq!(details.payment_expired_time, Some(600_000));
        assert_eq!(details.payment_account_name.as_deref(), Some("Pesta Pasta"));
        assert!(details.qr_image_url.is_none());
    }

    #[tokio::test]
    async fn qris_checkout_carries_gateway_charge() {
        let catalog_repo = catalog_with(vec![menu(1, 25000.0)], method(1, "qris"));

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_create_transaction()
            .withf(|request| {
                request.order_reference.starts_with("ORDER-")
                    && request.items.len() == 1
                    && request.items[0].quantity == 2
                    && request.items[0].id == "PRODUCTID-1"
                    && request.customer.email == "rina@example.com"
            })
            .times(1)
            .returning(|_| Ok(charge()));

        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_place_order()
            .withf(|order, _, payment| {
                order.total_price == 50000.0
                    && payment.payment_transaction_id.as_deref() == Some("trx-1")
                    && payment.payment_expired_date.as_deref() == Some("2024-11-20 10:15:00")
                    && payment.payment_account_number.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(placed(7)));

        let mut notifier = MockCheckoutNotifier::new();
        notifier.expect_notify().times(1).return_const(());

        let usecase = CheckoutUseCase::new(
            Arc::new(catalog_repo),
            Arc::new(order_repo),
            Arc::new(gateway),
            Arc::new(notifier),
        );

        let response = usecase.checkout(request(cart(&[(1, 2)]), 1)).await.unwrap();

        let details = &response.summary.payment_details;
        assert_eq!(
            details.qr_image_url.as_deref(),
            Some("https://api.midtrans.com/v2/qris/trx-1/qr-code")
        );
        assert_eq!(details.payment_expired_time, Some(900_000));
        assert_eq!(details.payment_method, "qris");
    }

    #[tokio::test]
    async fn zero_quantity_fails_before_any_lookup_or_write() {
        let usecase = CheckoutUseCase::new(
            Arc::new(MockCatalogRepository::new()),
            Arc::new(MockOrderRepository::new()),
            Arc::new(MockPaymentGateway::new()),
            Arc::new(MockCheckoutNotifier::new()),
        );

        let err = usecase.checkout(request(cart(&[(1, 0)]), 1)).await.unwrap_err();

        assert!(matches!(err, CheckoutError::Cart(PricingError::InvalidQuantity)));
        assert_eq!(err.to_string(), "Quantity must be greater than 0");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_product_fails_before_any_write() {
        let mut catalog_repo = MockCatalogRepository::new();
        catalog_repo
            .expect_find_menu_items_by_ids()
            .with(eq(vec![999]))
            .returning(|_| Ok(vec![]));

        let usecase = CheckoutUseCase::new(
            Arc::new(catalog_repo),
            Arc::new(MockOrderRepository::new()),
            Arc::new(MockPaymentGateway::new()),
            Arc::new(MockCheckoutNotifier::new()),
        );

        let err = usecase.checkout(request(cart(&[(999, 1)]), 1)).await.unwrap_err();

        assert_eq!(err.to_string(), "Product with ID 999 not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_payment_method_is_not_found() {
        let mut catalog_repo = MockCatalogRepository::new();
        catalog_repo
            .expect_find_menu_items_by_ids()
            .returning(|_| Ok(vec![menu(1, 25000.0)]));
        catalog_repo
            .expect_find_payment_method_by_id()
            .returning(|_| Ok(None));

        let usecase = CheckoutUseCase::new(
            Arc::new(catalog_repo),
            Arc::new(MockOrderRepository::new()),
            Arc::new(MockPaymentGateway::new()),
            Arc::new(MockCheckoutNotifier::new()),
        );

        let err = usecase.checkout(request(cart(&[(1, 1)]), 5)).await.unwrap_err();

        assert!(matches!(err, CheckoutError::PaymentMethodNotFound(5)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn gateway_timeout_aborts_without_creating_an_order() {
        let catalog_repo = catalog_with(vec![menu(1, 25000.0)], method(1, "qris"));

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_create_transaction()
            .times(1)
            .returning(|_| Err(GatewayError::Timeout));

        let usecase = CheckoutUseCase::new(
            Arc::new(catalog_repo),
            Arc::new(MockOrderRepository::new()),
            Arc::new(gateway),
            Arc::new(MockCheckoutNotifier::new()),
        );

        let err = usecase.checkout(request(cart(&[(1, 1)]), 1)).await.unwrap_err();

        assert!(matches!(err, CheckoutError::PaymentGateway(GatewayError::Timeout)));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn gateway_rejection_keeps_provider_status() {
        let catalog_repo = catalog_with(vec![menu(1, 25000.0)], method(1, "qris"));

        let mut gateway = MockPaymentGateway::new();
        gateway.expect_create_transaction().returning(|_| {
            Err(GatewayError::Provider {
                status_code: 406,
                message: "Duplicate order ID".to_string(),
            })
        });

        let usecase = CheckoutUseCase::new(
            Arc::new(catalog_repo),
            Arc::new(MockOrderRepository::new()),
            Arc::new(gateway),
            Arc::new(MockCheckoutNotifier::new()),
        );

        let err = usecase.checkout(request(cart(&[(1, 1)]), 1)).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_ACCEPTABLE);
    }

    #[tokio::test]
    async fn unknown_method_code_still_succeeds_with_populated_fields_only() {
        let mut other = method(3, "ewallet");
        other.account_number = None;
        let catalog_repo = catalog_with(vec![menu(1, 10000.0)], other);

        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_place_order()
            .returning(|_, _, _| Ok(placed(9)));

        let mut notifier = MockCheckoutNotifier::new();
        notifier.expect_notify().return_const(());

        let usecase = CheckoutUseCase::new(
            Arc::new(catalog_repo),
            Arc::new(order_repo),
            Arc::new(MockPaymentGateway::new()),
            Arc::new(notifier),
        );

        let response = usecase.checkout(request(cart(&[(1, 1)]), 3)).await.unwrap();

        let details = &response.summary.payment_details;
        assert!(details.payment_account_number.is_none());
        assert_eq!(details.payment_account_name.as_deref(), Some("Pesta Pasta"));
        assert!(details.payment_expired_time.is_none());
    }

    #[tokio::test]
    async fn failed_transaction_is_a_persistence_error() {
        let catalog_repo = catalog_with(vec![menu(1, 25000.0)], method(2, "bank"));

        let mut order_repo = MockOrderRepository::new();
        order_repo
            .expect_place_order()
            .returning(|_, _, _| Err(anyhow::anyhow!("duplicate key value violates unique constraint")));

        let usecase = CheckoutUseCase::new(
            Arc::new(catalog_repo),
            Arc::new(order_repo),
            Arc::new(MockPaymentGateway::new()),
            Arc::new(MockCheckoutNotifier::new()),
        );

        let err = usecase.checkout(request(cart(&[(1, 1)]), 2)).await.unwrap_err();

        assert!(matches!(err, CheckoutError::Persistence(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
