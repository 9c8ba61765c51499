use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;

pub const TAX_RATE: f64 = 0.1;
pub const TAX_ITEM_ID: &str = "Tax-10%";
pub const TAX_ITEM_NAME: &str = "Pajak 10%";

/// Midtrans Core API client built on reqwest.
pub struct MidtransClient {
    http: reqwest::Client,
    server_key: String,
    base_url: String,
    qris_acquirer: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment gateway returned status {status_code}: {message}")]
    Provider { status_code: u16, message: String },
    #[error("payment gateway did not answer in time")]
    Timeout,
    #[error("payment gateway request failed: {0}")]
    Transport(#[from] anyhow::Error),
}

impl GatewayError {
    /// HTTP status to surface to our own clients.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Provider { status_code, .. } if (400..=599).contains(status_code) => {
                *status_code
            }
            _ => 502,
        }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Transport(err.into())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub id: String,
    pub price: f64,
    pub quantity: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// What a caller knows about a QRIS charge; the client adds tax and acquirer.
#[derive(Debug, Clone, PartialEq)]
pub struct QrisChargeRequest {
    pub order_reference: String,
    pub items: Vec<ItemDetails>,
    pub customer: CustomerDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionDetails {
    pub order_id: String,
    pub gross_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QrisOptions {
    pub acquirer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargePayload {
    pub payment_type: String,
    pub transaction_details: TransactionDetails,
    pub item_details: Vec<ItemDetails>,
    pub customer_details: CustomerDetails,
    pub qris: QrisOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChargeAction {
    pub name: String,
    #[serde(default)]
    pub method: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChargeResponse {
    pub status_code: String,
    #[serde(default)]
    pub status_message: Option<String>,
    pub transaction_id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub transaction_status: Option<String>,
    #[serde(default)]
    pub actions: Vec<ChargeAction>,
    #[serde(default)]
    pub qr_string: Option<String>,
    #[serde(default)]
    pub expiry_time: Option<String>,
}

impl ChargeResponse {
    /// The QR image is the first action the gateway hands back.
    pub fn qr_code_url(&self) -> Option<String> {
        self.actions.first().map(|action| action.url.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionStatusResponse {
    pub status_code: String,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub transaction_status: String,
    #[serde(default)]
    pub fraud_status: Option<String>,
    #[serde(default)]
    pub expiry_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderEnvelope {
    #[serde(default)]
    status_code: Option<String>,
    #[serde(default)]
    status_message: Option<String>,
}

/// Appends the 10% tax line and returns the items with the gross amount they add up to.
pub fn with_tax_line(mut items: Vec<ItemDetails>) -> (Vec<ItemDetails>, f64) {
    let subtotal: f64 = items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum();
    let tax = subtotal * TAX_RATE;

    items.push(ItemDetails {
        id: TAX_ITEM_ID.to_string(),
        price: tax,
        quantity: 1,
        name: TAX_ITEM_NAME.to_string(),
    });

    (items, subtotal + tax)
}

/// A 2xx HTTP answer can still carry a failure in its body `status_code`.
fn body_failure(body: &str) -> Option<GatewayError> {
    let envelope = serde_json::from_str::<ProviderEnvelope>(body).ok()?;
    let raw = envelope.status_code?;
    let code = raw.trim().parse::<u16>().ok()?;

    if (200..300).contains(&code) {
        return None;
    }

    Some(GatewayError::Provider {
        status_code: code,
        message: envelope
            .status_message
            .unwrap_or_else(|| format!("gateway status {code}")),
    })
}

impl MidtransClient {
    pub fn new(
        server_key: String,
        base_url: String,
        timeout: Duration,
        qris_acquirer: String,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build midtrans http client")?;

        Ok(Self {
            http,
            server_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            qris_acquirer,
        })
    }

    pub fn charge_payload(&self, request: QrisChargeRequest) -> ChargePayload {
        let (item_details, gross_amount) = with_tax_line(request.items);

        ChargePayload {
            payment_type: "qris".to_string(),
            transaction_details: TransactionDetails {
                order_id: request.order_reference,
                gross_amount,
            },
            item_details,
            customer_details: request.customer,
            qris: QrisOptions {
                acquirer: self.qris_acquirer.clone(),
            },
        }
    }

    async fn decode<T: DeserializeOwned>(
        resp: reqwest::Response,
        context: &str,
    ) -> Result<T, GatewayError> {
        let status = resp.status();
        let body = resp.text().await.map_err(GatewayError::from_reqwest)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ProviderEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.status_message)
                .unwrap_or_else(|| status.to_string());

            error!(
                status = %status,
                response_body = %body,
                context = %context,
                "midtrans: api request failed"
            );

            return Err(GatewayError::Provider {
                status_code: status.as_u16(),
                message,
            });
        }

        if let Some(failure) = body_failure(&body) {
            error!(
                status = %status,
                response_body = %body,
                context = %context,
                "midtrans: api request rejected"
            );
            return Err(failure);
        }

        serde_json::from_str::<T>(&body)
            .with_context(|| format!("decode midtrans response for {context}"))
            .map_err(GatewayError::Transport)
    }

    /// Creates a QRIS charge. https://docs.midtrans.com/reference/qris
    pub async fn create_transaction(
        &self,
        request: QrisChargeRequest,
    ) -> Result<ChargeResponse, GatewayError> {
        let payload = self.charge_payload(request);

        let resp = self
            .http
            .post(format!("{}/charge", self.base_url))
            .basic_auth(&self.server_key, Some(""))
            .json(&payload)
            .send()
            .await
            .map_err(GatewayError::from_reqwest)?;

        Self::decode(resp, "create transaction").await
    }

    /// https://docs.midtrans.com/reference/get-transaction-status
    pub async fn query_transaction_status(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionStatusResponse, GatewayError> {
        let resp = self
            .http
            .get(format!("{}/{}/status", self.base_url, transaction_id))
            .basic_auth(&self.server_key, Some(""))
            .send()
            .await
            .map_err(GatewayError::from_reqwest)?;

        Self::decode(resp, "query transaction status").await
    }
}
