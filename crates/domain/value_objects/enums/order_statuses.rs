use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lifecycle of an order as seen by the restaurant. Payments share the same states but
/// store them in their own spelling, see [`OrderStatus::as_payment_str`].
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[default]
    Pending,
    Authorized,
    Captured,
    Success,
    Denied,
    Canceled,
    Refunded,
    PartiallyRefunded,
    ChargedBack,
    PartiallyChargedBack,
    Expired,
    Failed,
    Unknown,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 13] = [
        OrderStatus::Pending,
        OrderStatus::Authorized,
        OrderStatus::Captured,
        OrderStatus::Success,
        OrderStatus::Denied,
        OrderStatus::Canceled,
        OrderStatus::Refunded,
        OrderStatus::PartiallyRefunded,
        OrderStatus::ChargedBack,
        OrderStatus::PartiallyChargedBack,
        OrderStatus::Expired,
        OrderStatus::Failed,
        OrderStatus::Unknown,
    ];

    /// Value stored in `orders.order_status`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Authorized => "Authorized",
            OrderStatus::Captured => "Captured",
            OrderStatus::Success => "Success",
            OrderStatus::Denied => "Denied",
            OrderStatus::Canceled => "Canceled",
            OrderStatus::Refunded => "Refunded",
            OrderStatus::PartiallyRefunded => "PartiallyRefunded",
            OrderStatus::ChargedBack => "ChargedBack",
            OrderStatus::PartiallyChargedBack => "PartiallyChargedBack",
            OrderStatus::Expired => "Expired",
            OrderStatus::Failed => "Failed",
            OrderStatus::Unknown => "Unknown",
        }
    }

    /// Value stored in `payments.payment_status`.
    pub fn as_payment_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Authorized => "authorized",
            OrderStatus::Captured => "captured",
            OrderStatus::Success => "success",
            OrderStatus::Denied => "denied",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Refunded => "refunded",
            OrderStatus::PartiallyRefunded => "partially_refunded",
            OrderStatus::ChargedBack => "charged_back",
            OrderStatus::PartiallyChargedBack => "partially_charged_back",
            OrderStatus::Expired => "expired",
            OrderStatus::Failed => "failed",
            OrderStatus::Unknown => "unknown",
        }
    }

    /// Maps the gateway's `transaction_status` vocabulary. Total: anything unrecognised
    /// becomes `Unknown`.
    pub fn from_gateway_status(value: &str) -> Self {
        match value {
            "authorize" => OrderStatus::Authorized,
            "capture" => OrderStatus::Captured,
            "settlement" => OrderStatus::Success,
            "deny" => OrderStatus::Denied,
            "pending" => OrderStatus::Pending,
            "cancel" => OrderStatus::Canceled,
            "refund" => OrderStatus::Refunded,
            "partial_refund" => OrderStatus::PartiallyRefunded,
            "chargeback" => OrderStatus::ChargedBack,
            "partial_chargeback" => OrderStatus::PartiallyChargedBack,
            "expire" => OrderStatus::Expired,
            "failure" => OrderStatus::Failed,
            _ => OrderStatus::Unknown,
        }
    }

    /// Parses either stored spelling back into a status.
    pub fn from_stored(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value || status.as_payment_str() == value)
            .unwrap_or(OrderStatus::Unknown)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
