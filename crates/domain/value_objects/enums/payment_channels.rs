use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Checkout branch selected by a payment method's `code`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentChannel {
    /// QR payment settled online through the gateway.
    Qris,
    /// Manual transfer to the account stored on the payment method.
    BankTransfer,
    /// Any other code. Checkout still succeeds with whatever details are populated.
    Other,
}

impl PaymentChannel {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "qris" => PaymentChannel::Qris,
            "bank" => PaymentChannel::BankTransfer,
            _ => PaymentChannel::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentChannel::Qris => "qris",
            PaymentChannel::BankTransfer => "bank",
            PaymentChannel::Other => "other",
        }
    }

    pub fn settles_online(&self) -> bool {
        matches!(self, PaymentChannel::Qris)
    }

    /// Client-side payment window in milliseconds. Informational only.
    pub fn expiry_window_ms(&self) -> Option<i64> {
        match self {
            PaymentChannel::BankTransfer => Some(10 * 60 * 1000),
            PaymentChannel::Qris => Some(15 * 60 * 1000),
            PaymentChannel::Other => None,
        }
    }
}

impl Display for PaymentChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
