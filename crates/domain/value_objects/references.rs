use chrono::{DateTime, Utc};
use uuid::Uuid;

const TRANSACTION_CODE_PREFIX: &str = "TXN";

/// Public lookup code of an order. Injective in `order_id`.
pub fn transaction_code(order_id: i32) -> String {
    format!("{TRANSACTION_CODE_PREFIX}{order_id}")
}

/// Order reference sent to the gateway for a single charge attempt. Never reused: a retried
/// checkout gets a new one.
pub fn gateway_order_reference(now: DateTime<Utc>, nonce: Uuid) -> String {
    let simple = nonce.simple().to_string();
    format!("ORDER-{}-{}", now.timestamp_millis(), &simple[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn transaction_code_is_stable_per_order() {
        assert_eq!(transaction_code(42), "TXN42");
        assert_eq!(transaction_code(42), transaction_code(42));
    }

    #[test]
    fn distinct_orders_never_share_a_code() {
        let codes: HashSet<String> = (1..=5_000).map(transaction_code).collect();
        assert_eq!(codes.len(), 5_000);
    }

    #[test]
    fn gateway_reference_changes_between_attempts() {
        let now = Utc.with_ymd_and_hms(2024, 11, 20, 8, 30, 0).unwrap();
        let first = gateway_order_reference(now, Uuid::new_v4());
        let second = gateway_order_reference(now, Uuid::new_v4());

        assert!(first.starts_with(&format!("ORDER-{}-", now.timestamp_millis())));
        assert_ne!(first, second);
    }
}
