pub mod catalog;
pub mod checkout;
pub mod login;
pub mod order_status;
pub mod orders;
pub mod payment_gateway;
pub mod pricing;
