pub mod auth;
pub mod categories;
pub mod checkout;
pub mod menus;
pub mod orders;
pub mod payment_methods;
