pub mod categories;
pub mod menus;
pub mod order_details;
pub mod orders;
pub mod payment_methods;
pub mod payments;
pub mod users;
