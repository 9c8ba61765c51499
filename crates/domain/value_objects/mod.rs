pub mod categories;
pub mod checkout;
pub mod enums;
pub mod menus;
pub mod orders;
pub mod payment_methods;
pub mod references;
