mod invoice;
mod mail_api;
mod notifier;

pub use invoice::{InvoiceData, InvoiceIssuer, InvoiceItem};
pub use mail_api::MailApiProvider;
pub use notifier::{InvoiceDeliveryProvider, InvoiceNotifier};
