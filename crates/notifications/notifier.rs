use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::invoice::{InvoiceData, InvoiceIssuer};
use crate::domain::value_objects::checkout::CheckoutSummary;

#[async_trait]
pub trait InvoiceDeliveryProvider: Send + Sync {
    async fn send(&self, invoice: &InvoiceData) -> Result<()>;
    fn provider_name(&self) -> &'static str;
}

/// Sends invoices off the request path. Queue overflow drops the invoice.
#[derive(Clone)]
pub struct InvoiceNotifier {
    tx: mpsc::Sender<CheckoutSummary>,
}

impl InvoiceNotifier {
    pub fn new(providers: Vec<Arc<dyn InvoiceDeliveryProvider>>, issuer: InvoiceIssuer) -> Self {
        let (tx, mut rx) = mpsc::channel::<CheckoutSummary>(256);

        tokio::spawn(async move {
            while let Some(summary) = rx.recv().await {
                let invoice = InvoiceData::from_summary(&summary, &issuer, Local::now().date_naive());

                if providers.is_empty() {
                    info!(
                        invoice_number = %invoice.invoice_number,
                        total = invoice.total,
                        "invoice: no delivery provider configured"
                    );
                    continue;
                }

                for provider in &providers {
                    match provider.send(&invoice).await {
                        Ok(()) => info!(
                            provider = provider.provider_name(),
                            invoice_number = %invoice.invoice_number,
                            "invoice: delivered"
                        ),
                        Err(error) => warn!(
                            provider = provider.provider_name(),
                            invoice_number = %invoice.invoice_number,
                            error = %error,
                            "invoice: provider failed"
                        ),
                    }
                }
            }
        });

        Self { tx }
    }

    pub fn try_notify(&self, summary: CheckoutSummary) {
        match self.tx.try_send(summary) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(summary)) => {
                warn!(transaction_code = %summary.transaction_code, "invoice: queue full; dropping invoice");
            }
            Err(mpsc::error::TrySendError::Closed(summary)) => {
                warn!(transaction_code = %summary.transaction_code, "invoice: queue closed; dropping invoice");
            }
        }
    }
}
