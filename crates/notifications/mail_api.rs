use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use url::Url;

use super::invoice::InvoiceData;
use super::notifier::InvoiceDeliveryProvider;

pub const INVOICE_SUBJECT: &str = "Invoice for Your Purchase";

/// Delivers invoices through an HTTP mail relay that accepts a JSON message.
pub struct MailApiProvider {
    api_url: Url,
    api_key: Option<String>,
    from_email: String,
    from_name: String,
    client: Client,
}

impl MailApiProvider {
    pub fn new(
        api_url: Url,
        api_key: Option<String>,
        from_email: String,
        from_name: String,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .context("build mail relay http client")?;

        Ok(Self {
            api_url,
            api_key,
            from_email,
            from_name,
            client,
        })
    }

    fn message(&self, invoice: &InvoiceData) -> serde_json::Value {
        json!({
            "from": { "email": self.from_email, "name": self.from_name },
            "to": [{ "email": invoice.client_email, "name": invoice.client_name }],
            "subject": INVOICE_SUBJECT,
            "html": invoice.render_html(),
        })
    }
}

#[async_trait]
impl InvoiceDeliveryProvider for MailApiProvider {
    async fn send(&self, invoice: &InvoiceData) -> Result<()> {
        let mut request = self.client.post(self.api_url.clone()).json(&self.message(invoice));
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let resp = request.send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("mail relay rejected invoice: status {status}, body {body}");
        }

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "mail_api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_addresses_the_customer() {
        let provider = MailApiProvider::new(
            Url::parse("http://127.0.0.1:9/send").unwrap(),
            None,
            "billing@pestapasta.com".to_string(),
            "Pesta Pasta".to_string(),
        )
        .unwrap();
        let invoice = InvoiceData {
            date: "2024-11-20".to_string(),
            invoice_number: "TXN7".to_string(),
            company_name: "Pesta Pasta".to_string(),
            company_email: "support@pestapasta.com".to_string(),
            company_phone: "123-456-7890".to_string(),
            client_name: "Rina".to_string(),
            client_email: "rina@example.com".to_string(),
            items: vec![],
            subtotal: 0.0,
            tax: 0.0,
            total: 0.0,
            payment_method: "bank".to_string(),
            payment_account_name: None,
            payment_account_number: None,
            payment_qr_code_url: None,
        };

        let message = provider.message(&invoice);

        assert_eq!(message["subject"], INVOICE_SUBJECT);
        assert_eq!(message["to"][0]["email"], "rina@example.com");
        assert_eq!(message["from"]["email"], "billing@pestapasta.com");
        assert!(message["html"].as_str().unwrap().contains("TXN7"));
    }
}
