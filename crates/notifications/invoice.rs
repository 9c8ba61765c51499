use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::value_objects::checkout::CheckoutSummary;
use crate::payments::midtrans_client::TAX_RATE;

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceIssuer {
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceItem {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceData {
    pub date: String,
    pub invoice_number: String,
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub client_name: String,
    pub client_email: String,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub payment_method: String,
    pub payment_account_name: Option<String>,
    pub payment_account_number: Option<String>,
    pub payment_qr_code_url: Option<String>,
}

impl InvoiceData {
    pub fn from_summary(summary: &CheckoutSummary, issuer: &InvoiceIssuer, date: NaiveDate) -> Self {
        let items: Vec<InvoiceItem> = summary
            .product_details
            .iter()
            .map(|line| InvoiceItem {
                product_name: line.product.name.clone(),
                quantity: line.quantity,
                unit_price: line.product.price,
                total_price: line.subtotal,
            })
            .collect();

        let subtotal: f64 = items.iter().map(|item| item.total_price).sum();
        let tax = subtotal * TAX_RATE;
        let payment = &summary.payment_details;

        Self {
            date: date.format("%Y-%m-%d").to_string(),
            invoice_number: summary.transaction_code.clone(),
            company_name: issuer.company_name.clone(),
            company_email: issuer.company_email.clone(),
            company_phone: issuer.company_phone.clone(),
            client_name: summary.name.clone(),
            client_email: summary.email.clone(),
            items,
            subtotal,
            tax,
            total: subtotal + tax,
            payment_method: payment.payment_method.clone(),
            payment_account_name: payment.payment_account_name.clone(),
            payment_account_number: payment.payment_account_number.clone(),
            payment_qr_code_url: payment.qr_image_url.clone(),
        }
    }

    pub fn render_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\" /><title>Invoice</title></head><body>");
        html.push_str(&format!(
            "<h1>INVOICE</h1><p>Invoice Date: {}</p><p>Invoice Number: {}</p>",
            escape(&self.date),
            escape(&self.invoice_number)
        ));
        html.push_str(&format!(
            "<h3>FROM:</h3><p>{}</p><p>{}</p><p>{}</p>",
            escape(&self.company_name),
            escape(&self.company_email),
            escape(&self.company_phone)
        ));

        html.push_str("<h3>Payment Information</h3>");
        match &self.payment_qr_code_url {
            Some(qr_url) => html.push_str(&format!(
                "<h4>QRIS Payment</h4><p>Scan the QR code to complete your payment.</p><img src=\"{}\" alt=\"QRIS QR Code\" width=\"120\" height=\"120\" />",
                escape(qr_url)
            )),
            None => html.push_str(&format!(
                "<h4>Bank Transfer</h4><p>Account Name: {}</p><p>Account Number: {}</p>",
                escape(self.payment_account_name.as_deref().unwrap_or("-")),
                escape(self.payment_account_number.as_deref().unwrap_or("-"))
            )),
        }

        html.push_str(&format!(
            "<h3>BILL TO:</h3><p>{}</p><p>{}</p>",
            escape(&self.client_name),
            escape(&self.client_email)
        ));
        html.push_str("<table><thead><tr><th>Product/Service</th><th>Quantity</th><th>Unit Price</th><th>Total</th></tr></thead><tbody>");
        for item in &self.items {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>Rp{}</td><td>Rp{}</td></tr>",
                escape(&item.product_name),
                item.quantity,
                rupiah(item.unit_price),
                rupiah(item.total_price)
            ));
        }
        html.push_str("</tbody></table>");
        html.push_str(&format!(
            "<p>Subtotal: Rp{}</p><p>Tax: Rp{}</p><h3>Total: Rp{}</h3></body></html>",
            rupiah(self.subtotal),
            rupiah(self.tax),
            rupiah(self.total)
        ));

        html
    }
}

fn rupiah(amount: f64) -> String {
    format!("{amount:.0}")
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
