use anyhow::{Context, Result};
use std::{env, str::FromStr};

use super::config_model::{BackendServer, Database, DotEnvyConfig, Invoice, Jwt, Mail, Midtrans};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = BackendServer {
        port: required_parsed("SERVER_PORT_BACKEND")?,
        body_limit: required_parsed("SERVER_BODY_LIMIT")?,
        timeout: required_parsed("SERVER_TIMEOUT")?,
    };

    let database = Database {
        url: required("DATABASE_URL")?,
    };

    let jwt = Jwt {
        secret: required("JWT_SECRET")?,
        ttl_hours: parsed_or("JWT_TTL_HOURS", 24)?,
    };

    let midtrans = Midtrans {
        server_key: required("MIDTRANS_SERVER_KEY")?,
        base_url: optional("MIDTRANS_BASE_URL")
            .unwrap_or_else(|| "https://api.midtrans.com/v2".to_string()),
        timeout_secs: parsed_or("MIDTRANS_TIMEOUT_SECS", 10)?,
        qris_acquirer: optional("MIDTRANS_QRIS_ACQUIRER").unwrap_or_else(|| "gopay".to_string()),
    };

    let mail = Mail {
        api_url: optional("MAIL_API_URL"),
        api_key: optional("MAIL_API_KEY"),
        from_email: optional("MAIL_FROM_EMAIL")
            .unwrap_or_else(|| "no-reply@pestapasta.com".to_string()),
        from_name: optional("MAIL_FROM_NAME").unwrap_or_else(|| "Pesta Pasta".to_string()),
    };

    let invoice = Invoice {
        company_name: optional("INVOICE_COMPANY_NAME").unwrap_or_else(|| "Pesta Pasta".to_string()),
        company_email: optional("INVOICE_COMPANY_EMAIL")
            .unwrap_or_else(|| "support@pestapasta.com".to_string()),
        company_phone: optional("INVOICE_COMPANY_PHONE")
            .unwrap_or_else(|| "123-456-7890".to_string()),
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
        jwt,
        midtrans,
        mail,
        invoice,
    })
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(key: &str) -> Result<String> {
    optional(key).with_context(|| format!("{key} is missing"))
}

fn required_parsed<T>(key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    required(key)?
        .parse()
        .with_context(|| format!("{key} is invalid"))
}

fn parsed_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional(key) {
        Some(raw) => raw.parse().with_context(|| format!("{key} is invalid")),
        None => Ok(default),
    }
}
