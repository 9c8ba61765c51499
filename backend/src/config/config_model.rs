#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub backend_server: BackendServer,
    pub database: Database,
    pub jwt: Jwt,
    pub midtrans: Midtrans,
    pub mail: Mail,
    pub invoice: Invoice,
}

#[derive(Debug, Clone)]
pub struct BackendServer {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Jwt {
    pub secret: String,
    pub ttl_hours: i64,
}

#[derive(Debug, Clone)]
pub struct Midtrans {
    pub server_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub qris_acquirer: String,
}

/// Invoice mail relay. Without `api_url` invoices are only logged.
#[derive(Debug, Clone)]
pub struct Mail {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub from_email: String,
    pub from_name: String,
}

#[derive(Debug, Clone)]
pub struct Invoice {
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
}
