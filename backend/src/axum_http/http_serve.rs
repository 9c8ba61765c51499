use crate::{
    auth::JwtSecret,
    axum_http::{default_routers, routers},
    config::config_model::DotEnvyConfig,
};
use anyhow::{Context, Result};
use axum::{
    Extension, Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use crates::{
    infra::db::postgres::postgres_connection::PgPoolSquad,
    notifications::{InvoiceDeliveryProvider, InvoiceIssuer, InvoiceNotifier, MailApiProvider},
    payments::midtrans_client::MidtransClient,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};
use url::Url;

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let gateway = Arc::new(MidtransClient::new(
        config.midtrans.server_key.clone(),
        config.midtrans.base_url.clone(),
        Duration::from_secs(config.midtrans.timeout_secs),
        config.midtrans.qris_acquirer.clone(),
    )?);
    let notifier = Arc::new(invoice_notifier(&config)?);

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/api/v1/login",
            routers::auth::routes(Arc::clone(&db_pool), &config.jwt),
        )
        .nest(
            "/api/v1/checkout",
            routers::checkout::routes(Arc::clone(&db_pool), Arc::clone(&gateway), notifier),
        )
        .nest("/api/v1/menus", routers::menus::routes(Arc::clone(&db_pool)))
        .nest(
            "/api/v1/categories",
            routers::categories::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/v1/payment_methods",
            routers::payment_methods::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/v1/orders",
            routers::orders::routes(Arc::clone(&db_pool), Arc::clone(&gateway)),
        )
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(Extension(JwtSecret(config.jwt.secret.clone())))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.backend_server.timeout,
        )))
        .layer(RequestBodyLimitLayer::new(
            (config.backend_server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.backend_server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn invoice_notifier(config: &DotEnvyConfig) -> Result<InvoiceNotifier> {
    let mut providers: Vec<Arc<dyn InvoiceDeliveryProvider>> = Vec::new();

    match config.mail.api_url.as_deref() {
        Some(raw) => {
            let api_url = Url::parse(raw).context("MAIL_API_URL is invalid")?;
            providers.push(Arc::new(MailApiProvider::new(
                api_url,
                config.mail.api_key.clone(),
                config.mail.from_email.clone(),
                config.mail.from_name.clone(),
            )?));
            info!("Invoice mail delivery enabled");
        }
        None => info!("Invoice mail delivery disabled; invoices are only logged"),
    }

    Ok(InvoiceNotifier::new(
        providers,
        InvoiceIssuer {
            company_name: config.invoice.company_name.clone(),
            company_email: config.invoice.company_email.clone(),
            company_phone: config.invoice.company_phone.clone(),
        },
    ))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received ctrl+C signal"),
        Err(err) => {
            error!(error = %err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    }
}
