use anyhow::Result;
use backend::axum_http::http_serve;
use backend::config::config_loader;
use crates::infra::db::postgres::postgres_connection;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!(error = %format!("{error:#}"), "backend: exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("backend")?;

    let dotenvy_env = config_loader::load()?;
    info!(
        port = dotenvy_env.backend_server.port,
        midtrans_base_url = %dotenvy_env.midtrans.base_url,
        invoice_mail = dotenvy_env.mail.api_url.is_some(),
        "config: environment loaded"
    );

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database.url)?;

    http_serve::start(Arc::new(dotenvy_env), Arc::new(postgres_pool)).await?;

    Ok(())
}
