use anyhow::{Context, Result};
use diesel::{
    Connection, PgConnection,
    connection::CacheSize,
    r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool},
};
use tracing::info;

/// Pooled connections sit behind a transaction-mode pooler, so server-side
/// prepared statements cannot be reused across checkouts.
#[derive(Debug, Default)]
struct NoStatementCache;

impl CustomizeConnection<PgConnection, R2d2Error> for NoStatementCache {
    fn on_acquire(&self, conn: &mut PgConnection) -> std::result::Result<(), R2d2Error> {
        conn.set_prepared_statement_cache_size(CacheSize::Disabled);
        Ok(())
    }
}

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

/// Builds the pool and checks out one connection so a bad `DATABASE_URL` fails startup.
pub fn establish_connection(database_url: &str) -> Result<PgPoolSquad> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(NoStatementCache))
        .build(manager)
        .context("build postgres pool")?;

    pool.get().context("check out first postgres connection")?;
    info!(max_size = pool.max_size(), "postgres: pool ready");

    Ok(pool)
}
