//! The seeding routine: connect, check the server clock, ensure the table,
//! insert the batch, report.

use crate::config::Config;
use crate::db::models::NewUser;
use crate::db::postgres::UsersStore;
use crate::error::AppError;
use crate::report::Reporter;
use crate::service::seeder::{InsertReport, insert_users, sample_users};
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::warn;

#[derive(Debug)]
pub struct SeedSummary {
    pub server_time: DateTime<Utc>,
    pub inserts: Vec<InsertReport>,
}

/// Run the whole routine with the built-in sample batch.
///
/// Once the connection is open it is closed exactly once, whether or not
/// the body succeeded.
pub async fn run<W: Write>(cfg: &Config, out: W) -> Result<SeedSummary, AppError> {
    let mut store = UsersStore::connect(&cfg.conn_str).await?;
    let result = seed(&mut store, cfg, &sample_users(), out).await;
    if let Err(e) = store.close().await {
        warn!(error = %e, "failed to close connection");
    }
    result
}

/// Body of [`run`] against an already-open store.
pub async fn seed<W: Write>(
    store: &mut UsersStore,
    cfg: &Config,
    users: &[NewUser],
    out: W,
) -> Result<SeedSummary, AppError> {
    let mut reporter = Reporter::new(out);

    let server_time = store.server_now().await?;

    store.init_schema().await?;
    reporter.table_ready()?;

    let inserts = insert_users(store, users, &mut reporter).await?;

    reporter.current_time(&server_time)?;
    reporter.developer(&cfg.developer)?;

    Ok(SeedSummary {
        server_time,
        inserts,
    })
}
