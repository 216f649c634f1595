use crate::db::models::{NewUser, User};
use crate::db::schema::{INSERT_USER, USERS_INIT};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;
use tracing::{debug, info};

/// One PostgreSQL session, owned for the whole run.
///
/// No pool and no statement timeout: every call runs on the same connection
/// until it completes. Call [`UsersStore::close`] to release it.
pub struct UsersStore {
    conn: PgConnection,
}

impl UsersStore {
    pub async fn connect(conn_str: &str) -> Result<Self, AppError> {
        if conn_str.trim().is_empty() {
            return Err(AppError::MissingConnStr);
        }
        let opts = PgConnectOptions::from_str(conn_str).map_err(AppError::Connect)?;
        let conn = opts.connect().await.map_err(AppError::Connect)?;
        info!(
            host = %opts.get_host(),
            port = opts.get_port(),
            database = opts.get_database().unwrap_or("<default>"),
            "connected to postgres"
        );
        Ok(Self { conn })
    }

    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    /// The server's clock, not the client's.
    pub async fn server_now(&mut self) -> Result<DateTime<Utc>, AppError> {
        let rec: (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()")
            .fetch_one(&mut self.conn)
            .await
            .map_err(AppError::ServerTime)?;
        Ok(rec.0)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&mut self) -> Result<(), AppError> {
        sqlx::query(USERS_INIT)
            .execute(&mut self.conn)
            .await
            .map_err(AppError::Schema)?;
        Ok(())
    }

    /// Insert one user, skipping it on a `username` conflict.
    /// Returns the number of rows written (0 when skipped).
    pub async fn insert_user(&mut self, user: &NewUser) -> Result<u64, sqlx::Error> {
        let done = sqlx::query(INSERT_USER)
            .bind(&user.username)
            .bind(&user.email)
            .execute(&mut self.conn)
            .await?;
        debug!(username = %user.username, rows = done.rows_affected(), "insert executed");
        Ok(done.rows_affected())
    }

    pub async fn list_users(&mut self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT id, username, email, created_at FROM users ORDER BY id",
        )
        .fetch_all(&mut self.conn)
        .await?;
        Ok(rows)
    }

    /// Send the terminate message and shut the socket down.
    pub async fn close(self) -> Result<(), AppError> {
        self.conn.close().await?;
        Ok(())
    }
}
