use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("Error loading .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Error loading configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Failed to connect: connection string is empty; set CONN_STR")]
    MissingConnStr,

    #[error("Failed to connect: {0}")]
    Connect(#[source] SqlxError),

    #[error("QueryRow failed: {0}")]
    ServerTime(#[source] SqlxError),

    #[error("Table creation failed: {0}")]
    Schema(#[source] SqlxError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(Box::new(e))
    }
}
