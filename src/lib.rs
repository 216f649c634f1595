pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod report;
pub mod service;

pub use config::Config;
pub use error::AppError;
