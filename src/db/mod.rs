//! Database module: models and schema for the `users` table.
//!
//! Layout:
//! - `models.rs`: input records and rows read back from `users`
//! - `schema.rs`: SQL DDL for initializing the table (PostgreSQL)
//! - `postgres.rs`: the single-connection store issuing every statement

pub mod models;
pub mod postgres;
pub mod schema;

pub use models::{NewUser, User};
pub use postgres::UsersStore;
pub use schema::USERS_INIT;
