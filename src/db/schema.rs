//! SQL DDL for the `users` table.

/// PostgreSQL schema with:
/// - `id` SERIAL PRIMARY KEY
/// - `username` and `email` each UNIQUE NOT NULL
/// - `created_at` filled in by the server on insert
///
/// `IF NOT EXISTS` makes re-running it against an existing table a no-op.
pub const USERS_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username VARCHAR(50) UNIQUE NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Conflicts are resolved on `username` only; a duplicate `email` under a new
/// username still raises a unique violation.
pub const INSERT_USER: &str = r#"
INSERT INTO users (username, email)
VALUES ($1, $2)
ON CONFLICT (username) DO NOTHING
"#;
