use crate::db::models::NewUser;
use crate::db::postgres::UsersStore;
use crate::error::AppError;
use crate::report::Reporter;
use std::io::Write;
use tracing::{debug, error};

/// The hardcoded batch. The third record repeats the first on purpose.
pub fn sample_users() -> Vec<NewUser> {
    vec![
        NewUser::new("alice", "alice@example.com"),
        NewUser::new("bob", "bob@example.com"),
        NewUser::new("alice", "alice@example.com"),
    ]
}

#[derive(Debug)]
pub enum InsertOutcome {
    Inserted,
    /// Dropped by `ON CONFLICT (username) DO NOTHING`.
    Skipped,
    Failed(sqlx::Error),
}

impl InsertOutcome {
    pub fn from_result(result: Result<u64, sqlx::Error>) -> Self {
        match result {
            Ok(0) => Self::Skipped,
            Ok(_) => Self::Inserted,
            Err(e) => Self::Failed(e),
        }
    }

    /// Skipped rows count as success: the server reported no error.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

#[derive(Debug)]
pub struct InsertReport {
    pub username: String,
    pub outcome: InsertOutcome,
}

/// Insert every user in order. A failed row is logged and the loop moves on;
/// only a failure to write the status line aborts.
pub async fn insert_users<W: Write>(
    store: &mut UsersStore,
    users: &[NewUser],
    reporter: &mut Reporter<W>,
) -> Result<Vec<InsertReport>, AppError> {
    let mut reports = Vec::with_capacity(users.len());

    for user in users {
        let outcome = InsertOutcome::from_result(store.insert_user(user).await);
        match &outcome {
            InsertOutcome::Failed(e) => {
                error!(username = %user.username, error = %e, "Failed to insert user");
            }
            InsertOutcome::Skipped => {
                debug!(username = %user.username, "username already present; row skipped");
                reporter.user_inserted(&user.username)?;
            }
            InsertOutcome::Inserted => {
                reporter.user_inserted(&user.username)?;
            }
        }
        reports.push(InsertReport {
            username: user.username.clone(),
            outcome,
        });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_batch_repeats_first_username() {
        let users = sample_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0], users[2]);
        assert_ne!(users[0].username, users[1].username);
    }

    #[test]
    fn zero_rows_is_a_skip_and_still_a_success() {
        let outcome = InsertOutcome::from_result(Ok(0));
        assert!(matches!(outcome, InsertOutcome::Skipped));
        assert!(outcome.is_success());
    }

    #[test]
    fn one_row_is_an_insert() {
        assert!(matches!(
            InsertOutcome::from_result(Ok(1)),
            InsertOutcome::Inserted
        ));
    }

    #[test]
    fn errors_are_failures() {
        let outcome = InsertOutcome::from_result(Err(sqlx::Error::PoolClosed));
        assert!(matches!(outcome, InsertOutcome::Failed(_)));
        assert!(!outcome.is_success());
    }
}
