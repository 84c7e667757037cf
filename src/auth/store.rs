//! Persistence boundary for credentials.
//!
//! Uniqueness is enforced by the `UNIQUE` constraints in the schema; the
//! `exists` pre-check is advisory and a racing insert is still answered with
//! [`InsertOutcome::Duplicate`] when the constraint fires.

use anyhow::{Context, Result};
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

use super::models::Credential;

/// Outcome when attempting to persist a new credential.
#[derive(Debug)]
pub enum InsertOutcome {
    Created(Credential),
    Duplicate,
}

/// Storage handle, constructed with an explicit pool and passed in where
/// needed instead of living in process-wide state.
#[derive(Clone)]
pub struct CredentialStore {
    pool: PgPool,
}

impl CredentialStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// True if a credential already holds this username or this email.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn exists(&self, username: &str, email: &str) -> Result<bool> {
        let query =
            "SELECT EXISTS(SELECT 1 FROM credentials WHERE username = $1 OR email = $2) AS exists";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(username)
            .bind(email)
            .fetch_one(&self.pool)
            .instrument(span)
            .await
            .context("failed to check if credential exists")?;

        Ok(row.get("exists"))
    }

    /// Persist a new credential.
    ///
    /// Identifier matching is case-sensitive; the unique constraints are the
    /// final arbiter when two registrations race.
    ///
    /// # Errors
    /// Returns an error on any database failure other than a unique violation.
    pub async fn insert(&self, username: &str, email: &str, secret: &str) -> Result<InsertOutcome> {
        let id = Uuid::new_v4();

        let query =
            "INSERT INTO credentials (id, username, email, password_hash) VALUES ($1, $2, $3, $4)";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );
        match sqlx::query(query)
            .bind(id)
            .bind(username)
            .bind(email)
            .bind(secret)
            .execute(&self.pool)
            .instrument(span)
            .await
        {
            Ok(_) => Ok(InsertOutcome::Created(Credential::new(
                id,
                username.to_string(),
                email.to_string(),
                secret.to_string(),
            ))),
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::Duplicate),
            Err(err) => Err(err).context("failed to insert credential"),
        }
    }

    /// Look up a credential by username or email, exact match.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Credential>> {
        let query = "SELECT id, username, email, password_hash FROM credentials WHERE username = $1 OR email = $1";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        sqlx::query_as::<_, Credential>(query)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await
            .context("failed to look up credential")
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct TestDbError {
        code: Option<&'static str>,
    }

    impl fmt::Display for TestDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "test database error")
        }
    }

    impl StdError for TestDbError {}

    impl DatabaseError for TestDbError {
        fn message(&self) -> &'static str {
            "test database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn is_unique_violation_matches_sqlstate() {
        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("23505"),
        }));
        assert!(is_unique_violation(&err));

        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("99999"),
        }));
        assert!(!is_unique_violation(&err));

        let err = sqlx::Error::RowNotFound;
        assert!(!is_unique_violation(&err));
    }
}
