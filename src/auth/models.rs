use sqlx::{postgres::PgRow, FromRow, Row};
use std::fmt;
use uuid::Uuid;

/// A registered identity: username and email bound to a password hash.
///
/// The hash blob stays private to the auth core; it is handed to the
/// verifier and nowhere else.
#[derive(Clone)]
pub struct Credential {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    secret: String,
}

impl Credential {
    pub(super) fn new(id: Uuid, username: String, email: String, secret: String) -> Self {
        Self {
            id,
            username,
            email,
            secret,
        }
    }

    pub(super) fn secret(&self) -> &str {
        &self.secret
    }
}

// Keep the hash blob out of Debug output
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl<'r> FromRow<'r, PgRow> for Credential {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            secret: row.try_get("password_hash")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_the_secret() {
        let credential = Credential::new(
            Uuid::new_v4(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$v=19$m=19456,t=3,p=1$c2FsdA$aGFzaA".to_string(),
        );

        let rendered = format!("{credential:?}");

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("argon2id"));
    }
}
