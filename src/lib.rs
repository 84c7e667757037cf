//! # Konto
//!
//! `konto` is a credential registration and authentication service. It
//! validates candidate identities (username, email, password), stores each
//! password as a salted Argon2id hash in PostgreSQL, and answers login
//! attempts for a username or email identifier.
//!
//! - **Plaintext handling:** passwords travel as [`secrecy::SecretString`]
//!   and are never persisted or logged; only the self-describing hash blob
//!   reaches the database.
//! - **Uniqueness:** usernames and emails are unique across all credentials,
//!   enforced by database constraints so concurrent registrations race
//!   safely.
//! - **Login answers:** an unknown identifier and a wrong password produce
//!   the same response, so callers cannot probe which accounts exist.

pub mod auth;
pub mod cli;
pub mod konto;
