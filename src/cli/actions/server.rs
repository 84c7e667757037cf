use crate::auth::hasher::CredentialHasher;
use crate::cli::actions::Action;
use crate::konto::new;
use anyhow::{anyhow, Result};
use tracing::info;
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            hash_cost,
        } => {
            let parsed = Url::parse(&dsn)?;

            if !matches!(parsed.scheme(), "postgres" | "postgresql") {
                return Err(anyhow!("unsupported DSN scheme: {}", parsed.scheme()));
            }

            // Log the target without credentials
            info!(
                "Using database {}{}",
                parsed.host_str().unwrap_or("localhost"),
                parsed.path()
            );

            let hasher = CredentialHasher::new(hash_cost)?;

            new(port, dsn, hasher).await?;
        }
    }

    Ok(())
}
