//! Schema migrations for the `users` and `snippets` tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use codemedia_core::error::{AppError, ErrorKind};

/// Migrations compiled in from `migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply any pending migrations and return how many the schema is built from.
pub async fn run_migrations(pool: &PgPool) -> Result<usize, AppError> {
    let known = MIGRATOR.iter().count();
    info!(known, "Applying snippet schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!(known, "Snippet schema is up to date");
    Ok(known)
}
