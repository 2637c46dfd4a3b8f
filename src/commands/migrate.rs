//! Migrate command - Manages the `banco` / `proposta` schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(
        &config.database_url,
        config.database_max_connections,
    )
    .await?;

    for line in apply(&db, args.action).await? {
        println!("{}", line);
    }

    Ok(())
}

/// Run one migration action and report the schema state afterwards.
pub async fn apply(db: &Database, action: MigrateAction) -> AppResult<Vec<String>> {
    match action {
        MigrateAction::Up => db.run_migrations().await?,
        MigrateAction::Down => db.rollback_migration().await?,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping banco and proposta before re-running all migrations");
            db.fresh_migrations().await?
        }
        MigrateAction::Status => {}
    }

    let status = db.migration_status().await?;
    let pending = status.iter().filter(|(_, applied)| !applied).count();
    tracing::info!(
        ?action,
        applied = status.len() - pending,
        pending,
        "Migration command finished"
    );

    Ok(status_lines(&status))
}

/// One line per migration: `[x] name` when applied, `[ ] name` when pending
pub fn status_lines(status: &[(String, bool)]) -> Vec<String> {
    status
        .iter()
        .map(|(name, applied)| format!("[{}] {}", if *applied { 'x' } else { ' ' }, name))
        .collect()
}
