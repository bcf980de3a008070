//! `shelf migrate`: open the database and apply pending migrations.

use anyhow::Result;

use crate::state::Environment;

pub async fn migrate(env: &Environment) -> Result<()> {
    let url = env.database_url();
    let pool = env.open_database().await?;
    pool.writer.close().await;
    pool.reader.close().await;

    tracing::info!(url = %url, "migrations applied");
    println!(
        "  {} Database is up to date: {}",
        console::style("✓").green(),
        console::style(&url).cyan()
    );
    Ok(())
}
