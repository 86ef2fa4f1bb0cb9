use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

use scrimhub_core::models::guild::DEFAULT_PREFIX;
use scrimhub_core::models::scrim::{DEFAULT_DM_MESSAGE, DEFAULT_OPEN_MESSAGE};

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create scrims table
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS scrims (
            id BIGSERIAL PRIMARY KEY,
            guild_id BIGINT NOT NULL,
            host_id BIGINT NOT NULL,
            title VARCHAR(200) NOT NULL,
            scrim_time TIMESTAMP WITH TIME ZONE NOT NULL,
            scrim_days VARCHAR(100) NOT NULL DEFAULT 'Mo, Tu, We, Th, Fr, Sa, Su',
            total_slots INT NOT NULL DEFAULT 25,
            is_open BOOLEAN NOT NULL DEFAULT TRUE,
            reg_channel_id BIGINT NOT NULL,
            slotlist_channel_id BIGINT NULL,
            success_role_id BIGINT NULL,
            ping_role_id BIGINT NULL,
            open_message TEXT NOT NULL DEFAULT '{DEFAULT_OPEN_MESSAGE}',
            dm_message TEXT NOT NULL DEFAULT '{DEFAULT_DM_MESSAGE}',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#
    ))
    .execute(pool)
    .await?;

    // Create guilds table
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS guilds (
            id BIGINT PRIMARY KEY,
            prefix VARCHAR(10) NOT NULL DEFAULT '{DEFAULT_PREFIX}'
        );
        "#
    ))
    .execute(pool)
    .await?;

    // Index for the per-guild dashboard listing
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_scrims_guild_time
        ON scrims (guild_id, scrim_time);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
