use crate::models::DbGuild;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_guild_settings(pool: &Pool<Postgres>, guild_id: i64) -> Result<Option<DbGuild>> {
    let guild = sqlx::query_as::<_, DbGuild>(
        r#"
        SELECT id, prefix
        FROM guilds
        WHERE id = $1
        "#,
    )
    .bind(guild_id)
    .fetch_optional(pool)
    .await?;

    Ok(guild)
}

/// Insert or update the guild row with a new prefix.
pub async fn set_guild_prefix(pool: &Pool<Postgres>, guild_id: i64, prefix: &str) -> Result<DbGuild> {
    tracing::debug!("Setting prefix for guild {}: {}", guild_id, prefix);

    let guild = sqlx::query_as::<_, DbGuild>(
        r#"
        INSERT INTO guilds (id, prefix)
        VALUES ($1, $2)
        ON CONFLICT (id) DO UPDATE SET prefix = EXCLUDED.prefix
        RETURNING id, prefix
        "#,
    )
    .bind(guild_id)
    .bind(prefix)
    .fetch_one(pool)
    .await?;

    Ok(guild)
}
