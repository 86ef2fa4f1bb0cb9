use crate::models::DbScrim;
use eyre::Result;
use scrimhub_core::models::scrim::{NewScrim, UpdateScrim};
use sqlx::{Pool, Postgres};

const SCRIM_COLUMNS: &str = "id, guild_id, host_id, title, scrim_time, scrim_days, total_slots, \
     is_open, reg_channel_id, slotlist_channel_id, success_role_id, ping_role_id, \
     open_message, dm_message, created_at";

pub async fn create_scrim(pool: &Pool<Postgres>, new: &NewScrim) -> Result<DbScrim> {
    tracing::debug!(
        "Creating scrim: guild_id={}, host_id={}, title={}",
        new.guild_id,
        new.host_id,
        new.title
    );

    let scrim = sqlx::query_as::<_, DbScrim>(&format!(
        r#"
        INSERT INTO scrims (guild_id, host_id, title, scrim_time, scrim_days,
                            total_slots, reg_channel_id, slotlist_channel_id, success_role_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {SCRIM_COLUMNS}
        "#
    ))
    .bind(new.guild_id)
    .bind(new.host_id)
    .bind(&new.title)
    .bind(new.scrim_time)
    .bind(&new.scrim_days)
    .bind(new.total_slots)
    .bind(new.reg_channel_id)
    .bind(new.slotlist_channel_id)
    .bind(new.success_role_id)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Scrim created successfully: id={}", scrim.id);
    Ok(scrim)
}

pub async fn get_scrim_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbScrim>> {
    let scrim = sqlx::query_as::<_, DbScrim>(&format!(
        r#"
        SELECT {SCRIM_COLUMNS}
        FROM scrims
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(scrim)
}

/// All scrims of one guild, ordered by open time ascending for the
/// dashboard listing.
pub async fn list_scrims_by_guild(pool: &Pool<Postgres>, guild_id: i64) -> Result<Vec<DbScrim>> {
    let scrims = sqlx::query_as::<_, DbScrim>(&format!(
        r#"
        SELECT {SCRIM_COLUMNS}
        FROM scrims
        WHERE guild_id = $1
        ORDER BY scrim_time ASC
        "#
    ))
    .bind(guild_id)
    .fetch_all(pool)
    .await?;

    Ok(scrims)
}

pub async fn update_scrim(
    pool: &Pool<Postgres>,
    id: i64,
    update: &UpdateScrim,
) -> Result<DbScrim> {
    tracing::debug!("Updating scrim: id={}, title={}", id, update.title);

    let scrim = sqlx::query_as::<_, DbScrim>(&format!(
        r#"
        UPDATE scrims
        SET title = $2, scrim_time = $3, scrim_days = $4, total_slots = $5,
            reg_channel_id = $6, slotlist_channel_id = $7, success_role_id = $8
        WHERE id = $1
        RETURNING {SCRIM_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&update.title)
    .bind(update.scrim_time)
    .bind(&update.scrim_days)
    .bind(update.total_slots)
    .bind(update.reg_channel_id)
    .bind(update.slotlist_channel_id)
    .bind(update.success_role_id)
    .fetch_one(pool)
    .await?;

    Ok(scrim)
}

pub async fn delete_scrim(pool: &Pool<Postgres>, id: i64) -> Result<()> {
    tracing::debug!("Deleting scrim: id={}", id);

    sqlx::query(
        r#"
        DELETE FROM scrims
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
