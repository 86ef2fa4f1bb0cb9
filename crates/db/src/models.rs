use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scrimhub_core::models::guild::GuildSettings;
use scrimhub_core::models::scrim::Scrim;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScrim {
    pub id: i64,
    pub guild_id: i64,
    pub host_id: i64,
    pub title: String,
    pub scrim_time: DateTime<Utc>,
    pub scrim_days: String,
    pub total_slots: i32,
    pub is_open: bool,
    pub reg_channel_id: i64,
    pub slotlist_channel_id: Option<i64>,
    pub success_role_id: Option<i64>,
    pub ping_role_id: Option<i64>,
    pub open_message: String,
    pub dm_message: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbScrim> for Scrim {
    fn from(row: DbScrim) -> Self {
        Scrim {
            id: row.id,
            guild_id: row.guild_id,
            host_id: row.host_id,
            title: row.title,
            scrim_time: row.scrim_time,
            scrim_days: row.scrim_days,
            total_slots: row.total_slots,
            is_open: row.is_open,
            reg_channel_id: row.reg_channel_id,
            slotlist_channel_id: row.slotlist_channel_id,
            success_role_id: row.success_role_id,
            ping_role_id: row.ping_role_id,
            open_message: row.open_message,
            dm_message: row.dm_message,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbGuild {
    pub id: i64,
    pub prefix: String,
}

impl From<DbGuild> for GuildSettings {
    fn from(row: DbGuild) -> Self {
        GuildSettings {
            id: row.id,
            prefix: row.prefix,
        }
    }
}
