use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default registration-open announcement template.
pub const DEFAULT_OPEN_MESSAGE: &str = "Registration is now open!";
/// Default DM template sent on successful registration.
pub const DEFAULT_DM_MESSAGE: &str = "You have successfully registered for {scrim_title}.";

/// A persisted scrim event. Times are stored as UTC instants and only
/// converted to the anchor zone for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scrim {
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

/// Fields written when a wizard draft is saved for the first time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewScrim {
    pub guild_id: i64,
    pub host_id: i64,
    pub title: String,
    pub scrim_time: DateTime<Utc>,
    pub scrim_days: String,
    pub total_slots: i32,
    pub reg_channel_id: i64,
    pub slotlist_channel_id: Option<i64>,
    pub success_role_id: Option<i64>,
}

/// Fields applied in place when an edited draft is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScrim {
    pub title: String,
    pub scrim_time: DateTime<Utc>,
    pub scrim_days: String,
    pub total_slots: i32,
    pub reg_channel_id: i64,
    pub slotlist_channel_id: Option<i64>,
    pub success_role_id: Option<i64>,
}
