use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{from_str, to_string};
use scrimhub_core::models::guild::{
    validate_prefix, GuildSettings, DEFAULT_PREFIX, MAX_PREFIX_LEN,
};
use scrimhub_core::models::scrim::{
    NewScrim, Scrim, DEFAULT_DM_MESSAGE, DEFAULT_OPEN_MESSAGE,
};

#[test]
fn test_scrim_serialization() {
    let scrim = Scrim {
        id: 1,
        guild_id: 100,
        host_id: 200,
        title: "Scrim @ 05:00 PM".to_string(),
        scrim_time: Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap(),
        scrim_days: "Mo, Tu, We".to_string(),
        total_slots: 25,
        is_open: true,
        reg_channel_id: 111,
        slotlist_channel_id: None,
        success_role_id: Some(222),
        ping_role_id: None,
        open_message: DEFAULT_OPEN_MESSAGE.to_string(),
        dm_message: DEFAULT_DM_MESSAGE.to_string(),
        created_at: Utc::now(),
    };

    let json = to_string(&scrim).expect("Failed to serialize scrim");
    let deserialized: Scrim = from_str(&json).expect("Failed to deserialize scrim");

    assert_eq!(deserialized.id, scrim.id);
    assert_eq!(deserialized.guild_id, scrim.guild_id);
    assert_eq!(deserialized.title, scrim.title);
    assert_eq!(deserialized.scrim_time, scrim.scrim_time);
    assert_eq!(deserialized.scrim_days, scrim.scrim_days);
    assert_eq!(deserialized.slotlist_channel_id, scrim.slotlist_channel_id);
    assert_eq!(deserialized.success_role_id, scrim.success_role_id);
}

#[test]
fn test_new_scrim_serialization() {
    let new_scrim = NewScrim {
        guild_id: 100,
        host_id: 200,
        title: "Scrim @ 09:00 AM".to_string(),
        scrim_time: Utc.with_ymd_and_hms(2024, 1, 2, 3, 30, 0).unwrap(),
        scrim_days: "Sa, Su".to_string(),
        total_slots: 16,
        reg_channel_id: 111,
        slotlist_channel_id: Some(112),
        success_role_id: Some(222),
    };

    let json = to_string(&new_scrim).expect("Failed to serialize new scrim");
    let deserialized: NewScrim = from_str(&json).expect("Failed to deserialize new scrim");

    assert_eq!(deserialized.guild_id, new_scrim.guild_id);
    assert_eq!(deserialized.scrim_time, new_scrim.scrim_time);
    assert_eq!(deserialized.total_slots, new_scrim.total_slots);
}

#[test]
fn test_guild_settings_defaults() {
    let settings = GuildSettings::new(42);

    assert_eq!(settings.id, 42);
    assert_eq!(settings.prefix, DEFAULT_PREFIX);
    assert!(DEFAULT_PREFIX.chars().count() <= MAX_PREFIX_LEN);
}

#[test]
fn test_prefix_validation_trims_and_bounds() {
    assert_eq!(validate_prefix(" ? ").unwrap(), "?");
    assert_eq!(validate_prefix("!!").unwrap(), "!!");

    let empty = validate_prefix("   ").unwrap_err();
    assert!(empty.to_string().contains("empty"));

    // One character over the limit
    let long = validate_prefix("abcdefghijk").unwrap_err();
    assert!(long.to_string().contains("10"));
}

#[test]
fn test_message_templates_mention_the_scrim_title_placeholder() {
    assert!(DEFAULT_DM_MESSAGE.contains("{scrim_title}"));
    assert!(!DEFAULT_OPEN_MESSAGE.is_empty());
}
