use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::days::{Day, DaySelection};
use crate::errors::{ScrimError, ScrimResult};
use crate::models::scrim::{NewScrim, Scrim, UpdateScrim};
use crate::time;

/// Kind of external entity a wizard field can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Channel,
    Role,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Channel => write!(f, "channel"),
            EntityKind::Role => write!(f, "role"),
        }
    }
}

/// A confirmed reference to an external channel or role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: u64,
}

impl EntityRef {
    pub fn mention(&self) -> String {
        match self.kind {
            EntityKind::Channel => format!("<#{}>", self.id),
            EntityKind::Role => format!("<@&{}>", self.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    NotFound,
    Forbidden,
    WrongKind,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound => write!(f, "not found"),
            ResolveError::Forbidden => write!(f, "I can't see it"),
            ResolveError::WrongKind => write!(f, "wrong entity kind"),
        }
    }
}

/// Confirms that a raw channel/role id points at a real, visible entity
/// of the expected kind.
#[async_trait]
pub trait EntityResolver: Send + Sync {
    async fn resolve(&self, kind: EntityKind, id: u64) -> Result<EntityRef, ResolveError>;
}

/// Injectable time source so resolution can be tested at a fixed instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn anchor_zone(&self) -> Tz {
        time::ANCHOR_ZONE
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The wizard fields a user can set, one button each on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    RegChannel,
    SlotlistChannel,
    SuccessRole,
    RequiredMentions,
    TotalSlots,
    OpenTime,
    Reactions,
}

impl FieldKey {
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::RegChannel => "Reg. Channel",
            FieldKey::SlotlistChannel => "Slotlist Channel",
            FieldKey::SuccessRole => "Success Role",
            FieldKey::RequiredMentions => "Req. Mentions",
            FieldKey::TotalSlots => "Total Slots",
            FieldKey::OpenTime => "Open Time",
            FieldKey::Reactions => "Reactions",
        }
    }
}

/// An accepted open-time entry. The raw token is kept so that saving can
/// re-resolve it against save-time "now"; the preview instant is what was
/// resolved when the field was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTime {
    pub token: String,
    pub preview: DateTime<Utc>,
}

/// Working state of one scrim-creation (or edit) session. Unset required
/// fields hold `None`; everything else starts at its product default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrimDraft {
    pub reg_channel: Option<EntityRef>,
    pub slotlist_channel: Option<EntityRef>,
    pub success_role: Option<EntityRef>,
    pub required_mentions: u8,
    pub total_slots: u8,
    pub open_time: Option<OpenTime>,
    pub days: DaySelection,
    pub reactions: (String, String),
}

impl Default for ScrimDraft {
    fn default() -> Self {
        Self {
            reg_channel: None,
            slotlist_channel: None,
            success_role: None,
            required_mentions: 4,
            total_slots: 25,
            open_time: None,
            days: DaySelection::default(),
            reactions: ("✅".to_string(), "❌".to_string()),
        }
    }
}

impl ScrimDraft {
    /// Pre-populate a draft from an existing record for the edit flow.
    /// The stored UTC instant renders back as an absolute wall-clock token
    /// so re-saving keeps the same time of day.
    pub fn from_record(scrim: &Scrim) -> Self {
        Self {
            reg_channel: Some(EntityRef {
                kind: EntityKind::Channel,
                id: scrim.reg_channel_id as u64,
            }),
            slotlist_channel: scrim.slotlist_channel_id.map(|id| EntityRef {
                kind: EntityKind::Channel,
                id: id as u64,
            }),
            success_role: scrim.success_role_id.map(|id| EntityRef {
                kind: EntityKind::Role,
                id: id as u64,
            }),
            total_slots: scrim.total_slots.clamp(1, 30) as u8,
            open_time: Some(OpenTime {
                token: time::format_open_time(scrim.scrim_time),
                preview: scrim.scrim_time,
            }),
            days: DaySelection::parse(&scrim.scrim_days),
            ..Self::default()
        }
    }

    /// Validate and store one field. On failure the draft is unchanged
    /// and the error carries the field-specific message to re-prompt with.
    pub async fn set_field(
        &mut self,
        key: FieldKey,
        raw: &str,
        resolver: &dyn EntityResolver,
        clock: &dyn Clock,
    ) -> ScrimResult<()> {
        match key {
            FieldKey::RequiredMentions => {
                self.required_mentions =
                    parse_bounded(raw, "Required mentions", 1, 10)? as u8;
            }
            FieldKey::TotalSlots => {
                self.total_slots = parse_bounded(raw, "Total slots", 1, 30)? as u8;
            }
            FieldKey::RegChannel => {
                let channel =
                    resolve_entity(raw, EntityKind::Channel, key.label(), resolver).await?;
                self.reg_channel = Some(channel);
                // Slotlist defaults to the registration channel until the
                // user sets it themselves.
                if self.slotlist_channel.is_none() {
                    self.slotlist_channel = Some(channel);
                }
            }
            FieldKey::SlotlistChannel => {
                self.slotlist_channel =
                    Some(resolve_entity(raw, EntityKind::Channel, key.label(), resolver).await?);
            }
            FieldKey::SuccessRole => {
                self.success_role =
                    Some(resolve_entity(raw, EntityKind::Role, key.label(), resolver).await?);
            }
            FieldKey::OpenTime => {
                let preview = time::resolve(raw, clock.now(), clock.anchor_zone())?;
                self.open_time = Some(OpenTime {
                    token: raw.trim().to_string(),
                    preview,
                });
            }
            FieldKey::Reactions => {
                let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
                match parts.as_slice() {
                    [accept, reject] if !accept.is_empty() && !reject.is_empty() => {
                        self.reactions = (accept.to_string(), reject.to_string());
                    }
                    _ => {
                        return Err(ScrimError::InvalidFormat(
                            "Provide two reactions separated by a comma, e.g. ✅, ❌"
                                .to_string(),
                        ))
                    }
                }
            }
        }

        Ok(())
    }

    pub fn toggle_day(&mut self, day: Day) {
        self.days.toggle(day);
    }

    /// True exactly when every required field is set.
    pub fn is_ready_to_save(&self) -> bool {
        self.reg_channel.is_some() && self.success_role.is_some() && self.open_time.is_some()
    }

    /// Produce the record to persist. The open-time token is re-resolved
    /// here: a relative token like "30m" counts from the save, not from
    /// when it was typed.
    pub fn save(&self, guild_id: i64, host_id: i64, clock: &dyn Clock) -> ScrimResult<NewScrim> {
        let (Some(reg), Some(role), Some(open)) =
            (&self.reg_channel, &self.success_role, &self.open_time)
        else {
            return Err(ScrimError::NotReady);
        };

        let scrim_time = time::resolve(&open.token, clock.now(), clock.anchor_zone())?;

        Ok(NewScrim {
            guild_id,
            host_id,
            title: derive_title(scrim_time, clock.anchor_zone()),
            scrim_time,
            scrim_days: self.days.to_string(),
            total_slots: self.total_slots as i32,
            reg_channel_id: reg.id as i64,
            slotlist_channel_id: self.slotlist_channel.map(|c| c.id as i64),
            success_role_id: Some(role.id as i64),
        })
    }

    /// Like [`save`](Self::save), but for applying the draft back onto an
    /// existing record.
    pub fn save_update(&self, clock: &dyn Clock) -> ScrimResult<UpdateScrim> {
        let new = self.save(0, 0, clock)?;

        Ok(UpdateScrim {
            title: new.title,
            scrim_time: new.scrim_time,
            scrim_days: new.scrim_days,
            total_slots: new.total_slots,
            reg_channel_id: new.reg_channel_id,
            slotlist_channel_id: new.slotlist_channel_id,
            success_role_id: new.success_role_id,
        })
    }

    /// Discard the draft without persisting anything.
    pub fn cancel(self) {}
}

fn derive_title(scrim_time: DateTime<Utc>, anchor: Tz) -> String {
    format!(
        "Scrim @ {}",
        scrim_time.with_timezone(&anchor).format("%I:%M %p")
    )
}

fn parse_bounded(raw: &str, field: &'static str, min: i64, max: i64) -> ScrimResult<i64> {
    let out_of_range = || ScrimError::OutOfRange { field, min, max };

    let value: i64 = raw.trim().parse().map_err(|_| out_of_range())?;
    if !(min..=max).contains(&value) {
        return Err(out_of_range());
    }

    Ok(value)
}

/// Extract the numeric id from a mention-style token (`<#id>` / `<@&id>`)
/// or a bare id, then confirm it with the resolver.
async fn resolve_entity(
    raw: &str,
    kind: EntityKind,
    field: &'static str,
    resolver: &dyn EntityResolver,
) -> ScrimResult<EntityRef> {
    let id = extract_id(raw).ok_or_else(|| ScrimError::ResolutionFailed {
        field,
        reason: format!("expected a {} mention or ID", kind),
    })?;

    resolver
        .resolve(kind, id)
        .await
        .map_err(|e| ScrimError::ResolutionFailed {
            field,
            reason: e.to_string(),
        })
}

fn extract_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();

    let mention = raw.starts_with('<') && raw.ends_with('>');
    if !mention && !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
