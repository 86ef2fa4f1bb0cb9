use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use rstest::rstest;
use scrimhub_core::days::Day;
use scrimhub_core::errors::ScrimError;
use scrimhub_core::models::scrim::Scrim;
use scrimhub_core::time::ANCHOR_ZONE;
use scrimhub_core::wizard::{
    Clock, EntityKind, EntityRef, EntityResolver, FieldKey, ResolveError, ScrimDraft,
};

/// Resolver that confirms every id except a few designated failures.
struct StubResolver;

const MISSING_ID: u64 = 404;
const HIDDEN_ID: u64 = 403;

#[async_trait]
impl EntityResolver for StubResolver {
    async fn resolve(&self, kind: EntityKind, id: u64) -> Result<EntityRef, ResolveError> {
        match id {
            MISSING_ID => Err(ResolveError::NotFound),
            HIDDEN_ID => Err(ResolveError::Forbidden),
            _ => Ok(EntityRef { kind, id }),
        }
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }

    fn anchor_zone(&self) -> Tz {
        ANCHOR_ZONE
    }
}

/// 2024-01-01 14:00 IST expressed as UTC.
fn afternoon_ist() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap()
}

fn clock() -> FixedClock {
    FixedClock(afternoon_ist())
}

async fn set(draft: &mut ScrimDraft, key: FieldKey, raw: &str) -> Result<(), ScrimError> {
    draft.set_field(key, raw, &StubResolver, &clock()).await
}

#[test]
fn fresh_draft_is_not_ready_to_save() {
    let draft = ScrimDraft::default();

    assert!(!draft.is_ready_to_save());
    assert_eq!(draft.required_mentions, 4);
    assert_eq!(draft.total_slots, 25);
    assert_eq!(draft.reactions, ("✅".to_string(), "❌".to_string()));
}

#[tokio::test]
async fn readiness_requires_exactly_the_three_required_fields() {
    let mut draft = ScrimDraft::default();

    set(&mut draft, FieldKey::OpenTime, "5pm").await.unwrap();
    assert!(!draft.is_ready_to_save());

    set(&mut draft, FieldKey::SuccessRole, "<@&222>").await.unwrap();
    assert!(!draft.is_ready_to_save());

    set(&mut draft, FieldKey::RegChannel, "<#111>").await.unwrap();
    assert!(draft.is_ready_to_save());
}

#[tokio::test]
async fn readiness_does_not_depend_on_assignment_order() {
    let mut draft = ScrimDraft::default();

    set(&mut draft, FieldKey::RegChannel, "111").await.unwrap();
    set(&mut draft, FieldKey::OpenTime, "30m").await.unwrap();
    assert!(!draft.is_ready_to_save());

    set(&mut draft, FieldKey::SuccessRole, "222").await.unwrap();
    assert!(draft.is_ready_to_save());
}

#[tokio::test]
async fn setting_reg_channel_auto_links_an_unset_slotlist_channel() {
    let mut draft = ScrimDraft::default();

    set(&mut draft, FieldKey::RegChannel, "<#111>").await.unwrap();

    assert_eq!(draft.slotlist_channel.map(|c| c.id), Some(111));
}

#[tokio::test]
async fn auto_link_never_overwrites_an_explicit_slotlist_channel() {
    let mut draft = ScrimDraft::default();

    set(&mut draft, FieldKey::RegChannel, "<#111>").await.unwrap();
    set(&mut draft, FieldKey::SlotlistChannel, "<#500>").await.unwrap();
    set(&mut draft, FieldKey::RegChannel, "<#999>").await.unwrap();

    assert_eq!(draft.reg_channel.map(|c| c.id), Some(999));
    assert_eq!(draft.slotlist_channel.map(|c| c.id), Some(500));
}

#[rstest]
#[case(FieldKey::TotalSlots, "0")]
#[case(FieldKey::TotalSlots, "31")]
#[case(FieldKey::TotalSlots, "abc")]
#[case(FieldKey::TotalSlots, "-3")]
#[case(FieldKey::RequiredMentions, "0")]
#[case(FieldKey::RequiredMentions, "11")]
#[tokio::test]
async fn out_of_range_numeric_inputs_leave_the_draft_unchanged(
    #[case] key: FieldKey,
    #[case] raw: &str,
) {
    let mut draft = ScrimDraft::default();
    let before = draft.clone();

    let result = set(&mut draft, key, raw).await;

    assert!(matches!(result, Err(ScrimError::OutOfRange { .. })));
    assert_eq!(draft, before);
}

#[tokio::test]
async fn numeric_inputs_are_coerced_within_bounds() {
    let mut draft = ScrimDraft::default();

    set(&mut draft, FieldKey::TotalSlots, "12").await.unwrap();
    set(&mut draft, FieldKey::RequiredMentions, " 7 ").await.unwrap();

    assert_eq!(draft.total_slots, 12);
    assert_eq!(draft.required_mentions, 7);
}

#[rstest]
#[case("not-a-channel")]
#[case("<#404>")]
#[case("<#403>")]
#[tokio::test]
async fn unresolvable_channel_references_fail_and_leave_the_field_unset(#[case] raw: &str) {
    let mut draft = ScrimDraft::default();

    let result = set(&mut draft, FieldKey::RegChannel, raw).await;

    assert!(matches!(result, Err(ScrimError::ResolutionFailed { .. })));
    assert_eq!(draft.reg_channel, None);
    assert_eq!(draft.slotlist_channel, None);
}

#[tokio::test]
async fn resolution_error_names_the_field() {
    let mut draft = ScrimDraft::default();

    let err = set(&mut draft, FieldKey::SuccessRole, "<@&404>")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Success Role"));
}

#[tokio::test]
async fn invalid_time_tokens_propagate_the_parser_error() {
    let mut draft = ScrimDraft::default();

    let result = set(&mut draft, FieldKey::OpenTime, "whenever").await;

    assert!(matches!(result, Err(ScrimError::InvalidFormat(_))));
    assert_eq!(draft.open_time, None);
}

#[tokio::test]
async fn reactions_accept_a_comma_separated_pair() {
    let mut draft = ScrimDraft::default();

    set(&mut draft, FieldKey::Reactions, "🔥, 💧").await.unwrap();
    assert_eq!(draft.reactions, ("🔥".to_string(), "💧".to_string()));

    let result = set(&mut draft, FieldKey::Reactions, "only-one").await;
    assert!(matches!(result, Err(ScrimError::InvalidFormat(_))));
    assert_eq!(draft.reactions, ("🔥".to_string(), "💧".to_string()));
}

#[test]
fn save_before_ready_fails_with_not_ready() {
    let draft = ScrimDraft::default();

    let result = draft.save(1, 2, &clock());

    assert!(matches!(result, Err(ScrimError::NotReady)));
}

#[tokio::test]
async fn save_produces_a_record_with_a_derived_title() {
    let mut draft = ScrimDraft::default();
    set(&mut draft, FieldKey::RegChannel, "<#111>").await.unwrap();
    set(&mut draft, FieldKey::SuccessRole, "<@&222>").await.unwrap();
    set(&mut draft, FieldKey::OpenTime, "5pm").await.unwrap();

    let new = draft.save(10, 20, &clock()).unwrap();

    assert_eq!(new.guild_id, 10);
    assert_eq!(new.host_id, 20);
    assert_eq!(new.title, "Scrim @ 05:00 PM");
    // 5pm IST on the same day, stored as UTC
    assert_eq!(
        new.scrim_time,
        Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap()
    );
    assert_eq!(new.reg_channel_id, 111);
    assert_eq!(new.slotlist_channel_id, Some(111));
    assert_eq!(new.success_role_id, Some(222));
    assert_eq!(new.total_slots, 25);
    assert_eq!(new.scrim_days, "Mo, Tu, We, Th, Fr, Sa, Su");
}

#[tokio::test]
async fn save_re_resolves_relative_tokens_against_save_time() {
    let mut draft = ScrimDraft::default();
    set(&mut draft, FieldKey::RegChannel, "111").await.unwrap();
    set(&mut draft, FieldKey::SuccessRole, "222").await.unwrap();
    set(&mut draft, FieldKey::OpenTime, "30m").await.unwrap();

    // An hour passes between entering the field and pressing save.
    let later = FixedClock(afternoon_ist() + Duration::hours(1));
    let new = draft.save(1, 2, &later).unwrap();

    assert_eq!(new.scrim_time, later.now() + Duration::minutes(30));
}

#[tokio::test]
async fn toggled_days_flow_into_the_saved_record() {
    let mut draft = ScrimDraft::default();
    set(&mut draft, FieldKey::RegChannel, "111").await.unwrap();
    set(&mut draft, FieldKey::SuccessRole, "222").await.unwrap();
    set(&mut draft, FieldKey::OpenTime, "5pm").await.unwrap();

    draft.toggle_day(Day::Saturday);
    draft.toggle_day(Day::Sunday);

    let new = draft.save(1, 2, &clock()).unwrap();

    assert_eq!(new.scrim_days, "Mo, Tu, We, Th, Fr");
}

fn sample_record() -> Scrim {
    Scrim {
        id: 7,
        guild_id: 10,
        host_id: 20,
        title: "Scrim @ 05:00 PM".to_string(),
        scrim_time: Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap(),
        scrim_days: "Mo, We, Fr".to_string(),
        total_slots: 16,
        is_open: true,
        reg_channel_id: 111,
        slotlist_channel_id: Some(112),
        success_role_id: Some(222),
        ping_role_id: None,
        open_message: "Registration is now open!".to_string(),
        dm_message: "You have successfully registered for {scrim_title}.".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn editing_an_existing_record_starts_from_a_ready_draft() {
    let draft = ScrimDraft::from_record(&sample_record());

    assert!(draft.is_ready_to_save());
    assert_eq!(draft.reg_channel.map(|c| c.id), Some(111));
    assert_eq!(draft.slotlist_channel.map(|c| c.id), Some(112));
    assert_eq!(draft.success_role.map(|r| r.id), Some(222));
    assert_eq!(draft.total_slots, 16);
    assert!(!draft.days.is_active(Day::Tuesday));
    assert!(draft.days.is_active(Day::Friday));
}

#[test]
fn editing_renders_the_stored_time_back_as_a_wall_clock_token() {
    let draft = ScrimDraft::from_record(&sample_record());

    let open = draft.open_time.clone().expect("open time should be populated");
    assert_eq!(open.token, "05:00 PM");

    // Saving an edit keeps the same time of day.
    let update = draft.save_update(&clock()).unwrap();
    assert_eq!(
        update.scrim_time,
        Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap()
    );
    assert_eq!(update.title, "Scrim @ 05:00 PM");
}
