use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use scrimhub_core::errors::ScrimError;
use scrimhub_core::time::{resolve, ANCHOR_ZONE};

/// 2024-01-01 14:00 IST expressed as UTC.
fn afternoon_ist() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap()
}

#[rstest]
#[case("1d", Duration::days(1))]
#[case("2h", Duration::hours(2))]
#[case("30m", Duration::minutes(30))]
#[case("2 h", Duration::hours(2))]
#[case("  45m  ", Duration::minutes(45))]
#[case("0m", Duration::minutes(0))]
fn relative_tokens_add_to_now_exactly(#[case] token: &str, #[case] delta: Duration) {
    let now = afternoon_ist();
    let resolved = resolve(token, now, ANCHOR_ZONE).unwrap();

    assert_eq!(resolved, now + delta);
}

#[test]
fn absolute_token_still_ahead_today_resolves_to_today() {
    // now is 14:00 IST; 5pm is still ahead
    let resolved = resolve("5pm", afternoon_ist(), ANCHOR_ZONE).unwrap();

    assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap());
}

#[test]
fn absolute_token_already_past_rolls_to_tomorrow() {
    // now is 14:00 IST; 1pm already went by
    let resolved = resolve("1pm", afternoon_ist(), ANCHOR_ZONE).unwrap();

    assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 2, 7, 30, 0).unwrap());
}

#[test]
fn absolute_token_naming_the_current_minute_means_tomorrow() {
    let resolved = resolve("2pm", afternoon_ist(), ANCHOR_ZONE).unwrap();

    assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 2, 8, 30, 0).unwrap());
}

#[rstest]
#[case("13:00", (13, 0))]
#[case("4:00am", (4, 0))]
#[case("4:00 am", (4, 0))]
#[case("12am", (0, 0))]
#[case("12pm", (12, 0))]
#[case("11:59pm", (23, 59))]
#[case("0:15", (0, 15))]
fn absolute_tokens_extract_the_expected_wall_clock_time(
    #[case] token: &str,
    #[case] expected: (u32, u32),
) {
    let now = afternoon_ist();
    let resolved = resolve(token, now, ANCHOR_ZONE).unwrap();
    let local = resolved.with_timezone(&ANCHOR_ZONE);

    use chrono::Timelike;
    assert_eq!((local.hour(), local.minute()), expected);
}

#[rstest]
#[case("2x")]
#[case("abc")]
#[case("")]
#[case("25:00")]
#[case("13pm")]
#[case("5:75pm")]
#[case("5pm tomorrow")]
#[case("h")]
#[case("999999999999999d")]
#[case("9999999999999999m")]
fn unparseable_tokens_fail_with_invalid_format(#[case] token: &str) {
    let result = resolve(token, afternoon_ist(), ANCHOR_ZONE);

    assert!(matches!(result, Err(ScrimError::InvalidFormat(_))));
}

#[test]
fn invalid_format_message_names_acceptable_examples() {
    let err = resolve("garbage", afternoon_ist(), ANCHOR_ZONE).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("2h"));
    assert!(message.contains("5pm"));
    assert!(message.contains("13:00"));
}

#[rstest]
#[case("1d")]
#[case("2h")]
#[case("30m")]
#[case("5pm")]
#[case("1pm")]
#[case("12am")]
fn resolution_is_always_in_the_future(#[case] token: &str) {
    let now = afternoon_ist();
    let resolved = resolve(token, now, ANCHOR_ZONE).unwrap();

    assert!(resolved >= now, "{} resolved into the past", token);
}

#[test]
fn resolving_the_same_token_at_the_same_instant_is_idempotent() {
    let now = afternoon_ist();

    let first = resolve("5pm", now, ANCHOR_ZONE).unwrap();
    let second = resolve("5pm", now, ANCHOR_ZONE).unwrap();

    assert_eq!(first, second);
}

#[test]
fn tokens_are_normalized_before_parsing() {
    let now = afternoon_ist();

    assert_eq!(
        resolve("  5PM ", now, ANCHOR_ZONE).unwrap(),
        resolve("5pm", now, ANCHOR_ZONE).unwrap()
    );
}
