use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{ScrimError, ScrimResult};

/// The fixed regional timezone scrim times are entered and displayed in.
pub const ANCHOR_ZONE: Tz = chrono_tz::Asia::Kolkata;

lazy_static! {
    static ref RELATIVE_RE: Regex = Regex::new(r"^(\d+)\s*([dhm])$").unwrap();
    static ref ABSOLUTE_RE: Regex = Regex::new(r"^(\d{1,2})(?::(\d{1,2}))?\s*(am|pm)?$").unwrap();
}

fn invalid_format() -> ScrimError {
    ScrimError::InvalidFormat("Invalid time format. Use '2h', '5pm', '13:00', etc.".to_string())
}

/// Resolve a flexible time token into an absolute UTC instant that is
/// always in the future relative to `now`.
///
/// Relative tokens ('1d', '2h', '30m') are added to `now` directly.
/// Absolute tokens ('5pm', '4:00am', '13:00') are interpreted as the next
/// occurrence of that wall-clock time in `anchor`: today if still ahead,
/// otherwise tomorrow.
pub fn resolve(token: &str, now: DateTime<Utc>, anchor: Tz) -> ScrimResult<DateTime<Utc>> {
    let token = token.trim().to_lowercase();

    if let Some(caps) = RELATIVE_RE.captures(&token) {
        let value: i64 = caps[1].parse().map_err(|_| invalid_format())?;
        // Counts large enough to overflow the calendar are nonsense input.
        let delta = match &caps[2] {
            "d" => Duration::try_days(value),
            "h" => Duration::try_hours(value),
            _ => Duration::try_minutes(value),
        }
        .ok_or_else(invalid_format)?;
        return now.checked_add_signed(delta).ok_or_else(invalid_format);
    }

    let (hour, minute) = extract_time_of_day(&token)?;

    let now_local = now.with_timezone(&anchor);
    let naive = now_local
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(invalid_format)?;
    let candidate = anchor
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(invalid_format)?
        .with_timezone(&Utc);

    // A wall-clock time that already went by today means tomorrow.
    if candidate <= now {
        return Ok(candidate + Duration::days(1));
    }

    Ok(candidate)
}

/// Pull an hour and minute out of an absolute-time token, accepting
/// 12-hour forms with an am/pm suffix and 24-hour forms.
fn extract_time_of_day(token: &str) -> ScrimResult<(u32, u32)> {
    let caps = ABSOLUTE_RE.captures(token).ok_or_else(invalid_format)?;

    let hour: u32 = caps[1].parse().map_err(|_| invalid_format())?;
    let minute: u32 = caps
        .get(2)
        .map(|m| m.as_str().parse())
        .transpose()
        .map_err(|_| invalid_format())?
        .unwrap_or(0);

    if minute > 59 {
        return Err(invalid_format());
    }

    let hour = match caps.get(3).map(|m| m.as_str()) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return Err(invalid_format());
            }
            match (meridiem, hour) {
                ("am", 12) => 0,
                ("am", h) => h,
                ("pm", 12) => 12,
                (_, h) => h + 12,
            }
        }
        None => {
            if hour > 23 {
                return Err(invalid_format());
            }
            hour
        }
    };

    Ok((hour, minute))
}

/// Format a stored UTC instant the way users entered it: wall-clock time
/// in the anchor zone.
pub fn format_open_time(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&ANCHOR_ZONE)
        .format("%I:%M %p")
        .to_string()
}
