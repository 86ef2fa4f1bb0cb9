use serde::{Deserialize, Serialize};

use crate::errors::{ScrimError, ScrimResult};

pub const DEFAULT_PREFIX: &str = "!";
pub const MAX_PREFIX_LEN: usize = 10;

/// Per-guild settings, keyed by the Discord guild id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildSettings {
    pub id: i64,
    pub prefix: String,
}

impl GuildSettings {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Check a prefix candidate and return it trimmed.
pub fn validate_prefix(raw: &str) -> ScrimResult<&str> {
    let prefix = raw.trim();

    if prefix.is_empty() {
        return Err(ScrimError::InvalidFormat(
            "The prefix can't be empty.".to_string(),
        ));
    }
    if prefix.chars().count() > MAX_PREFIX_LEN {
        return Err(ScrimError::InvalidFormat(format!(
            "The prefix can't be longer than {MAX_PREFIX_LEN} characters."
        )));
    }

    Ok(prefix)
}
