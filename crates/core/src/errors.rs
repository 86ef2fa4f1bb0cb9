use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrimError {
    /// Carries the complete user-facing rejection message for an input
    /// that failed a field's grammar.
    #[error("{0}")]
    InvalidFormat(String),

    #[error("{field} must be a number between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("Could not resolve {field}: {reason}")]
    ResolutionFailed {
        field: &'static str,
        reason: String,
    },

    #[error("You took too long to respond.")]
    TimedOut,

    #[error("Registration channel, success role and open time must be set before saving.")]
    NotReady,

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type ScrimResult<T> = Result<T, ScrimError>;
