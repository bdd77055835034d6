/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while parsing user-supplied signs and dates.
///
/// Fortune generation itself is total and never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The identifier is not one of the twelve known signs.
    #[error("unknown zodiac sign: \"{0}\"")]
    UnknownSign(String),

    /// The date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: \"{0}\" (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
