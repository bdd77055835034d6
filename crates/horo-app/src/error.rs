//! Error types for the fortune controller.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for controller operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by [`FortuneApp`](crate::FortuneApp) actions.
#[derive(Debug, Error)]
pub enum AppError {
    /// An action needs a sign but none is selected.
    #[error("no zodiac sign selected")]
    NoSignSelected,

    /// The identifier is not one of the twelve signs.
    #[error("unknown zodiac sign: \"{0}\"")]
    UnknownSign(String),

    /// Both the clipboard and its legacy fallback failed.
    #[error("could not copy to clipboard; copy the link manually")]
    CopyFailed,

    /// Preference storage failed.
    #[error("preference store: {0}")]
    Store(#[from] StoreError),
}
