//! Output ports the controller drives: the display surface and the clipboard.

use std::fmt;

use horo_core::{FortuneCategory, ZodiacSign};
use thiserror::Error;

/// Tone of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The action succeeded.
    Success,
    /// The action failed; the message tells the user what to do.
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A display surface made of named regions.
///
/// Every method is a plain setter; the controller decides what goes where.
pub trait RenderPort {
    /// Reflect the current selection in the sign picker.
    fn set_selection(&mut self, sign: Option<ZodiacSign>);

    /// Enable or disable the "show fortune" action.
    fn set_button_enabled(&mut self, enabled: bool);

    /// Sign name shown in the result header.
    fn set_sign_name(&mut self, name: &str);

    /// Date shown in the result header.
    fn set_date(&mut self, date: &str);

    /// Fill one category card.
    fn set_category(&mut self, category: FortuneCategory, stars: &str, rating: &str, text: &str);

    /// Fill the advice card.
    fn set_advice(&mut self, advice: &str);

    /// Toggle between the result (with share actions) and the empty state.
    fn set_result_visible(&mut self, visible: bool);

    /// Show a transient status message.
    fn show_message(&mut self, text: &str, kind: MessageKind);

    /// Open an external share page.
    fn open_share_window(&mut self, url: &str);
}

/// Why a clipboard write failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The mechanism is not available on this platform.
    #[error("clipboard unavailable")]
    Unavailable,

    /// The mechanism exists but the write failed.
    #[error("clipboard write failed: {0}")]
    Failed(String),
}

/// Which clipboard mechanism accepted the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// The primary clipboard API.
    Clipboard,
    /// The legacy fallback.
    Legacy,
}

/// Clipboard access with an optional legacy fallback.
pub trait Clipboard {
    /// Write text through the primary clipboard mechanism.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Write text through a fallback mechanism. Unsupported unless overridden.
    fn legacy_copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
