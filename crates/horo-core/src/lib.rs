//! Deterministic daily zodiac fortunes.
//!
//! A fortune is a pure function of a calendar day and a zodiac sign: the day's
//! canonical string and the sign identifier are hashed with a 32-bit rolling
//! hash, and the hash picks entries from fixed rating/text pools. The same
//! `(day, sign)` pair always yields the same [`DailyFortune`].

/// Calendar days and the clock abstraction used to obtain "today".
pub mod calendar;
/// Error types used throughout the crate.
pub mod error;
/// The fortune generator and its result types.
pub mod fortune;
/// Polynomial rolling hash and pool index selection.
pub mod hash;
/// Fixed rating/text pools for each fortune category.
pub mod pools;
/// The twelve zodiac signs.
pub mod sign;
/// Star glyph rendering for ratings.
pub mod stars;

/// Re-export calendar types.
pub use calendar::{CalendarDay, Clock, FixedClock, SystemClock};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export fortune types.
pub use fortune::{CategoryFortune, DailyFortune, FortuneCategory, fortune_for};
/// Re-export sign types.
pub use sign::{UNKNOWN_SIGN_LABEL, ZodiacSign, display_name_for};
/// Re-export star rendering.
pub use stars::{MAX_STARS, get_stars, rating_label};
