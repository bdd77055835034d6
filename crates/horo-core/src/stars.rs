/// Width of the star display. Ratings are always drawn on a five-star scale.
pub const MAX_STARS: u8 = 5;

const FILLED: char = '★';
const EMPTY: char = '☆';

/// Render a rating as `rating` filled stars followed by `5 - rating` empty ones.
///
/// Ratings above five are drawn as five filled stars.
pub fn get_stars(rating: u8) -> String {
    let filled = rating.min(MAX_STARS);
    let mut out = String::with_capacity(usize::from(MAX_STARS) * FILLED.len_utf8());
    out.extend(std::iter::repeat_n(FILLED, usize::from(filled)));
    out.extend(std::iter::repeat_n(EMPTY, usize::from(MAX_STARS - filled)));
    out
}

/// Short rating label shown next to the stars, e.g. `4星`.
pub fn rating_label(rating: u8) -> String {
    format!("{rating}星")
}
