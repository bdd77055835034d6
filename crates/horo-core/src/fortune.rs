//! The deterministic fortune generator.
//!
//! The seed for a `(day, sign)` pair is the day's canonical string followed by
//! the sign identifier. Each category hashes `seed + offset` where the offset
//! is the category's position (0-4); advice uses offset 5.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDay;
use crate::hash::pick_index;
use crate::pools::{self, PoolEntry};
use crate::sign::ZodiacSign;

/// Seed offset used for the advice pick.
pub const ADVICE_OFFSET: u32 = 5;

/// One of the five rated fortune categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FortuneCategory {
    /// General luck for the day.
    Overall,
    /// Romance and relationships.
    Love,
    /// Work and study.
    Career,
    /// Money.
    Wealth,
    /// Physical wellbeing.
    Health,
}

impl FortuneCategory {
    /// All categories in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Overall,
            Self::Love,
            Self::Career,
            Self::Wealth,
            Self::Health,
        ]
    }

    /// Offset appended to the seed for this category.
    pub fn offset(self) -> u32 {
        match self {
            Self::Overall => 0,
            Self::Love => 1,
            Self::Career => 2,
            Self::Wealth => 3,
            Self::Health => 4,
        }
    }

    /// Lowercase key, also used to name display regions.
    pub fn key(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Love => "love",
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Health => "health",
        }
    }

    /// Chinese card title.
    pub fn label(self) -> &'static str {
        match self {
            Self::Overall => "综合运势",
            Self::Love => "爱情运势",
            Self::Career => "事业运势",
            Self::Wealth => "财富运势",
            Self::Health => "健康运势",
        }
    }

    /// The fixed pool this category draws from.
    pub fn pool(self) -> &'static [PoolEntry] {
        match self {
            Self::Overall => pools::OVERALL,
            Self::Love => pools::LOVE,
            Self::Career => pools::CAREER,
            Self::Wealth => pools::WEALTH,
            Self::Health => pools::HEALTH,
        }
    }
}

impl fmt::Display for FortuneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A rating and text for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryFortune {
    /// Star rating, 1-5.
    pub rating: u8,
    /// Fortune text.
    pub text: &'static str,
}

impl From<PoolEntry> for CategoryFortune {
    fn from(entry: PoolEntry) -> Self {
        Self {
            rating: entry.rating,
            text: entry.text,
        }
    }
}

/// The full fortune for one sign on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFortune {
    /// The day this fortune is for.
    pub day: CalendarDay,
    /// The sign this fortune is for.
    pub sign: ZodiacSign,
    /// General luck.
    pub overall: CategoryFortune,
    /// Romance.
    pub love: CategoryFortune,
    /// Work.
    pub career: CategoryFortune,
    /// Money.
    pub wealth: CategoryFortune,
    /// Wellbeing.
    pub health: CategoryFortune,
    /// One line of advice.
    pub advice: &'static str,
}

impl DailyFortune {
    /// Look up a category's fortune.
    pub fn get(&self, category: FortuneCategory) -> &CategoryFortune {
        match category {
            FortuneCategory::Overall => &self.overall,
            FortuneCategory::Love => &self.love,
            FortuneCategory::Career => &self.career,
            FortuneCategory::Wealth => &self.wealth,
            FortuneCategory::Health => &self.health,
        }
    }

    /// Iterate categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = (FortuneCategory, &CategoryFortune)> {
        FortuneCategory::all().iter().map(|c| (*c, self.get(*c)))
    }
}

/// Seed string for a day and sign, e.g. `Fri Oct 16 2026leo`.
pub fn seed_for(day: CalendarDay, sign: ZodiacSign) -> String {
    format!("{}{}", day.canonical(), sign.id())
}

fn pick<T: Copy>(seed: &str, offset: u32, pool: &[T]) -> T {
    pool[pick_index(&format!("{seed}{offset}"), pool.len())]
}

/// Compute the fortune for `sign` on `day`. Pure and deterministic.
pub fn fortune_for(day: CalendarDay, sign: ZodiacSign) -> DailyFortune {
    let seed = seed_for(day, sign);
    let category = |c: FortuneCategory| CategoryFortune::from(pick(&seed, c.offset(), c.pool()));

    DailyFortune {
        day,
        sign,
        overall: category(FortuneCategory::Overall),
        love: category(FortuneCategory::Love),
        career: category(FortuneCategory::Career),
        wealth: category(FortuneCategory::Wealth),
        health: category(FortuneCategory::Health),
        advice: pick(&seed, ADVICE_OFFSET, pools::ADVICE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn seed_concatenates_day_and_sign() {
        assert_eq!(
            seed_for(day(2026, 10, 16), ZodiacSign::Leo),
            "Fri Oct 16 2026leo"
        );
    }

    #[test]
    fn offsets_are_distinct_and_precede_advice() {
        let offsets: Vec<u32> = FortuneCategory::all().iter().map(|c| c.offset()).collect();
        assert_eq!(offsets, [0, 1, 2, 3, 4]);
        assert!(!offsets.contains(&ADVICE_OFFSET));
    }

    #[test]
    fn known_fortune_leo() {
        let f = fortune_for(day(2026, 10, 16), ZodiacSign::Leo);
        for (_, cat) in f.categories() {
            assert_eq!(cat.rating, 4);
        }
        assert_eq!(f.overall.text, "整体运势良好，适合开展新计划。");
        assert_eq!(f.love.text, "感情甜蜜，与伴侣关系融洽。");
        assert_eq!(f.advice, "今日适合学习新知识，提升自我。");
    }

    #[test]
    fn known_fortune_pisces() {
        let f = fortune_for(day(2006, 1, 2), ZodiacSign::Pisces);
        assert_eq!(f.overall.rating, 5);
        assert_eq!(f.health.text, "身体状况极佳，精力充沛。");
        assert_eq!(f.advice, "多与人沟通交流，会有意外收获。");
    }

    #[test]
    fn negative_hash_is_clamped() {
        // Every gemini seed on this day hashes to a negative number.
        let f = fortune_for(day(2026, 10, 16), ZodiacSign::Gemini);
        assert_eq!(f.overall.rating, 4);
        assert_eq!(f.advice, "多与人沟通交流，会有意外收获。");

        let f = fortune_for(day(2026, 10, 16), ZodiacSign::Aquarius);
        assert_eq!(f.career.rating, 3);
        assert_eq!(f.advice, "勇敢尝试新事物，会有不错的结果。");
    }

    #[test]
    fn get_matches_fields() {
        let f = fortune_for(day(2026, 10, 16), ZodiacSign::Scorpio);
        assert_eq!(f.get(FortuneCategory::Wealth), &f.wealth);
        assert_eq!(f.categories().count(), 5);
    }

    #[test]
    fn json_shape() {
        let f = fortune_for(day(2026, 10, 16), ZodiacSign::Leo);
        let value = serde_json::to_value(&f).unwrap();
        assert_eq!(value["day"], "2026-10-16");
        assert_eq!(value["sign"], "leo");
        assert_eq!(value["overall"]["rating"], 4);
        assert!(value["advice"].is_string());
    }

    #[test]
    fn ratings_cover_pool_over_a_year() {
        let start = day(2026, 1, 1).date();
        let mut seen = std::collections::HashSet::new();
        for offset in 0..365 {
            let d = CalendarDay::new(start + chrono::Duration::days(offset));
            for sign in ZodiacSign::all() {
                seen.insert(fortune_for(d, *sign).overall.rating);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    fn arb_day() -> impl Strategy<Value = CalendarDay> {
        (1900i32..2200, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| day(y, m, d))
    }

    fn arb_sign() -> impl Strategy<Value = ZodiacSign> {
        (0usize..12).prop_map(|i| ZodiacSign::all()[i])
    }

    proptest! {
        #[test]
        fn deterministic(d in arb_day(), s in arb_sign()) {
            prop_assert_eq!(fortune_for(d, s), fortune_for(d, s));
        }

        #[test]
        fn ratings_in_range(d in arb_day(), s in arb_sign()) {
            let f = fortune_for(d, s);
            for (_, cat) in f.categories() {
                prop_assert!((2..=5).contains(&cat.rating));
            }
            prop_assert!(pools::ADVICE.contains(&f.advice));
        }
    }
}
