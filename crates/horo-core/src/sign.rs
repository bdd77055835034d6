use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Display label used for identifiers that are not one of the twelve signs.
pub const UNKNOWN_SIGN_LABEL: &str = "未知星座";

/// One of the twelve zodiac signs, in calendar order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    /// 白羊座, Mar 21 – Apr 19.
    Aries,
    /// 金牛座, Apr 20 – May 20.
    Taurus,
    /// 双子座, May 21 – Jun 21.
    Gemini,
    /// 巨蟹座, Jun 22 – Jul 22.
    Cancer,
    /// 狮子座, Jul 23 – Aug 22.
    Leo,
    /// 处女座, Aug 23 – Sep 22.
    Virgo,
    /// 天秤座, Sep 23 – Oct 23.
    Libra,
    /// 天蝎座, Oct 24 – Nov 22.
    Scorpio,
    /// 射手座, Nov 23 – Dec 21.
    Sagittarius,
    /// 摩羯座, Dec 22 – Jan 19.
    Capricorn,
    /// 水瓶座, Jan 20 – Feb 18.
    Aquarius,
    /// 双鱼座, Feb 19 – Mar 20.
    Pisces,
}

impl ZodiacSign {
    /// All signs in order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Aries,
            Self::Taurus,
            Self::Gemini,
            Self::Cancer,
            Self::Leo,
            Self::Virgo,
            Self::Libra,
            Self::Scorpio,
            Self::Sagittarius,
            Self::Capricorn,
            Self::Aquarius,
            Self::Pisces,
        ]
    }

    /// Stable lowercase identifier. This is what gets hashed and persisted.
    pub fn id(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// Chinese display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Aries => "白羊座",
            Self::Taurus => "金牛座",
            Self::Gemini => "双子座",
            Self::Cancer => "巨蟹座",
            Self::Leo => "狮子座",
            Self::Virgo => "处女座",
            Self::Libra => "天秤座",
            Self::Scorpio => "天蝎座",
            Self::Sagittarius => "射手座",
            Self::Capricorn => "摩羯座",
            Self::Aquarius => "水瓶座",
            Self::Pisces => "双鱼座",
        }
    }

    /// English name, capitalized.
    pub fn english_name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode astrological symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Aries => '♈',
            Self::Taurus => '♉',
            Self::Gemini => '♊',
            Self::Cancer => '♋',
            Self::Leo => '♌',
            Self::Virgo => '♍',
            Self::Libra => '♎',
            Self::Scorpio => '♏',
            Self::Sagittarius => '♐',
            Self::Capricorn => '♑',
            Self::Aquarius => '♒',
            Self::Pisces => '♓',
        }
    }

    /// Parse a sign from its identifier, English name, or Chinese name.
    ///
    /// Matching on identifiers and English names ignores case and surrounding
    /// whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|sign| sign.id() == lower || sign.display_name() == trimmed)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ZodiacSign {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownSign(s.to_string()))
    }
}

/// Display name for an arbitrary identifier, falling back to
/// [`UNKNOWN_SIGN_LABEL`] when the identifier is not a known sign.
pub fn display_name_for(id: &str) -> &'static str {
    ZodiacSign::parse(id).map_or(UNKNOWN_SIGN_LABEL, ZodiacSign::display_name)
}
