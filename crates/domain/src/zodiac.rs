//! Zodiac sign table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Sign names in rashi order, index 0 = Aries.
pub const SIGN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign for a rashi index in 0..12.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        SIGN_NAMES[self.index()]
    }

    pub fn symbol(&self) -> char {
        match self {
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown zodiac sign: {wanted}")))
    }
}

/// Tropical sun-sign date ranges as (sign, start month, start day, end month, end day).
const SUN_SIGN_RANGES: [(ZodiacSign, u32, u32, u32, u32); 12] = [
    (ZodiacSign::Aquarius, 1, 20, 2, 18),
    (ZodiacSign::Pisces, 2, 19, 3, 20),
    (ZodiacSign::Aries, 3, 21, 4, 19),
    (ZodiacSign::Taurus, 4, 20, 5, 20),
    (ZodiacSign::Gemini, 5, 21, 6, 20),
    (ZodiacSign::Cancer, 6, 21, 7, 22),
    (ZodiacSign::Leo, 7, 23, 8, 22),
    (ZodiacSign::Virgo, 8, 23, 9, 22),
    (ZodiacSign::Libra, 9, 23, 10, 22),
    (ZodiacSign::Scorpio, 10, 23, 11, 21),
    (ZodiacSign::Sagittarius, 11, 22, 12, 21),
    (ZodiacSign::Capricorn, 12, 22, 1, 19),
];

/// Sun sign for a birth month (1-12) and day (1-31).
///
/// Returns `None` for an impossible month/day pair.
pub fn sun_sign_for(month: u32, day: u32) -> Option<ZodiacSign> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    SUN_SIGN_RANGES
        .iter()
        .find(|(_, sm, sd, em, ed)| {
            (month == *sm && day >= *sd) || (month == *em && day <= *ed)
        })
        .map(|(sign, ..)| *sign)
}
